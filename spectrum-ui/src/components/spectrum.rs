//! Spectrum page view
//!
//! A pannable viewport holding the circular plot and the genre buttons
//! scattered around it, with decade toggles above and the selected-track
//! panel alongside.

use crate::components::bubble_chart::{BubbleChart, MoodLabels};
use crate::components::decade_toggles::DecadeToggles;
use crate::components::genre_ring::GenreRing;
use crate::components::helpers::LoadingSpinner;
use crate::components::track_panel::TrackPanel;
use crate::stores::{SpectrumState, SpectrumStateStoreExt};
use dioxus::prelude::*;
use spectrum_common::{CategoryButton, DragState, ScrollOffset};

fn scroll_of(element: &web_sys::Element) -> ScrollOffset {
    ScrollOffset {
        x: f64::from(element.scroll_left()),
        y: f64::from(element.scroll_top()),
    }
}

/// Start with the plot in the middle of the viewport
fn center_viewport(element: &web_sys::Element) {
    element.set_scroll_left((element.scroll_width() - element.client_width()) / 2);
    element.set_scroll_top((element.scroll_height() - element.client_height()) / 2);
}

#[component]
pub fn SpectrumView(
    state: ReadStore<SpectrumState>,
    /// Genre buttons, already placed around the ring
    genre_buttons: Vec<CategoryButton>,
    on_genre_toggle: EventHandler<String>,
    on_decade_toggle: EventHandler<String>,
    /// Index into the current datasets of the clicked bubble
    on_point_select: EventHandler<usize>,
) -> Element {
    let session = state.session().read().clone();
    let mut drag = use_signal(DragState::default);
    let mut viewport = use_signal(|| None::<web_sys::Element>);

    let cursor = drag.read().cursor();
    let filters = session.filters().clone();
    let datasets = session.datasets().to_vec();
    let selected = session.selected().cloned();

    rsx! {
        main { class: "spectrum",
            DecadeToggles { filters: filters.clone(), on_toggle: on_decade_toggle }
            if session.is_loading() {
                LoadingSpinner { message: "Loading tracks...".to_string() }
            }
            div {
                class: "chart-container",
                style: "cursor: {cursor}",
                onmounted: move |evt| {
                    let element = evt.data().downcast::<web_sys::Element>().cloned();
                    if let Some(element) = &element {
                        center_viewport(element);
                    }
                    viewport.set(element);
                },
                onmousedown: move |evt| {
                    let Some(element) = viewport.read().clone() else {
                        return;
                    };
                    let pointer = evt.client_coordinates();
                    drag.write().begin(pointer.x, pointer.y, scroll_of(&element));
                },
                onmousemove: move |evt| {
                    let pointer = evt.client_coordinates();
                    let Some(scroll) = drag.read().scroll_for(pointer.x, pointer.y) else {
                        return;
                    };
                    evt.prevent_default();
                    if let Some(element) = viewport.read().as_ref() {
                        element.set_scroll_left(scroll.x as i32);
                        element.set_scroll_top(scroll.y as i32);
                    }
                },
                onmouseup: move |_| {
                    drag.write().end();
                },
                onmouseleave: move |_| {
                    drag.write().end();
                },
                div { class: "chart-canvas",
                    div { class: "circular-chart-wrapper",
                        MoodLabels {}
                        BubbleChart { datasets, on_point_select }
                    }
                    GenreRing {
                        buttons: genre_buttons,
                        filters,
                        on_toggle: on_genre_toggle,
                    }
                }
            }
            if let Some(track) = selected {
                TrackPanel { key: "{track.listen_url}", track }
            }
        }
    }
}
