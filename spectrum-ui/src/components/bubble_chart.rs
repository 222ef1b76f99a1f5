//! Mood scatter plot
//!
//! One bubble per track, valence on x and energy on y. Clicks are resolved
//! against the datasets with `ChartGeometry::hit_test` rather than per-bubble
//! handlers so overlapping bubbles pick the nearest centre.

use dioxus::prelude::*;
use spectrum_common::{ChartGeometry, Dataset, POINT_HOVER_RADIUS};

/// One drawn circle, in plot pixels
struct Bubble {
    key: String,
    cx: f64,
    cy: f64,
    r: f64,
    fill: String,
    stroke: String,
    stroke_width: f64,
}

/// Hovered bubble: dataset index plus the track id drawn there
type Hover = (usize, String);

fn hover_at(datasets: &[Dataset], index: Option<usize>) -> Option<Hover> {
    let index = index?;
    let point = datasets.get(index)?.points.first()?;
    Some((index, point.id.clone()))
}

/// Index of the hover if it still points at the same track. A refetch that
/// replaces the datasets drops it.
fn live_hover(datasets: &[Dataset], hover: Option<&Hover>) -> Option<usize> {
    let (index, id) = hover?;
    let point = datasets.get(*index)?.points.first()?;
    (point.id == *id).then_some(*index)
}

/// Pointer position in plot pixels, corrected for any CSS scaling of the svg
fn plot_coordinates(
    element: Option<&web_sys::Element>,
    geometry: &ChartGeometry,
    evt: &MouseEvent,
) -> Option<(f64, f64)> {
    let rect = element?.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let client = evt.client_coordinates();
    let x = (client.x - rect.left()) * geometry.size / rect.width();
    let y = (client.y - rect.top()) * geometry.size / rect.height();
    Some((x, y))
}

#[component]
pub fn BubbleChart(datasets: Vec<Dataset>, on_point_select: EventHandler<usize>) -> Element {
    let geometry = ChartGeometry::default();
    let size = geometry.size;
    let mut hovered = use_signal(|| None::<Hover>);
    let mut plot_element = use_signal(|| None::<web_sys::Element>);

    let hovered_index = live_hover(&datasets, hovered.read().as_ref());
    let hover_label = hovered_index.map(|index| {
        let dataset = &datasets[index];
        let (x, y) = dataset
            .points
            .first()
            .map(|p| geometry.to_pixel(p.x, p.y))
            .unwrap_or_default();
        (dataset.label.clone(), x, y - POINT_HOVER_RADIUS - 6.0)
    });
    let cursor = if hovered_index.is_some() { "pointer" } else { "inherit" };

    let bubbles: Vec<Bubble> = datasets
        .iter()
        .enumerate()
        .flat_map(|(index, dataset)| {
            dataset.points.iter().map(move |point| {
                let (cx, cy) = geometry.to_pixel(point.x, point.y);
                Bubble {
                    key: format!("{index}-{}", point.id),
                    cx,
                    cy,
                    r: if hovered_index == Some(index) {
                        POINT_HOVER_RADIUS
                    } else {
                        point.radius
                    },
                    fill: dataset.background_color.clone(),
                    stroke: dataset.border_color.clone(),
                    stroke_width: dataset.border_width,
                }
            })
        })
        .collect();

    let datasets_for_move = datasets.clone();
    let datasets_for_click = datasets.clone();

    rsx! {
        svg {
            class: "bubble-chart",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 {size} {size}",
            style: "cursor: {cursor}",
            onmounted: move |evt| {
                plot_element.set(evt.data().downcast::<web_sys::Element>().cloned());
            },
            onmousemove: move |evt| {
                let current = live_hover(&datasets_for_move, hovered.read().as_ref());
                let hit = plot_coordinates(plot_element.read().as_ref(), &geometry, &evt)
                    .and_then(|(x, y)| geometry.hit_test(&datasets_for_move, x, y, current));
                let next = hover_at(&datasets_for_move, hit);
                if *hovered.read() != next {
                    hovered.set(next);
                }
            },
            onmouseleave: move |_| hovered.set(None),
            onclick: move |evt| {
                let current = live_hover(&datasets_for_click, hovered.read().as_ref());
                let hit = plot_coordinates(plot_element.read().as_ref(), &geometry, &evt)
                    .and_then(|(x, y)| geometry.hit_test(&datasets_for_click, x, y, current));
                if let Some(index) = hit {
                    on_point_select.call(index);
                }
            },
            for bubble in bubbles {
                circle {
                    key: "{bubble.key}",
                    cx: "{bubble.cx}",
                    cy: "{bubble.cy}",
                    r: "{bubble.r}",
                    fill: "{bubble.fill}",
                    stroke: "{bubble.stroke}",
                    stroke_width: "{bubble.stroke_width}",
                    pointer_events: "none",
                }
            }
            if let Some((label, x, y)) = hover_label {
                text {
                    class: "bubble-label",
                    x: "{x}",
                    y: "{y}",
                    text_anchor: "middle",
                    pointer_events: "none",
                    "{label}"
                }
            }
        }
    }
}

/// Quadrant captions around the plot
#[component]
pub fn MoodLabels() -> Element {
    rsx! {
        div { class: "mood-label label-energetic", "Energetic" }
        div { class: "mood-label label-calm", "Calm" }
        div { class: "mood-label label-melancholic", "Melancholic" }
        div { class: "mood-label label-optimistic", "Optimistic" }
    }
}
