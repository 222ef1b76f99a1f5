//! Home page view
//!
//! Mood text, genre and decade pickers, and the recommendations returned for
//! them. The page owns the request; this view only reports intent.

use crate::components::button::{Button, ButtonVariant, ChromelessButton};
use crate::components::helpers::LoadingSpinner;
use crate::components::hero::Hero;
use crate::components::navbar::Logo;
use crate::display_types::Recommendation;
use crate::stores::{HomeState, HomeStateStoreExt};
use dioxus::prelude::*;
use spectrum_common::{genre_catalogue, DecadeStepper};

#[component]
pub fn HomeView(
    state: ReadStore<HomeState>,
    on_mood_change: EventHandler<String>,
    on_genre_select: EventHandler<Option<String>>,
    on_decade_decrease: EventHandler<()>,
    on_decade_increase: EventHandler<()>,
    on_recommend: EventHandler<()>,
) -> Element {
    let mood_text = state.mood_text().read().clone();
    let selected_genre = state.selected_genre().read().clone();
    let decade = *state.decade().read();
    let recommendations = state.recommendations().read().clone();
    let loading = *state.loading().read();
    let can_recommend = selected_genre.is_some() && !loading;

    rsx! {
        main { class: "home",
            Logo {}
            Hero {}
            form {
                class: "home-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                },
                input {
                    class: "mood-input",
                    r#type: "text",
                    placeholder: "Enter your mood",
                    value: "{mood_text}",
                    oninput: move |evt| on_mood_change.call(evt.value()),
                }
                div { class: "selectors",
                    GenreSelect { selected: selected_genre, on_select: on_genre_select }
                    DecadeStepperView {
                        stepper: decade,
                        on_decrease: on_decade_decrease,
                        on_increase: on_decade_increase,
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: Some("recommend-button".to_string()),
                    disabled: !can_recommend,
                    onclick: move |_| on_recommend.call(()),
                    "Get Recommendation"
                }
            }
            if loading {
                LoadingSpinner { message: "Finding songs...".to_string() }
            }
            RecommendationList { recommendations }
        }
    }
}

/// Native select over the genre catalogue. The empty option means no genre.
#[component]
fn GenreSelect(selected: Option<String>, on_select: EventHandler<Option<String>>) -> Element {
    let current = selected.unwrap_or_default();

    rsx! {
        div { class: "genre-select",
            label { r#for: "genre-select", "Select Music Genre" }
            select {
                id: "genre-select",
                value: "{current}",
                onchange: move |evt| {
                    let value = evt.value();
                    on_select.call(if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", "Choose a genre" }
                for category in genre_catalogue().iter() {
                    option {
                        key: "{category.name}",
                        value: "{category.name}",
                        selected: category.name == current,
                        "{category.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn DecadeStepperView(
    stepper: DecadeStepper,
    on_decrease: EventHandler<()>,
    on_increase: EventHandler<()>,
) -> Element {
    let label = stepper.current().label;

    rsx! {
        div { class: "decade-stepper",
            ChromelessButton {
                class: Some("stepper-button".to_string()),
                aria_label: Some("Previous Decade".to_string()),
                disabled: !stepper.can_decrease(),
                onclick: move |_| on_decrease.call(()),
                "-"
            }
            span { class: "decade-display", "{label}" }
            ChromelessButton {
                class: Some("stepper-button".to_string()),
                aria_label: Some("Next Decade".to_string()),
                disabled: !stepper.can_increase(),
                onclick: move |_| on_increase.call(()),
                "+"
            }
        }
    }
}

#[component]
fn RecommendationList(recommendations: Vec<Recommendation>) -> Element {
    rsx! {
        section { class: "recommendations",
            for (index , rec) in recommendations.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "recommendation-item",
                    style: "color: {rec.color}",
                    "{rec.track_name} by {rec.artist_name}"
                }
            }
        }
    }
}
