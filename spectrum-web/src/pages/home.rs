use crate::api::{self, RecommendationRequest};
use crate::config::AppConfig;
use dioxus::prelude::*;
use spectrum_ui::stores::{HomeState, HomeStateStoreExt};
use spectrum_ui::HomeView;
use tracing::{error, info};

#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();
    let state = use_store(HomeState::default);

    rsx! {
        HomeView {
            state,
            on_mood_change: move |text: String| {
                state.mood_text().set(text);
            },
            on_genre_select: move |genre: Option<String>| {
                state.selected_genre().set(genre);
            },
            on_decade_decrease: move |_| {
                state.decade().write().decrease();
            },
            on_decade_increase: move |_| {
                state.decade().write().increase();
            },
            on_recommend: move |_| {
                let Some(genre) = state.selected_genre().read().clone() else {
                    return;
                };
                let request = RecommendationRequest {
                    text: state.mood_text().read().clone(),
                    genre,
                    decade: state.decade().read().current().code.to_string(),
                };
                let api_base = config.api_base.clone();
                state.loading().set(true);
                spawn(async move {
                    match api::fetch_recommendation(&api_base, &request).await {
                        Ok(recommendations) => {
                            info!("Received {} recommendations", recommendations.len());
                            state.recommendations().set(recommendations);
                        }
                        Err(e) => error!("Recommendation request failed: {e}"),
                    }
                    state.loading().set(false);
                });
            },
        }
    }
}
