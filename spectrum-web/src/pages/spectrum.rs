use crate::api;
use crate::config::AppConfig;
use dioxus::prelude::*;
use spectrum_common::{
    genre_catalogue, place_buttons_randomly, FetchDecision, LayoutConfig, SpectrumSession,
};
use spectrum_ui::stores::{SpectrumState, SpectrumStateStoreExt};
use spectrum_ui::SpectrumView;
use tracing::{debug, error};

/// Issue the request a filter change asked for and hand the result back to
/// the session, which drops it if a newer request has since been issued.
fn refresh(state: Store<SpectrumState>, api_base: String, decision: FetchDecision) {
    let FetchDecision::Fetch(ticket) = decision else {
        debug!("Filters cleared, plot emptied");
        return;
    };
    spawn(async move {
        match api::fetch_tracks(&api_base, &ticket.query).await {
            Ok(tracks) => {
                let count = tracks.len();
                if state
                    .session()
                    .write()
                    .apply_response(ticket.seq, tracks, genre_catalogue())
                {
                    debug!("Plotted {count} tracks for request {}", ticket.seq);
                }
            }
            Err(e) => {
                error!("Failed to fetch tracks: {e}");
                state.session().write().fail(ticket.seq);
            }
        }
    });
}

#[component]
pub fn Spectrum() -> Element {
    let config = use_context::<AppConfig>();
    let track_limit = config.track_limit;
    let state = use_store(move || SpectrumState {
        session: SpectrumSession::new(track_limit),
    });
    let genre_buttons =
        use_hook(|| place_buttons_randomly(genre_catalogue(), &LayoutConfig::default()));

    let genre_base = config.api_base.clone();
    let decade_base = config.api_base.clone();

    rsx! {
        SpectrumView {
            state,
            genre_buttons,
            on_genre_toggle: move |genre: String| {
                let decision = state.session().write().toggle_genre(&genre);
                refresh(state, genre_base.clone(), decision);
            },
            on_decade_toggle: move |decade: String| {
                let decision = state.session().write().toggle_decade(&decade);
                refresh(state, decade_base.clone(), decision);
            },
            on_point_select: move |index: usize| {
                state.session().write().select(index);
            },
        }
    }
}
