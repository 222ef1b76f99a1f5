//! Detail panel for the selected track

use dioxus::prelude::*;
use spectrum_common::{decade_label, SelectedTrack};

/// Shown in place of a cover that fails to load
const COVER_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='300' height='300'%3E%3Crect width='300' height='300' fill='%23cccccc'/%3E%3Ctext x='150' y='155' font-size='20' text-anchor='middle' fill='%23666666'%3ENo Cover%3C/text%3E%3C/svg%3E";

/// Selected track: cover, metadata, Spotify link and audio preview
///
/// Key this by track so the cover fallback resets between selections.
#[component]
pub fn TrackPanel(track: SelectedTrack) -> Element {
    let mut cover_failed = use_signal(|| false);
    let genre = if track.genre.is_empty() {
        "Unknown"
    } else {
        track.genre.as_str()
    };
    let decade = if track.decade.is_empty() {
        "Unknown".to_string()
    } else {
        decade_label(&track.decade).to_string()
    };

    let cover = match &track.album_cover {
        Some(url) => {
            let src = if cover_failed() {
                COVER_PLACEHOLDER.to_string()
            } else {
                url.clone()
            };
            rsx! {
                img {
                    class: "album-cover",
                    src: "{src}",
                    alt: "{track.track_name} cover",
                    onerror: move |_| cover_failed.set(true),
                }
            }
        }
        None => rsx! {
            p { class: "no-cover", "Image URL not available" }
        },
    };

    rsx! {
        aside { class: "selected-track",
            {cover}
            h3 { "{track.track_name}" }
            p { class: "track-artist", "by {track.artist_name}" }
            p { "Genre: {genre}" }
            p { "Decade: {decade}" }
            a {
                class: "listen-link",
                href: "{track.listen_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Listen on Spotify"
            }
            if let Some(preview) = &track.preview_url {
                audio { class: "preview", controls: true, src: "{preview}" }
            }
        }
    }
}
