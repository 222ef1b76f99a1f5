//! Rotating greeting on the home page

use crate::utils::sleep_ms;
use dioxus::prelude::*;

const PHRASES: &[&str] = &[
    "How are you feeling today?",
    "¿Cómo te sientes hoy?",
    "Comment te sens-tu aujourd'hui?",
    "Wie fühlst du dich heute?",
    "Come ti senti oggi?",
    "你今天感觉如何？",
    "今日はどんな気分ですか？",
    "오늘 기분이 어때요?",
    "Como você está se sentindo hoje?",
];

/// Time each phrase stays on screen
const PHRASE_INTERVAL_MS: u64 = 5000;
/// Fade-out before the next phrase appears
const FADE_MS: u64 = 500;

fn next_phrase(index: usize) -> usize {
    (index + 1) % PHRASES.len()
}

#[component]
pub fn Hero() -> Element {
    let mut index = use_signal(|| 0usize);
    let mut typing = use_signal(|| true);

    use_future(move || async move {
        loop {
            sleep_ms(PHRASE_INTERVAL_MS).await;
            typing.set(false);
            sleep_ms(FADE_MS).await;
            let next = next_phrase(index());
            index.set(next);
            typing.set(true);
        }
    });

    let phrase = PHRASES[index() % PHRASES.len()];
    let class = if typing() { "typewriter typing" } else { "typewriter" };

    rsx! {
        div { class: "hero",
            div { class,
                h1 { "{phrase}" }
            }
            p { class: "subtitle", "Discover songs that match your mood" }
        }
    }
}
