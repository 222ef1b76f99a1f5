//! Genre catalogue and its colour assignment

use std::sync::OnceLock;

/// Colour used for tracks whose genre is not in the catalogue
pub const DEFAULT_GENRE_COLOR: &str = "rgb(76, 175, 80)";

/// Alpha applied to every catalogue colour
const CATALOGUE_ALPHA: f64 = 0.8;

/// Genre identifiers understood by the recommendation backend
#[rustfmt::skip]
pub const GENRES: &[&str] = &[
    "acoustic", "afrobeat", "alt-rock", "alternative", "ambient", "anime",
    "black-metal", "bluegrass", "blues", "bossa-nova", "brazil", "breakbeat",
    "british", "cantopop", "chicago-house", "children", "chill", "classical",
    "club", "comedy", "country", "dance", "dancehall", "death-metal",
    "deep-house", "detroit-techno", "disco", "disney", "drum-and-bass", "dub",
    "dubstep", "edm", "electro", "electronic", "emo", "folk",
    "forro", "french", "funk", "garage", "german", "gospel",
    "goth", "grindcore", "groove", "grunge", "guitar", "happy",
    "hard-rock", "hardcore", "hardstyle", "heavy-metal", "hip-hop", "holidays",
    "honky-tonk", "house", "idm", "indian", "indie", "indie-pop",
    "industrial", "iranian", "j-dance", "j-idol", "j-pop", "j-rock",
    "jazz", "k-pop", "kids", "latin", "latino", "malay",
    "mandopop", "metal", "metal-misc", "metalcore", "minimal-techno", "movies",
    "mpb", "new-age", "new-release", "opera", "pagode", "party",
    "philippines-opm", "piano", "pop", "pop-film", "post-dubstep", "power-pop",
    "progressive-house", "psych-rock", "punk", "punk-rock", "r-n-b", "rainy-day",
    "reggae", "reggaeton", "road-trip", "rock", "rock-n-roll", "rockabilly",
    "romance", "sad", "salsa", "samba", "sertanejo", "show-tunes",
    "singer-songwriter", "ska", "sleep", "songwriter", "soul", "soundtracks",
    "spanish", "study", "summer", "swedish", "synth-pop", "tango",
    "techno", "trance", "trip-hop", "turkish", "work-out", "world-music",
];

/// A genre together with its assigned colour
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub color: String,
}

/// Evenly spaced hues with alternating lightness so neighbours stay distinct.
pub fn rainbow_colors(count: usize, alpha: f64) -> Vec<String> {
    (0..count)
        .map(|i| {
            let hue = i as f64 * 360.0 / count as f64;
            let lightness = 45 + (i % 2) * 10;
            format!("hsla({hue}, 75%, {lightness}%, {alpha})")
        })
        .collect()
}

/// Pair each name with its colour, in order.
pub fn categories_from_names<S: AsRef<str>>(names: &[S]) -> Vec<Category> {
    let colors = rainbow_colors(names.len(), CATALOGUE_ALPHA);
    names
        .iter()
        .zip(colors)
        .map(|(name, color)| Category {
            name: name.as_ref().to_string(),
            color,
        })
        .collect()
}

/// The process-wide genre catalogue, built on first use.
pub fn genre_catalogue() -> &'static [Category] {
    static CATALOGUE: OnceLock<Vec<Category>> = OnceLock::new();
    CATALOGUE.get_or_init(|| categories_from_names(GENRES))
}

/// Colour for a genre, or [`DEFAULT_GENRE_COLOR`] when the genre is unknown.
pub fn color_for_genre<'a>(catalogue: &'a [Category], genre: &str) -> &'a str {
    catalogue
        .iter()
        .find(|c| c.name == genre)
        .map(|c| c.color.as_str())
        .unwrap_or(DEFAULT_GENRE_COLOR)
}

/// Turn `rgb(r, g, b)` into `rgba(r, g, b, a)` with `a` clamped to [0, 1].
pub fn transparentize(color: &str, opacity: f64) -> String {
    let alpha = opacity.clamp(0.0, 1.0);
    color
        .replacen("rgb", "rgba", 1)
        .replacen(')', &format!(", {alpha})"), 1)
}
