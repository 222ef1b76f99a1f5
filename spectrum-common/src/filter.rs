//! Active genre and decade filters

/// The genres and decades currently driving the track query
///
/// Both lists keep toggle order so the query string is stable, but
/// membership is all that matters to the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    genres: Vec<String>,
    decades: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn decades(&self) -> &[String] {
        &self.decades
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn has_decade(&self, decade: &str) -> bool {
        self.decades.iter().any(|d| d == decade)
    }

    /// No genre and no decade selected
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.decades.is_empty()
    }

    /// Add the genre if absent, remove it if present. Returns whether it is
    /// now active.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        toggle(&mut self.genres, genre)
    }

    /// Add the decade if absent, remove it if present. Returns whether it is
    /// now active.
    pub fn toggle_decade(&mut self, decade: &str) -> bool {
        toggle(&mut self.decades, decade)
    }
}

fn toggle(values: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
        false
    } else {
        values.push(value.to_string());
        true
    }
}
