//! Display types passed into view components

use serde::Deserialize;

/// A mood recommendation returned by `POST /recommendation`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub valence: f64,
    pub energy: f64,
    pub color: String,
    pub track_name: String,
    pub artist_name: String,
}
