//! Chart datasets built from plot records
//!
//! Every track gets its own single-point dataset so each bubble carries its
//! own colour and hover label.

use crate::catalogue::{color_for_genre, Category};
use crate::track::PlotRecord;

/// Bubble radius in pixels
pub const POINT_RADIUS: f64 = 10.0;
/// Bubble radius while hovered
pub const POINT_HOVER_RADIUS: f64 = 15.0;
pub const POINT_BORDER_WIDTH: f64 = 2.0;

const SPOTIFY_TRACK_URL: &str = "https://open.spotify.com/track/";

/// One plotted track in mood space
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    /// Valence
    pub x: f64,
    /// Energy
    pub y: f64,
    pub radius: f64,
    pub id: String,
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub decade: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<PlotPoint>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: f64,
}

/// Build one dataset per record, coloured by the record's genre.
pub fn build_datasets(records: &[PlotRecord], catalogue: &[Category]) -> Vec<Dataset> {
    records
        .iter()
        .map(|record| {
            let color = color_for_genre(catalogue, &record.genre).to_string();
            let artist = if record.artist.is_empty() {
                "Unknown Artist"
            } else {
                record.artist.as_str()
            };
            Dataset {
                label: format!("{} by {}", record.name, artist),
                points: vec![PlotPoint {
                    x: record.valence,
                    y: record.energy,
                    radius: POINT_RADIUS,
                    id: record.id.clone(),
                    name: record.name.clone(),
                    artist: record.artist.clone(),
                    genre: record.genre.clone(),
                    decade: record.decade.clone(),
                }],
                background_color: color.clone(),
                border_color: color,
                border_width: POINT_BORDER_WIDTH,
            }
        })
        .collect()
}

/// The track shown in the detail panel
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedTrack {
    pub track_name: String,
    pub artist_name: String,
    pub genre: String,
    pub decade: String,
    pub energy: f64,
    pub valence: f64,
    pub listen_url: String,
    pub album_cover: Option<String>,
    pub preview_url: Option<String>,
}

impl SelectedTrack {
    /// Resolve a plotted point back into a selection. `record` supplies the
    /// URLs the point itself does not carry.
    pub fn from_point(point: &PlotPoint, record: Option<&PlotRecord>) -> Self {
        Self {
            track_name: point.name.clone(),
            artist_name: point.artist.clone(),
            genre: point.genre.clone(),
            decade: point.decade.clone(),
            energy: point.y,
            valence: point.x,
            listen_url: format!("{SPOTIFY_TRACK_URL}{}", point.id),
            album_cover: record.and_then(|r| r.album_cover.clone()),
            preview_url: record.and_then(|r| r.preview_url.clone()),
        }
    }
}

/// Selection for the point in dataset `index`, if there is one.
pub fn select_dataset(
    datasets: &[Dataset],
    records: &[PlotRecord],
    index: usize,
) -> Option<SelectedTrack> {
    let point = datasets.get(index)?.points.first()?;
    // Datasets are built one per record, in order
    Some(SelectedTrack::from_point(point, records.get(index)))
}
