//! Backend track records and their mapping into plot records

use serde::{Deserialize, Serialize};

/// A track as returned by `GET /recommendation/database-tracks`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrack {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub decade: String,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub tempo: f64,
    pub duration_ms: f64,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub album_cover: Option<String>,
}

/// A track ready for plotting
///
/// Optional URLs are always present as fields; a missing URL is `None`
/// and serializes as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotRecord {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub decade: String,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub tempo: f64,
    /// Duration in seconds
    pub duration: f64,
    pub preview_url: Option<String>,
    pub album_cover: Option<String>,
}

/// Map a backend record into a plot record.
pub fn map_record(raw: RawTrack) -> PlotRecord {
    PlotRecord {
        id: raw.id,
        name: raw.name,
        artist: raw.artist,
        genre: raw.genre,
        decade: raw.decade,
        energy: raw.energy,
        valence: raw.valence,
        danceability: raw.danceability,
        tempo: raw.tempo,
        duration: raw.duration_ms / 1000.0,
        preview_url: non_empty(raw.preview_url),
        album_cover: non_empty(raw.album_cover),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_json() -> serde_json::Value {
        serde_json::json!({
            "id": "1",
            "name": "A",
            "artist": "B",
            "genre": "rock",
            "decade": "1990-1999",
            "energy": 0.8,
            "valence": 0.3,
            "danceability": 0.5,
            "tempo": 120,
            "durationMs": 200000
        })
    }

    #[test]
    fn deserializes_backend_payload_without_optional_fields() {
        let raw: RawTrack = serde_json::from_value(raw_json()).unwrap();
        assert_eq!(raw.name, "A");
        assert_eq!(raw.duration_ms, 200000.0);
        assert_eq!(raw.preview_url, None);
        assert_eq!(raw.album_cover, None);
    }

    #[test]
    fn converts_duration_to_seconds() {
        let raw: RawTrack = serde_json::from_value(raw_json()).unwrap();
        let record = map_record(raw);
        assert_eq!(record.duration, 200.0);
        assert_eq!(record.valence, 0.3);
        assert_eq!(record.energy, 0.8);
    }

    #[test]
    fn missing_urls_serialize_as_null() {
        let raw: RawTrack = serde_json::from_value(raw_json()).unwrap();
        let value = serde_json::to_value(map_record(raw)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("previewUrl"), Some(&serde_json::Value::Null));
        assert_eq!(object.get("albumCover"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn empty_urls_become_absent() {
        let mut json = raw_json();
        json["previewUrl"] = serde_json::json!("");
        json["albumCover"] = serde_json::json!("https://img.example/cover.jpg");
        let record = map_record(serde_json::from_value(json).unwrap());
        assert_eq!(record.preview_url, None);
        assert_eq!(
            record.album_cover.as_deref(),
            Some("https://img.example/cover.jpg")
        );
    }

    #[test]
    fn explicit_null_urls_are_accepted() {
        let mut json = raw_json();
        json["previewUrl"] = serde_json::Value::Null;
        let raw: RawTrack = serde_json::from_value(json).unwrap();
        assert_eq!(raw.preview_url, None);
    }
}
