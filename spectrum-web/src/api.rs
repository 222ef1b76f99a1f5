use serde::Serialize;
use spectrum_common::{QueryError, RawTrack, TrackQuery};
use spectrum_ui::display_types::Recommendation;
use thiserror::Error;

/// Backend path for mood recommendations
pub const RECOMMENDATION_PATH: &str = "/recommendation";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(#[source] reqwest::Error),
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),
}

/// Body of `POST /recommendation`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub text: String,
    pub genre: String,
    pub decade: String,
}

fn join(base: &str, path_and_query: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path_and_query)
}

pub fn tracks_url(base: &str, query: &TrackQuery) -> Result<String, ApiError> {
    Ok(join(base, &query.path_and_query()?))
}

pub fn recommendation_url(base: &str) -> String {
    join(base, RECOMMENDATION_PATH)
}

fn check_status(resp: &reqwest::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Tracks matching the query's genres and decades
pub async fn fetch_tracks(base: &str, query: &TrackQuery) -> Result<Vec<RawTrack>, ApiError> {
    let url = tracks_url(base, query)?;
    let resp = reqwest::get(&url).await.map_err(ApiError::Network)?;
    check_status(&resp)?;
    resp.json().await.map_err(ApiError::Parse)
}

pub async fn fetch_recommendation(
    base: &str,
    request: &RecommendationRequest,
) -> Result<Vec<Recommendation>, ApiError> {
    let resp = reqwest::Client::new()
        .post(recommendation_url(base))
        .json(request)
        .send()
        .await
        .map_err(ApiError::Network)?;
    check_status(&resp)?;
    resp.json().await.map_err(ApiError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_common::FilterSet;

    #[test]
    fn tracks_url_joins_base_and_query() {
        let mut filters = FilterSet::new();
        filters.toggle_genre("rock");
        filters.toggle_decade("1990-1999");
        let query = TrackQuery::from_filters(&filters, 200);

        let url = tracks_url("http://localhost:8080/", &query).unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/recommendation/database-tracks?genre=rock&decade=1990-1999&limit=200"
        );
    }

    #[test]
    fn recommendation_url_has_no_double_slash() {
        assert_eq!(
            recommendation_url("http://localhost:8080/"),
            "http://localhost:8080/recommendation"
        );
    }

    #[test]
    fn recommendation_request_body() {
        let request = RecommendationRequest {
            text: "sunny".to_string(),
            genre: "pop".to_string(),
            decade: "2020-2029".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"text": "sunny", "genre": "pop", "decade": "2020-2029"})
        );
    }

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(ApiError::Status(503).to_string(), "Server returned status 503");
    }
}
