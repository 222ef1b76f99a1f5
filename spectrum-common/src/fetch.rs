//! Fetch/refresh coordination for the spectrum plot
//!
//! Every filter change issues a new request. Requests carry a sequence
//! number and only the most recently issued one may replace the plot, so a
//! slow response to an old filter set can never overwrite a newer one.

use crate::filter::FilterSet;
pub use serde_urlencoded::ser::Error as QueryError;
use tracing::debug;

/// Backend path for filtered track lookups
pub const TRACKS_PATH: &str = "/recommendation/database-tracks";

/// Page-size cap sent with every track query
pub const DEFAULT_TRACK_LIMIT: usize = 200;

/// Query parameters for one track lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackQuery {
    pub genres: Vec<String>,
    pub decades: Vec<String>,
    pub limit: usize,
}

impl TrackQuery {
    pub fn from_filters(filters: &FilterSet, limit: usize) -> Self {
        Self {
            genres: filters.genres().to_vec(),
            decades: filters.decades().to_vec(),
            limit,
        }
    }

    /// `genre=..&genre=..&decade=..&limit=..`
    pub fn to_query_string(&self) -> Result<String, QueryError> {
        let limit = self.limit.to_string();
        let pairs: Vec<(&str, &str)> = self
            .genres
            .iter()
            .map(|g| ("genre", g.as_str()))
            .chain(self.decades.iter().map(|d| ("decade", d.as_str())))
            .chain(std::iter::once(("limit", limit.as_str())))
            .collect();
        serde_urlencoded::to_string(pairs)
    }

    /// Path plus query string, relative to the API base.
    pub fn path_and_query(&self) -> Result<String, QueryError> {
        Ok(format!("{TRACKS_PATH}?{}", self.to_query_string()?))
    }
}

/// A request the caller should issue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: TrackQuery,
}

/// What to do after the filters changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchDecision {
    /// No filters are active: clear the plot, issue nothing
    Clear,
    /// Issue this request
    Fetch(FetchTicket),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchCoordinator {
    limit: usize,
    next_seq: u64,
    pending: Option<u64>,
}

impl Default for FetchCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_TRACK_LIMIT)
    }
}

impl FetchCoordinator {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            next_seq: 1,
            pending: None,
        }
    }

    /// Sequence number of the request whose response may still be applied
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    /// Decide what the new filter set requires. Clearing also retires any
    /// request still in flight.
    pub fn on_filters_changed(&mut self, filters: &FilterSet) -> FetchDecision {
        if filters.is_empty() {
            self.pending = None;
            return FetchDecision::Clear;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending = Some(seq);

        FetchDecision::Fetch(FetchTicket {
            seq,
            query: TrackQuery::from_filters(filters, self.limit),
        })
    }

    /// Whether a response for `seq` may replace the plot.
    pub fn accepts(&self, seq: u64) -> bool {
        if self.pending == Some(seq) {
            return true;
        }
        debug!(
            "Discarding stale track response #{} (pending is {:?})",
            seq, self.pending
        );
        false
    }

    /// The request `seq` finished, successfully or not. Older requests
    /// finishing do not affect the pending one.
    pub fn settle(&mut self, seq: u64) {
        if self.pending == Some(seq) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(genres: &[&str], decades: &[&str]) -> FilterSet {
        let mut set = FilterSet::new();
        for g in genres {
            set.toggle_genre(g);
        }
        for d in decades {
            set.toggle_decade(d);
        }
        set
    }

    #[test]
    fn empty_filters_issue_no_request() {
        let mut coordinator = FetchCoordinator::default();
        assert_eq!(
            coordinator.on_filters_changed(&FilterSet::new()),
            FetchDecision::Clear
        );
        assert_eq!(coordinator.pending(), None);
    }

    #[test]
    fn single_genre_query_matches_backend_format() {
        let mut coordinator = FetchCoordinator::default();
        let FetchDecision::Fetch(ticket) = coordinator.on_filters_changed(&filters(&["rock"], &[]))
        else {
            panic!("expected a fetch");
        };
        assert_eq!(ticket.query.to_query_string().unwrap(), "genre=rock&limit=200");
        assert_eq!(
            ticket.query.path_and_query().unwrap(),
            "/recommendation/database-tracks?genre=rock&limit=200"
        );
    }

    #[test]
    fn repeated_parameters_for_every_filter() {
        let query = TrackQuery::from_filters(&filters(&["rock", "r-n-b"], &["1990-1999"]), 50);
        assert_eq!(
            query.to_query_string().unwrap(),
            "genre=rock&genre=r-n-b&decade=1990-1999&limit=50"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let query = TrackQuery::from_filters(&filters(&["drum & bass"], &[">1960"]), 200);
        assert_eq!(
            query.to_query_string().unwrap(),
            "genre=drum+%26+bass&decade=%3E1960&limit=200"
        );
    }

    #[test]
    fn only_latest_response_is_accepted() {
        let mut coordinator = FetchCoordinator::default();
        let FetchDecision::Fetch(first) = coordinator.on_filters_changed(&filters(&["rock"], &[]))
        else {
            panic!("expected a fetch");
        };
        let FetchDecision::Fetch(second) =
            coordinator.on_filters_changed(&filters(&["rock", "jazz"], &[]))
        else {
            panic!("expected a fetch");
        };

        assert!(second.seq > first.seq);
        assert!(!coordinator.accepts(first.seq));
        assert!(coordinator.accepts(second.seq));
    }

    #[test]
    fn clearing_retires_in_flight_request() {
        let mut coordinator = FetchCoordinator::default();
        let FetchDecision::Fetch(ticket) = coordinator.on_filters_changed(&filters(&["rock"], &[]))
        else {
            panic!("expected a fetch");
        };
        coordinator.on_filters_changed(&FilterSet::new());
        assert!(!coordinator.accepts(ticket.seq));
    }

    #[test]
    fn settling_an_old_request_keeps_the_new_one_pending() {
        let mut coordinator = FetchCoordinator::default();
        let FetchDecision::Fetch(old) = coordinator.on_filters_changed(&filters(&["rock"], &[]))
        else {
            panic!("expected a fetch");
        };
        let FetchDecision::Fetch(new) = coordinator.on_filters_changed(&filters(&["pop"], &[]))
        else {
            panic!("expected a fetch");
        };
        coordinator.settle(old.seq);
        assert_eq!(coordinator.pending(), Some(new.seq));
        coordinator.settle(new.seq);
        assert_eq!(coordinator.pending(), None);
        assert!(!coordinator.accepts(new.seq));
    }

    #[test]
    fn decade_only_filters_still_fetch() {
        let mut coordinator = FetchCoordinator::new(10);
        let decision = coordinator.on_filters_changed(&filters(&[], &["1980-1989"]));
        assert!(matches!(decision, FetchDecision::Fetch(t) if t.query.limit == 10));
    }
}
