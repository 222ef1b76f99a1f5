//! State of one spectrum page: filters, plotted tracks and the selection

use crate::catalogue::Category;
use crate::dataset::{build_datasets, select_dataset, Dataset, SelectedTrack};
use crate::fetch::{FetchCoordinator, FetchDecision};
use crate::filter::FilterSet;
use crate::track::{map_record, PlotRecord, RawTrack};

/// Everything the spectrum page shows, and the transitions between states
///
/// Any filter change clears the selection, since the plot it pointed into
/// is about to be replaced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpectrumSession {
    filters: FilterSet,
    coordinator: FetchCoordinator,
    records: Vec<PlotRecord>,
    datasets: Vec<Dataset>,
    selected: Option<SelectedTrack>,
}

impl SpectrumSession {
    pub fn new(track_limit: usize) -> Self {
        Self {
            coordinator: FetchCoordinator::new(track_limit),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn records(&self) -> &[PlotRecord] {
        &self.records
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn selected(&self) -> Option<&SelectedTrack> {
        self.selected.as_ref()
    }

    /// Whether a request is outstanding whose response would still be applied
    pub fn is_loading(&self) -> bool {
        self.coordinator.pending().is_some()
    }

    pub fn toggle_genre(&mut self, genre: &str) -> FetchDecision {
        self.filters.toggle_genre(genre);
        self.filters_changed()
    }

    pub fn toggle_decade(&mut self, decade: &str) -> FetchDecision {
        self.filters.toggle_decade(decade);
        self.filters_changed()
    }

    fn filters_changed(&mut self) -> FetchDecision {
        self.selected = None;
        let decision = self.coordinator.on_filters_changed(&self.filters);
        if decision == FetchDecision::Clear {
            self.records.clear();
            self.datasets.clear();
        }
        decision
    }

    /// Replace the plot with a response, unless a newer request has been
    /// issued since. Returns whether the response was applied.
    pub fn apply_response(
        &mut self,
        seq: u64,
        tracks: Vec<RawTrack>,
        catalogue: &[Category],
    ) -> bool {
        if !self.coordinator.accepts(seq) {
            return false;
        }
        self.records = tracks.into_iter().map(map_record).collect();
        self.datasets = build_datasets(&self.records, catalogue);
        self.coordinator.settle(seq);
        true
    }

    /// A request failed: keep whatever is plotted.
    pub fn fail(&mut self, seq: u64) {
        self.coordinator.settle(seq);
    }

    /// Select the track plotted as dataset `index`. An index with no
    /// dataset leaves the current selection alone.
    pub fn select(&mut self, index: usize) -> Option<&SelectedTrack> {
        if let Some(track) = select_dataset(&self.datasets, &self.records, index) {
            self.selected = Some(track);
        }
        self.selected.as_ref()
    }
}
