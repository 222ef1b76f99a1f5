//! Spectrum page state store

use dioxus::prelude::*;
use spectrum_common::SpectrumSession;

/// State for the spectrum view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SpectrumState {
    /// Filters, plotted tracks and the current selection
    pub session: SpectrumSession,
}
