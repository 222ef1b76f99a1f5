//! Home page state store

use crate::display_types::Recommendation;
use dioxus::prelude::*;
use spectrum_common::DecadeStepper;

/// State for the home view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct HomeState {
    /// Free-text mood the user typed
    pub mood_text: String,
    /// Genre picked in the dropdown
    pub selected_genre: Option<String>,
    /// Decade picked with the stepper
    pub decade: DecadeStepper,
    /// Recommendations from the last successful request
    pub recommendations: Vec<Recommendation>,
    /// Whether a recommendation request is in flight
    pub loading: bool,
}
