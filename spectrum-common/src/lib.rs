//! spectrum-common - pure logic shared by the spectrum UI and web app
//!
//! Nothing in here touches the DOM or the network. The views in
//! `spectrum-ui` render what these types compute, and `spectrum-web`
//! drives them from browser events and HTTP responses.

pub mod catalogue;
pub mod chart;
pub mod dataset;
pub mod decade;
pub mod fetch;
pub mod filter;
pub mod layout;
pub mod pan;
pub mod session;
pub mod theme;
pub mod track;

pub use catalogue::{genre_catalogue, Category, DEFAULT_GENRE_COLOR};
pub use chart::ChartGeometry;
pub use dataset::{
    build_datasets, select_dataset, Dataset, PlotPoint, SelectedTrack, POINT_BORDER_WIDTH,
    POINT_HOVER_RADIUS, POINT_RADIUS,
};
pub use decade::{decade_label, Decade, DecadeStepper, DECADES};
pub use fetch::{FetchCoordinator, FetchDecision, FetchTicket, QueryError, TrackQuery};
pub use filter::FilterSet;
pub use layout::{place_buttons, place_buttons_randomly, CategoryButton, LayoutConfig, Position};
pub use pan::{DragState, ScrollOffset};
pub use session::SpectrumSession;
pub use theme::{ParseThemeError, Theme, ThemePersistence, ThemeState};
pub use track::{map_record, PlotRecord, RawTrack};
