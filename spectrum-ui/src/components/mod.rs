//! Shared UI components

pub mod app_layout;
pub mod bubble_chart;
pub mod button;
pub mod decade_toggles;
pub mod footer;
pub mod genre_ring;
pub mod helpers;
pub mod hero;
pub mod home;
pub mod navbar;
pub mod spectrum;
pub mod track_panel;

pub use app_layout::AppLayoutView;
pub use bubble_chart::{BubbleChart, MoodLabels};
pub use button::{Button, ButtonVariant, ChromelessButton};
pub use decade_toggles::DecadeToggles;
pub use footer::Footer;
pub use genre_ring::GenreRing;
pub use helpers::{LoadingSpinner, RenderBoundary};
pub use hero::Hero;
pub use home::HomeView;
pub use navbar::{Logo, LogoText, NavItem, NavbarView, ThemeToggle};
pub use spectrum::SpectrumView;
pub use track_panel::TrackPanel;
