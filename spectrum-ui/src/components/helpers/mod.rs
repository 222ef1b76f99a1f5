mod loading_spinner;
mod render_boundary;

pub use loading_spinner::LoadingSpinner;
pub use render_boundary::RenderBoundary;
