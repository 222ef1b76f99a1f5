mod home;
mod layout;
mod spectrum;

pub use home::Home;
pub use layout::AppLayout;
pub use spectrum::Spectrum;
