//! spectrum-ui - view components and stores for the spectrum app
//!
//! Components here only render what they are given and report user
//! intent through callbacks. Fetching, persistence and routing live in
//! `spectrum-web`.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod utils;

pub use components::*;
pub use display_types::*;
