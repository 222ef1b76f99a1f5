//! Store types for UI state management
//!
//! Pages own these stores and hand views a `ReadStore` so each view only
//! subscribes to the fields it reads.

pub mod home;
pub mod spectrum;

pub use home::*;
pub use spectrum::*;
