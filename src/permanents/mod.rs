//! Permanents and the registry that holds them.

pub mod registry;

pub use registry::{Permanent, PermanentRegistry};
