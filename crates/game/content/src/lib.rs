//! Data-driven tuning for the roguelite rules.
//!
//! Hosts that want different balance numbers ship a TOML file and load it
//! here into a [`roguelite_core::GameConfig`]. Keys left out of the file keep
//! their built-in defaults.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
