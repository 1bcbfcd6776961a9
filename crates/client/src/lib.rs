//! Headless host for the roguelite rules.
//!
//! The binary is a composition root: it reads [`config::ClientConfig`] from the
//! environment, installs logging, loads game tuning through
//! `roguelite-content`, and lets the [`autopilot::Autopilot`] play runs through
//! the core's [`roguelite_core::GameController`] seam.

pub mod autopilot;
pub mod config;
pub mod logging;

pub use autopilot::{Autopilot, RunSummary, play_run};
pub use config::ClientConfig;
