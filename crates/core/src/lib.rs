//! Core utilities for the room viewer.
//!
//! This crate provides foundational types and utilities used across the viewer:
//! - Error types and result aliases
//! - Logging initialization
//! - Timer utilities
//! - Configuration management

mod config;
mod error;
mod logging;
mod timer;

pub use config::{
    CameraSettings, ControllerSettings, FixtureConfig, RigSettings, ViewerConfig,
};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use timer::Timer;
