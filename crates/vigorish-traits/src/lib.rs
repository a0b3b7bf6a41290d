#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/vigorish-dev/vigorish/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the Vigorish signal engine.
//!
//! This crate provides the foundational abstractions for building betting
//! confidence models: the signal interface, the per-game request context,
//! and the shared error types.

/// The version of the vigorish-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod context;
pub mod error;
pub mod signal;

// Re-exports
pub use context::{GameContext, InjuryReport, InjuryStatus, Sport};
pub use error::{EngineError, Result};
pub use signal::{NEUTRAL_SCORE, Signal, SignalOutput};
