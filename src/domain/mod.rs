//! Core domain models for modcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency entries read from go.mod
//! - Per-module reports produced by the version check
//! - Summary of a whole run

mod dependency;
mod report;
mod summary;

pub use dependency::Dependency;
pub use report::ModuleReport;
pub use summary::CheckSummary;
