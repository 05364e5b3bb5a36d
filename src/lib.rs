//! modcheck - Go module update checker library
//!
//! Reads the direct requirements of a go.mod, asks the Go module proxy for
//! the published versions of each module and reports the newer ones,
//! classified as major, minor or patch upgrades.

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
pub mod version;
