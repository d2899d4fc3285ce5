//! Core library for the fiber-reports command line application.
//!
//! The library exposes the pieces the two subcommands are assembled from.
//! Remote access lives under [`rpc`], plain records in [`model`], the
//! lifecycle decision table in [`classify`], spreadsheet output under
//! [`io`], and the orchestration of each run in [`report`] and
//! [`inventory`].

pub mod classify;
pub mod config;
pub mod error;
pub mod inventory;
pub mod io;
pub mod logging;
pub mod model;
pub mod report;
pub mod rpc;
pub mod time_format;

pub use error::{ReportError, Result};
