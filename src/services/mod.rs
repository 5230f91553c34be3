//! Service layer for business logic
//!
//! This module provides unified business logic that can be shared between
//! the CLI and the HTTP redirect endpoint.

pub mod analysis;
mod link_service;
mod redirect;

pub use analysis::{
    AnalysisError, AnalysisProvider, AnalysisReport, AnalysisResult, Analyzer, DisabledProvider,
    GeminiProvider,
};
pub use link_service::*;
pub use redirect::*;
