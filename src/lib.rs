//! SmartShort - A local-first URL shortener with link analysis
//!
//! Short links live in a single persisted slot as one JSON collection. New
//! links can be enriched by an external analysis service that infers a
//! title, summary, tags, a suggested alias and a safety score.
//!
//! # Architecture
//! - `storage`: the link store and the slot it persists into
//! - `services`: link creation, redirection and analysis
//! - `api`: HTTP redirect endpoint
//! - `interfaces`: command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application startup and execution modes
//! - `system`: logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
