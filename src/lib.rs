//! Catalog API - a minimal item-catalog HTTP service
//!
//! This crate exposes a small set of JSON routes over typed path and query
//! parameters: an in-memory item listing, item create/update echoes, a
//! closed set of model names, and a path-echo route. Request decoding and
//! shape validation happen at the presentation boundary; handlers are
//! total functions over already-validated input.

pub mod config;
pub mod domain;
pub mod logging;
pub mod presentation;

pub use config::Config;
pub use logging::init_tracing;
pub use presentation::create_router;
