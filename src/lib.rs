//! Feed ingestion into an in-memory, time-ordered article store, served over a
//! paginated HTTP API.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod sources;
pub mod storage;
