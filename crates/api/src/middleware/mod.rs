//! Extractors that run before handlers.

pub mod auth;
