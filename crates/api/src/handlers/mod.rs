//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `studybuddy_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod flashcards;
pub mod health;
pub mod todos;
pub mod users;
