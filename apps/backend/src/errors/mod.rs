//! Error handling for the trivia backend.

pub mod domain;

pub use domain::DomainError;
