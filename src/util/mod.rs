//! Cross-cutting helpers: constants, the error type and timestamp parsing.

pub mod constants;
pub mod error;
pub mod time;
