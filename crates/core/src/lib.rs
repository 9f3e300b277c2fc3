#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Shared models and logic for the ARES site: the keyword analysis engine,
//! waitlist validation, and the JSON shapes exchanged with the server.

pub mod api;
pub mod engine;
pub mod model;
pub mod prompts;
pub mod validation;

mod util;

pub use engine::AresEngine;
pub use util::now_timestamp;
