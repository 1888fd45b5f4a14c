//! Completion-service boundary for gabble.
//!
//! [`Completion`] is the provider trait: one assembled prompt in, one
//! reply string out. [`Gemini`] implements it over the Google
//! `generateContent` REST API, and [`StubCompletion`] is a scripted
//! double for tests.

pub use gemini::Gemini;
pub use provider::Completion;
pub use reqwest::{self, Client};
pub use stub::StubCompletion;

mod gemini;
mod provider;
mod stub;
