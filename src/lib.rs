//! exam-corrector: server-side proxy for Gemini exam-answer corrections.
//!
//! Accepts a student's answer over HTTP, wraps it in a fixed corrector
//! prompt, calls Gemini's `generateContent` and returns the correction.
//! The Gemini API key stays on the server.

pub mod config;
pub mod correction;
pub mod server;
pub mod upstream;
