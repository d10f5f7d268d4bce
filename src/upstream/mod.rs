//! Outbound calls to the generative-text service.
//!
//! - [`gemini`]: `generateContent` client and reply classification

pub mod gemini;
