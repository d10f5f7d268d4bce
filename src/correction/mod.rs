//! Exam answer correction domain.
//!
//! - [`prompt`]: The fixed corrector preamble and prompt assembly
//! - [`types`]: Inbound request and outbound result bodies

pub mod prompt;
pub mod types;
