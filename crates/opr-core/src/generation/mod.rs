//! AI assist domain: requests, results, the generator seam and flow state.

pub mod generator;
pub mod request;
pub mod state;

pub use generator::ContentGenerator;
pub use request::{GenerationRequest, GenerationResult, Tone};
pub use state::AssistState;
