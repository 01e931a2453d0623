//! AI interaction layer: prompt construction, the Gemini REST client and the
//! report drafter that ties them together.

pub mod completion;
pub mod gemini_api_client;
pub mod prompt;
pub mod report_drafter;

pub use completion::{CompletionError, JsonCompletion};
pub use gemini_api_client::GeminiApiClient;
pub use prompt::ReportPrompt;
pub use report_drafter::{GeminiReportDrafter, ReportDrafter, parse_generation_response};
