//! Host boundaries: image files, credentials, print export and logging.

pub mod html_printer;
pub mod image_loader;
pub mod logging;
pub mod secret_storage;

pub use html_printer::HtmlExportPrinter;
pub use image_loader::load_image;
pub use logging::init_logging;
pub use secret_storage::{
    SecretStorage, SecretStorageError, resolve_gemini_config, resolve_gemini_config_with,
};
