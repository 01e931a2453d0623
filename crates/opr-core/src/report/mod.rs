//! The report being edited: data model, image slots and transitions.

pub mod action;
pub mod images;
pub mod model;

pub use action::ReportAction;
pub use images::{IMAGE_SLOT_COUNT, ImagePayload, ImageSlot, ImageSlots};
pub use model::Report;
