//! Fixed four-slot image sequence for the report's photo grid.
//!
//! Slots are addressed by position. Clearing a slot leaves an explicit empty
//! marker in place so that "Gambar N" labels never move between slots.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{OprError, Result};

/// Number of image slots on a report.
pub const IMAGE_SLOT_COUNT: usize = 4;

/// An encoded image, stored as a `data:` URI.
///
/// The payload is shared, so cloning a report never copies image bytes and
/// untouched slots stay pointer-equal across edits. No validation is done on
/// the content.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload(Arc<str>);

impl ImagePayload {
    /// Wraps an already-encoded data URI (or any image source string).
    pub fn from_data_uri(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Encodes raw bytes as `data:<mime>;base64,<data>`.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let data = BASE64_STANDARD.encode(bytes);
        Self(format!("data:{mime_type};base64,{data}").into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when both payloads share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// Data URIs can be megabytes long; keep Debug output readable.
impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head: String = self.0.chars().take(32).collect();
        write!(f, "ImagePayload({head}.. {} bytes)", self.0.len())
    }
}

/// One position in the photo grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSlot {
    /// Explicit empty marker; rendered as a placeholder.
    #[default]
    Empty,
    Filled(ImagePayload),
}

impl ImageSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn payload(&self) -> Option<&ImagePayload> {
        match self {
            Self::Empty => None,
            Self::Filled(payload) => Some(payload),
        }
    }
}

/// The report's image sequence: always exactly [`IMAGE_SLOT_COUNT`] slots.
///
/// On the wire this is an array of four strings, `""` marking an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ImageSlots([ImageSlot; IMAGE_SLOT_COUNT]);

impl ImageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `payload` stored at `index`; every other slot is
    /// carried over unchanged.
    pub fn set_slot(&self, index: usize, payload: ImagePayload) -> Result<Self> {
        Self::check_index(index)?;
        let mut next = self.clone();
        next.0[index] = ImageSlot::Filled(payload);
        Ok(next)
    }

    /// Returns a copy with slot `index` set to the empty marker. Later slots
    /// are not shifted down.
    pub fn clear_slot(&self, index: usize) -> Result<Self> {
        Self::check_index(index)?;
        let mut next = self.clone();
        next.0[index] = ImageSlot::Empty;
        Ok(next)
    }

    pub fn get(&self, index: usize) -> Option<&ImageSlot> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageSlot> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        IMAGE_SLOT_COUNT
    }

    /// Always false: the sequence has a fixed number of slots.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of slots holding an image.
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|slot| !slot.is_empty()).count()
    }

    fn check_index(index: usize) -> Result<()> {
        if index >= IMAGE_SLOT_COUNT {
            return Err(OprError::invalid_index("image slots", index, IMAGE_SLOT_COUNT));
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for ImageSlots {
    type Error = String;

    fn try_from(values: Vec<String>) -> std::result::Result<Self, Self::Error> {
        if values.len() > IMAGE_SLOT_COUNT {
            return Err(format!(
                "expected at most {IMAGE_SLOT_COUNT} image slots, got {}",
                values.len()
            ));
        }

        let mut slots = Self::default();
        for (index, value) in values.into_iter().enumerate() {
            if !value.is_empty() {
                slots.0[index] = ImageSlot::Filled(ImagePayload::from_data_uri(value));
            }
        }
        Ok(slots)
    }
}

impl From<ImageSlots> for Vec<String> {
    fn from(slots: ImageSlots) -> Self {
        slots
            .0
            .iter()
            .map(|slot| match slot {
                ImageSlot::Empty => String::new(),
                ImageSlot::Filled(payload) => payload.as_str().to_string(),
            })
            .collect()
    }
}
