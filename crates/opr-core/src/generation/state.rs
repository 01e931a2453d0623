//! Assist flow state machine.
//!
//! `Idle -> Requesting -> {Succeeded, Failed}`, and a new request may start
//! from any state except `Requesting`. There is no cancellation edge.

use serde::{Deserialize, Serialize};

use crate::error::{OprError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum AssistState {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    Failed { message: String },
}

impl AssistState {
    pub fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    /// Moves into `Requesting`. Rejected while a request is outstanding.
    pub fn begin(&self) -> Result<AssistState> {
        if self.is_requesting() {
            return Err(OprError::AssistBusy);
        }
        Ok(AssistState::Requesting)
    }

    /// Records the outcome of the outstanding request.
    pub fn finish<T>(outcome: &Result<T>) -> AssistState {
        match outcome {
            Ok(_) => AssistState::Succeeded,
            Err(err) => AssistState::Failed {
                message: err.user_message(),
            },
        }
    }
}
