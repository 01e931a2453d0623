//! Content generator trait.

use async_trait::async_trait;

use super::request::{GenerationRequest, GenerationResult};
use crate::error::Result;

/// Turns rough notes into report prose.
///
/// Implementations issue at most one outbound call per invocation and either
/// return a complete [`GenerationResult`] or fail with
/// [`OprError::GenerationFailed`](crate::OprError::GenerationFailed). They do
/// not check that the request is complete; see
/// [`GenerationRequest::ensure_ready`].
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OprError;
    use std::sync::Arc;

    struct Echo;

    #[async_trait]
    impl ContentGenerator for Echo {
        async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
            if request.notes == "fail" {
                return Err(OprError::GenerationFailed);
            }
            Ok(GenerationResult::new(
                request.notes.clone(),
                vec![request.program_name.clone()],
            ))
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let generator: Arc<dyn ContentGenerator> = Arc::new(Echo);

        let ok = generator
            .generate(&GenerationRequest::new("Program", "Nota"))
            .await
            .unwrap();
        assert_eq!(ok.summary, "Nota");
        assert_eq!(ok.objectives, vec!["Program".to_string()]);

        let err = generator
            .generate(&GenerationRequest::new("Program", "fail"))
            .await
            .unwrap_err();
        assert!(err.is_generation_failed());
    }
}
