use crate::asset_store::interface::AssetStore;
use crate::error::{AssetStoreError, ClassifyError};
use crate::gallery::ImageId;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    /// Always within [0, 1].
    pub confidence: f32,
}

/// Resolves an image, runs the classifier on it and keeps the single best
/// candidate.
#[derive(Clone)]
pub struct ClassificationBridge {
    asset_store: Arc<dyn AssetStore + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassificationBridge {
    pub fn new(
        asset_store: Arc<dyn AssetStore + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            asset_store,
            image_classifier,
            logger: logger.with_namespace("classification_bridge"),
        }
    }

    pub fn classify(&self, image_id: &ImageId) -> Result<ClassificationResult, ClassifyError> {
        let bytes = self.asset_store.lookup(image_id).map_err(|e| {
            if let AssetStoreError::Io { .. } = e {
                let _ = self.logger.error(&e.to_string());
            }
            ClassifyError::AssetNotFound(image_id.clone())
        })?;

        let candidates = self
            .image_classifier
            .predict(&bytes)
            .map_err(|e| ClassifyError::ModelUnavailable(e.to_string()))?;

        let best = select_top(&candidates).ok_or(ClassifyError::NoPrediction)?;

        let _ = self.logger.info(&format!(
            "{} -> {} ({:.3}) out of {} candidates",
            image_id,
            best.label,
            best.confidence,
            candidates.len()
        ));

        Ok(ClassificationResult {
            label: best.label.clone(),
            confidence: best.confidence.clamp(0.0, 1.0),
        })
    }
}

/// First candidate with the strictly highest confidence. NaN confidences
/// never win.
pub fn select_top(candidates: &[Classification]) -> Option<&Classification> {
    candidates
        .iter()
        .filter(|c| !c.confidence.is_nan())
        .fold(None, |best: Option<&Classification>, c| match best {
            Some(b) if c.confidence <= b.confidence => Some(b),
            _ => Some(c),
        })
}
