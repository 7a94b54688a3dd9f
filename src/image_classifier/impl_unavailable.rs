use crate::image_classifier::interface::{Classification, ImageClassifier};

/// Stands in for a model that failed to load. Every prediction reports the
/// load failure instead of taking the process down.
pub struct ImageClassifierUnavailable {
    reason: String,
}

impl ImageClassifierUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ImageClassifier for ImageClassifierUnavailable {
    fn predict(
        &self,
        _image: &[u8],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        Err(self.reason.clone().into())
    }
}
