#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Opaque pretrained model: encoded image bytes in, candidate labels out.
/// Candidates carry no ordering guarantee.
pub trait ImageClassifier {
    fn predict(
        &self,
        image: &[u8],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
