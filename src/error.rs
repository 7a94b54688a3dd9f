use crate::gallery::ImageId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("no asset for image '{0}'")]
    AssetNotFound(ImageId),
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("classifier returned no prediction")]
    NoPrediction,
}

impl ClassifyError {
    /// Text shown in place of the classification label.
    pub fn user_message(&self) -> String {
        match self {
            ClassifyError::AssetNotFound(_) => "Image not found".to_string(),
            ClassifyError::ModelUnavailable(reason) => format!("Model unavailable: {}", reason),
            ClassifyError::NoPrediction => "No result".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetStoreError {
    #[error("asset '{0}' not found")]
    NotFound(ImageId),
    #[error("failed to read asset '{id}': {source}")]
    Io {
        id: ImageId,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("gallery must contain at least one image")]
    Empty,
}
