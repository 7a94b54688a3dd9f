use crate::error::AssetStoreError;
use crate::gallery::ImageId;

/// Maps an image identifier to its encoded bytes.
pub trait AssetStore {
    fn lookup(&self, id: &ImageId) -> Result<Vec<u8>, AssetStoreError>;
}
