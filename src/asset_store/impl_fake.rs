use crate::asset_store::interface::AssetStore;
use crate::error::AssetStoreError;
use crate::gallery::ImageId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AssetStoreFake {
    assets: HashMap<ImageId, Vec<u8>>,
}

impl AssetStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, id: &str, bytes: Vec<u8>) -> Self {
        self.assets.insert(ImageId::from(id), bytes);
        self
    }
}

impl AssetStore for AssetStoreFake {
    fn lookup(&self, id: &ImageId) -> Result<Vec<u8>, AssetStoreError> {
        self.assets
            .get(id)
            .cloned()
            .ok_or_else(|| AssetStoreError::NotFound(id.clone()))
    }
}
