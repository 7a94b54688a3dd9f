use crate::asset_store::interface::AssetStore;
use crate::error::AssetStoreError;
use crate::gallery::ImageId;
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads `<dir>/<id>.<ext>`, trying each extension in order.
pub struct AssetStoreFs {
    dir: PathBuf,
    extensions: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AssetStoreFs {
    pub fn new(
        dir: impl AsRef<Path>,
        extensions: Vec<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extensions,
            logger: logger.with_namespace("asset_store").with_namespace("fs"),
        }
    }

    fn candidates(&self, id: &ImageId) -> impl Iterator<Item = PathBuf> + '_ {
        let name = id.as_str().to_string();
        self.extensions
            .iter()
            .map(move |ext| self.dir.join(format!("{}.{}", name, ext)))
    }
}

impl AssetStore for AssetStoreFs {
    fn lookup(&self, id: &ImageId) -> Result<Vec<u8>, AssetStoreError> {
        // Identifiers are bare names; anything path-like would escape the directory
        if id.as_str().is_empty() || id.as_str().contains(['/', '\\']) || id.as_str() == ".." {
            return Err(AssetStoreError::NotFound(id.clone()));
        }

        for path in self.candidates(id) {
            match std::fs::read(&path) {
                Ok(bytes) => {
                    let _ = self
                        .logger
                        .info(&format!("Loaded {} ({} bytes)", path.display(), bytes.len()));
                    return Ok(bytes);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(AssetStoreError::Io {
                        id: id.clone(),
                        source,
                    })
                }
            }
        }

        Err(AssetStoreError::NotFound(id.clone()))
    }
}
