use crate::gallery::ImageId;
use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub gallery: Vec<ImageId>,
    pub asset_dir: PathBuf,
    pub asset_extensions: Vec<String>,
    pub model: ModelConfig,
    pub classify_timeout: Duration,
    pub tick_rate: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gallery: ["car", "banana", "cat", "plane"]
                .into_iter()
                .map(ImageId::from)
                .collect(),
            asset_dir: PathBuf::from("assets"),
            asset_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            model: ModelConfig::default(),
            classify_timeout: Duration::from_secs(10),
            tick_rate: Duration::from_millis(100),
            logger_timezone: local_offset(),
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
