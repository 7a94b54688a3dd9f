use crate::asset_store::impl_fake::AssetStoreFake;
use crate::classification_bridge::ClassificationBridge;
use crate::config::Config;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::gallery::Gallery;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::photo_screen::main::PhotoScreen;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct Fixture {
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_display: DeviceDisplayFake,
    pub photo_screen: PhotoScreen,
}

impl Fixture {
    /// Every gallery image except "plane" has an asset.
    pub fn new(image_classifier: Arc<dyn ImageClassifier + Send + Sync>) -> Self {
        Self::with_timeout(image_classifier, Duration::from_secs(5))
    }

    pub fn with_timeout(
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        classify_timeout: Duration,
    ) -> Self {
        let config = Config {
            classify_timeout,
            ..Config::default()
        };
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let asset_store = AssetStoreFake::new()
            .with_asset("car", vec![1])
            .with_asset("banana", vec![2])
            .with_asset("cat", vec![3]);
        let bridge =
            ClassificationBridge::new(Arc::new(asset_store), image_classifier, logger.clone());
        let device_display = DeviceDisplayFake::new();
        let photo_screen = PhotoScreen::new(
            &config,
            Gallery::new(config.gallery.clone()).unwrap(),
            logger.clone(),
            bridge,
            Arc::new(Mutex::new(device_display.clone())),
        );

        Self {
            logger,
            device_display,
            photo_screen,
        }
    }
}
