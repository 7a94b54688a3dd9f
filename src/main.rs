use asset_store::impl_fs::AssetStoreFs;
use asset_store::interface::AssetStore;
use classification_bridge::ClassificationBridge;
use config::Config;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use gallery::{Direction, Gallery};
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::impl_unavailable::ImageClassifierUnavailable;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use photo_screen::core::Event;
use photo_screen::main::PhotoScreen;
use std::io::BufRead;
use std::sync::{Arc, Mutex};

mod asset_store;
mod classification_bridge;
mod config;
mod device_display;
mod error;
mod gallery;
mod image_classifier;
mod library;
mod photo_screen;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();
    let console = std::env::args().any(|arg| arg == "--console");
    let fake_model = std::env::args().any(|arg| arg == "--fake-model");

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let gallery = Gallery::new(config.gallery.clone())?;

    let asset_store: Arc<dyn AssetStore + Send + Sync> = Arc::new(AssetStoreFs::new(
        &config.asset_dir,
        config.asset_extensions.clone(),
        logger.clone(),
    ));

    let image_classifier = load_image_classifier(&config, fake_model, &logger);

    let bridge = ClassificationBridge::new(asset_store.clone(), image_classifier, logger.clone());

    if console {
        run_console(&config, gallery, logger, bridge)
    } else {
        run_gui(&config, gallery, logger, bridge, asset_store)
    }
}

/// A model that fails to load still yields a classifier, one that reports
/// the failure on every analyze.
fn load_image_classifier(
    config: &Config,
    fake_model: bool,
    logger: &Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ImageClassifier + Send + Sync> {
    if fake_model {
        return Arc::new(ImageClassifierFake::new(logger.clone()));
    }

    match ImageClassifierTractOnnx::new(config.model.clone(), logger.clone()) {
        Ok(image_classifier) => Arc::new(image_classifier),
        Err(e) => {
            let _ = logger.error(&format!("Model failed to load: {}", e));
            Arc::new(ImageClassifierUnavailable::new(e.to_string()))
        }
    }
}

fn spawn_screen(screen: &PhotoScreen, logger: &Arc<dyn Logger + Send + Sync>) {
    let screen = screen.clone();
    let logger = logger.clone();
    std::thread::spawn(move || {
        if let Err(e) = screen.run() {
            let _ = logger.error(&format!("Screen stopped: {}", e));
        }
    });
}

fn run_console(
    config: &Config,
    gallery: Gallery,
    logger: Arc<dyn Logger + Send + Sync>,
    bridge: ClassificationBridge,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));
    let screen = PhotoScreen::new(config, gallery, logger.clone(), bridge, device_display);
    let sender = screen.sender();

    spawn_screen(&screen, &logger);

    println!("a = analyze, n = next, p = previous, q = quit");

    for line in std::io::stdin().lock().lines() {
        let event = match line?.trim() {
            "a" => Event::Analyze,
            "n" => Event::Navigate(Direction::Forward),
            "p" => Event::Navigate(Direction::Backward),
            "q" => break,
            "" => continue,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        };
        sender.send(event)?;
    }

    Ok(())
}

fn run_gui(
    config: &Config,
    gallery: Gallery,
    logger: Arc<dyn Logger + Send + Sync>,
    bridge: ClassificationBridge,
    asset_store: Arc<dyn AssetStore + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let device_display = Arc::new(Mutex::new(DeviceDisplayGui::new()));
    let screen = PhotoScreen::new(
        config,
        gallery,
        logger.clone(),
        bridge,
        device_display.clone(),
    );

    let window = device_display
        .lock()
        .map_err(|e| e.to_string())?
        .window(screen.sender(), asset_store, config.tick_rate);

    spawn_screen(&screen, &logger);

    window.run()
}
