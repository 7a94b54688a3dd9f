use crate::classification_bridge::{ClassificationBridge, ClassificationResult};
use crate::error::ClassifyError;
use crate::gallery::ImageId;
use crate::library::logger::interface::Logger;
use crate::photo_screen::core::{Effect, Event};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct RunEffect {
    classify_timeout: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
    bridge: ClassificationBridge,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        classify_timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
        bridge: ClassificationBridge,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            classify_timeout,
            logger: logger.with_namespace("run_effect"),
            bridge,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::Classify {
                request_id,
                image_id,
            } => {
                let result = self.classify_with_timeout(&image_id);
                if let Err(error) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Request {} for {} failed: {}", request_id, image_id, error));
                }
                let _ = self
                    .event_sender
                    .send(Event::ClassifyDone { request_id, result });
            }
        }
    }

    /// The model call may hang or panic; neither may leave the screen stuck
    /// in `Classifying`.
    fn classify_with_timeout(
        &self,
        image_id: &ImageId,
    ) -> Result<ClassificationResult, ClassifyError> {
        let (tx, rx) = mpsc::channel();
        let bridge = self.bridge.clone();
        let image_id = image_id.clone();

        std::thread::spawn(move || {
            let _ = tx.send(bridge.classify(&image_id));
        });

        match rx.recv_timeout(self.classify_timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(ClassifyError::ModelUnavailable(format!(
                "no answer within {}s",
                self.classify_timeout.as_secs_f32()
            ))),
            Err(RecvTimeoutError::Disconnected) => Err(ClassifyError::ModelUnavailable(
                "classifier stopped unexpectedly".to_string(),
            )),
        }
    }
}
