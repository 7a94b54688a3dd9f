use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

enum Behavior {
    Scripted(Vec<Classification>),
    Failing(String),
    Random,
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
    delay: Duration,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    /// Returns a random label with a random confidence on every call.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_behavior(logger, Behavior::Random)
    }

    #[allow(dead_code)]
    pub fn with_predictions(
        logger: Arc<dyn Logger + Send + Sync>,
        predictions: Vec<Classification>,
    ) -> Self {
        Self::with_behavior(logger, Behavior::Scripted(predictions))
    }

    #[allow(dead_code)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, reason: &str) -> Self {
        Self::with_behavior(logger, Behavior::Failing(reason.to_string()))
    }

    fn with_behavior(logger: Arc<dyn Logger + Send + Sync>, behavior: Behavior) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            behavior,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn random_classification() -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        let objects = vec![
            "car", "banana", "cat", "airliner", "dog", "bicycle", "laptop", "cup", "bird",
            "tree", "chair", "book",
        ];

        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, objects.len())?;

        let confidence_dist = Uniform::new(0.0, 1.0)?;

        Ok(Classification {
            label: objects[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        })
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(
        &self,
        image: &[u8],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.logger
            .info(&format!("Classifying {} bytes...", image.len()))?;

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match &self.behavior {
            Behavior::Scripted(predictions) => Ok(predictions.clone()),
            Behavior::Failing(reason) => Err(reason.clone().into()),
            Behavior::Random => Ok(vec![Self::random_classification()?]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()))
    }

    #[test]
    fn test_scripted_predictions_are_returned_as_is() {
        let predictions = vec![Classification::new("cat", 0.9), Classification::new("dog", 0.1)];
        let classifier = ImageClassifierFake::with_predictions(logger(), predictions.clone());

        assert_eq!(classifier.predict(&[0]).unwrap(), predictions);
        assert_eq!(classifier.calls(), 1);
    }

    #[test]
    fn test_random_confidence_is_a_fraction() {
        let classifier = ImageClassifierFake::new(logger());
        for _ in 0..20 {
            let predictions = classifier.predict(&[0]).unwrap();
            assert_eq!(predictions.len(), 1);
            assert!((0.0..1.0).contains(&predictions[0].confidence));
        }
    }

    #[test]
    fn test_failing_returns_error() {
        let classifier = ImageClassifierFake::failing(logger(), "inference failed");
        assert!(classifier.predict(&[0]).is_err());
    }
}
