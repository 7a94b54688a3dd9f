use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::{decode_image, image_to_input_tensor};
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract_onnx");

        let labels = load_labels(&config.labels_path)?;

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path.display(),
            labels.len()
        ))?;

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(
        &self,
        image: &[u8],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let image = decode_image(image)?;
        let input = image_to_input_tensor(&image, &self.config);

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("model produced no output")?
            .to_array_view::<f32>()?;

        let scores: Vec<f32> = output.iter().copied().collect();
        let probabilities = to_probabilities(&scores);
        let classifications = top_k(&probabilities, &self.labels, self.config.top_k);

        self.logger
            .info(&format!("Classifications: {:?}", classifications))?;

        Ok(classifications)
    }
}

fn load_labels(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read labels {}: {}", path.display(), e))?;

    let labels: Vec<String> = contents.lines().map(|line| line.trim().to_string()).collect();

    if labels.iter().all(|label| label.is_empty()) {
        return Err(format!("labels file {} is empty", path.display()).into());
    }

    Ok(labels)
}

/// Softmax over raw logits. Scores that already form a distribution pass
/// through untouched.
fn to_probabilities(scores: &[f32]) -> Vec<f32> {
    let sum: f32 = scores.iter().sum();
    let is_distribution =
        scores.iter().all(|s| (0.0..=1.0).contains(s)) && (sum - 1.0).abs() < 1e-3;

    if is_distribution {
        return scores.to_vec();
    }

    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f32 = exps.iter().sum();

    exps.iter().map(|e| e / total).collect()
}

/// Highest `k` scores with their labels. Some exports prepend a background
/// class, which shows up as one extra score.
fn top_k(probabilities: &[f32], labels: &[String], k: usize) -> Vec<Classification> {
    let offset = if probabilities.len() == labels.len() + 1 { 1 } else { 0 };

    let mut indexed: Vec<(usize, f32)> = probabilities
        .iter()
        .copied()
        .enumerate()
        .skip(offset)
        .filter(|(_, p)| !p.is_nan())
        .collect();

    // Stable sort keeps lower indices first among equal scores
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed.truncate(k);

    indexed
        .into_iter()
        .map(|(idx, confidence)| Classification {
            label: labels
                .get(idx - offset)
                .filter(|label| !label.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("class {}", idx - offset)),
            confidence,
        })
        .collect()
}
