use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// One label per line, line number is the class index.
    pub labels_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub mean: [f32; 3],
    pub std: [f32; 3],
    pub top_k: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("models/imagenet_labels.txt"),
            input_shape: (224, 224),
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            top_k: 5,
        }
    }
}
