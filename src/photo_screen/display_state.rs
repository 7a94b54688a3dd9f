use crate::gallery::ImageId;
use crate::photo_screen::core::{Model, State};

/// Everything the screen shows. Renderers read this and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub image: ImageId,
    pub message: String,
    pub confidence: f32,
    pub busy: bool,
}

impl DisplayState {
    pub fn from_model(model: &Model) -> Self {
        let image = model.state.image_id().clone();

        match &model.state {
            State::Idle { .. } => Self {
                image,
                message: String::new(),
                confidence: 0.0,
                busy: false,
            },
            State::Classifying { .. } => Self {
                image,
                message: "Analyzing...".to_string(),
                confidence: 0.0,
                busy: true,
            },
            State::Shown { result, .. } => Self {
                image,
                message: format!("Image is: {}", result.label),
                confidence: result.confidence,
                busy: false,
            },
            State::Failed { error, .. } => Self {
                image,
                message: error.user_message(),
                confidence: 0.0,
                busy: false,
            },
        }
    }

    pub fn confidence_text(&self) -> String {
        format!("Confidence: {:.2}", self.confidence)
    }
}
