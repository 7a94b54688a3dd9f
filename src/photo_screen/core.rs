use crate::classification_bridge::ClassificationResult;
use crate::error::ClassifyError;
use crate::gallery::{Direction, Gallery, ImageId};

#[derive(Clone, Debug, PartialEq)]
pub enum State {
    Idle {
        image_id: ImageId,
    },
    Classifying {
        image_id: ImageId,
        request_id: u64,
    },
    Shown {
        image_id: ImageId,
        result: ClassificationResult,
    },
    Failed {
        image_id: ImageId,
        error: ClassifyError,
    },
}

impl State {
    pub fn image_id(&self) -> &ImageId {
        match self {
            State::Idle { image_id }
            | State::Classifying { image_id, .. }
            | State::Shown { image_id, .. }
            | State::Failed { image_id, .. } => image_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub gallery: Gallery,
    pub state: State,
    /// Id handed to the most recent classification request. Completions
    /// carrying any other id are stale.
    pub last_request_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Analyze,
    Navigate(Direction),
    ClassifyDone {
        request_id: u64,
        result: Result<ClassificationResult, ClassifyError>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Classify { request_id: u64, image_id: ImageId },
}

pub fn init(gallery: Gallery) -> Model {
    let image_id = gallery.current().clone();
    Model {
        gallery,
        state: State::Idle { image_id },
        last_request_id: 0,
    }
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.state.clone(), event) {
        // One request at a time
        (State::Classifying { .. }, Event::Analyze) => (model, vec![]),

        (state, Event::Analyze) => {
            let request_id = model.last_request_id + 1;
            let image_id = state.image_id().clone();
            (
                Model {
                    state: State::Classifying {
                        image_id: image_id.clone(),
                        request_id,
                    },
                    last_request_id: request_id,
                    ..model
                },
                vec![Effect::Classify {
                    request_id,
                    image_id,
                }],
            )
        }

        (_, Event::Navigate(direction)) => {
            let mut gallery = model.gallery;
            gallery.step(direction);
            let image_id = gallery.current().clone();
            (
                Model {
                    gallery,
                    state: State::Idle { image_id },
                    last_request_id: model.last_request_id,
                },
                vec![],
            )
        }

        (
            State::Classifying {
                image_id,
                request_id: pending,
            },
            Event::ClassifyDone { request_id, result },
        ) if request_id == pending => {
            let state = match result {
                Ok(result) => State::Shown { image_id, result },
                Err(error) => State::Failed { image_id, error },
            };
            (Model { state, ..model }, vec![])
        }

        // Completion for a request that navigation already invalidated
        (_, Event::ClassifyDone { .. }) => (model, vec![]),
    }
}
