use crate::classification_bridge::ClassificationResult;
use crate::error::ClassifyError;
use crate::gallery::{Direction, Gallery, ImageId};
use crate::photo_screen::core::{init, transition, Effect, Event, Model, State};
use crate::photo_screen::display_state::DisplayState;

fn model() -> Model {
    init(
        Gallery::new(
            ["car", "banana", "cat", "plane"]
                .into_iter()
                .map(ImageId::from)
                .collect(),
        )
        .unwrap(),
    )
}

fn result(label: &str, confidence: f32) -> ClassificationResult {
    ClassificationResult {
        label: label.to_string(),
        confidence,
    }
}

#[test]
fn test_init() {
    let model = model();

    assert_eq!(
        model.state,
        State::Idle {
            image_id: ImageId::from("car")
        }
    );
    assert_eq!(model.last_request_id, 0);
}

#[test]
fn test_analyze_starts_classification() {
    let (model, effects) = transition(model(), Event::Analyze);

    assert_eq!(
        model.state,
        State::Classifying {
            image_id: ImageId::from("car"),
            request_id: 1
        }
    );
    assert_eq!(
        effects,
        vec![Effect::Classify {
            request_id: 1,
            image_id: ImageId::from("car")
        }]
    );
}

#[test]
fn test_analyze_while_classifying_is_ignored() {
    let (model, _) = transition(model(), Event::Analyze);
    let (after, effects) = transition(model.clone(), Event::Analyze);

    assert_eq!(after, model);
    assert!(effects.is_empty());
}

#[test]
fn test_classify_done_shows_result() {
    let (model, _) = transition(model(), Event::Analyze);
    let (model, effects) = transition(
        model,
        Event::ClassifyDone {
            request_id: 1,
            result: Ok(result("sports car", 0.87)),
        },
    );

    assert_eq!(
        model.state,
        State::Shown {
            image_id: ImageId::from("car"),
            result: result("sports car", 0.87)
        }
    );
    assert!(effects.is_empty());

    let view = DisplayState::from_model(&model);
    assert_eq!(view.message, "Image is: sports car");
    assert_eq!(view.confidence, 0.87);
    assert_eq!(view.confidence_text(), "Confidence: 0.87");
}

#[test]
fn test_classify_error_fails_with_message_and_zero_confidence() {
    let (model, _) = transition(model(), Event::Analyze);
    let (model, _) = transition(
        model,
        Event::ClassifyDone {
            request_id: 1,
            result: Err(ClassifyError::NoPrediction),
        },
    );

    assert!(matches!(model.state, State::Failed { .. }));

    let view = DisplayState::from_model(&model);
    assert_eq!(view.message, "No result");
    assert_eq!(view.confidence, 0.0);
    assert!(!view.busy);
}

#[test]
fn test_analyze_again_after_result_uses_new_request_id() {
    let (model, _) = transition(model(), Event::Analyze);
    let (model, _) = transition(
        model,
        Event::ClassifyDone {
            request_id: 1,
            result: Err(ClassifyError::ModelUnavailable("boom".to_string())),
        },
    );
    let (model, effects) = transition(model, Event::Analyze);

    assert_eq!(
        effects,
        vec![Effect::Classify {
            request_id: 2,
            image_id: ImageId::from("car")
        }]
    );
    assert!(matches!(model.state, State::Classifying { request_id: 2, .. }));
}

#[test]
fn test_navigate_clears_shown_result() {
    let (model, _) = transition(model(), Event::Analyze);
    let (model, _) = transition(
        model,
        Event::ClassifyDone {
            request_id: 1,
            result: Ok(result("sports car", 0.87)),
        },
    );
    let (model, effects) = transition(model, Event::Navigate(Direction::Forward));

    assert_eq!(
        model.state,
        State::Idle {
            image_id: ImageId::from("banana")
        }
    );
    assert!(effects.is_empty());

    let view = DisplayState::from_model(&model);
    assert_eq!(view.message, "");
    assert_eq!(view.confidence, 0.0);
}

#[test]
fn test_retreat_from_first_wraps_to_last() {
    let (model, _) = transition(model(), Event::Navigate(Direction::Backward));

    assert_eq!(model.state.image_id(), &ImageId::from("plane"));
    assert_eq!(model.gallery.current_index(), 3);
}

#[test]
fn test_stale_completion_after_navigation_is_discarded() {
    let (model, _) = transition(model(), Event::Analyze);
    let (model, _) = transition(model, Event::Navigate(Direction::Forward));
    let (after, effects) = transition(
        model.clone(),
        Event::ClassifyDone {
            request_id: 1,
            result: Ok(result("sports car", 0.87)),
        },
    );

    assert_eq!(after, model);
    assert!(effects.is_empty());
    assert_eq!(
        after.state,
        State::Idle {
            image_id: ImageId::from("banana")
        }
    );
}

#[test]
fn test_stale_completion_does_not_satisfy_newer_request() {
    let (model, _) = transition(model(), Event::Analyze);
    let (model, _) = transition(model, Event::Navigate(Direction::Forward));
    let (model, _) = transition(model, Event::Analyze);

    // Request 1 was for "car"; request 2 for "banana" is still pending
    let (model, _) = transition(
        model,
        Event::ClassifyDone {
            request_id: 1,
            result: Ok(result("sports car", 0.87)),
        },
    );

    assert_eq!(
        model.state,
        State::Classifying {
            image_id: ImageId::from("banana"),
            request_id: 2
        }
    );
}
