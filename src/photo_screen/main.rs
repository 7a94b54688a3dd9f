use crate::classification_bridge::ClassificationBridge;
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::gallery::Gallery;
use crate::library::logger::interface::Logger;
use crate::photo_screen::core::{init, transition, Effect, Event, Model};
use crate::photo_screen::display_state::DisplayState;
use crate::photo_screen::render::Render;
use crate::photo_screen::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Owns the screen model. Events from the UI and from finished effects all
/// arrive on one channel and are applied one at a time.
#[derive(Clone)]
pub struct PhotoScreen {
    model: Arc<Mutex<Model>>,
    event_sender: Sender<Event>,
    event_receiver: Arc<Mutex<Receiver<Event>>>,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
    render: Render,
}

impl PhotoScreen {
    pub fn new(
        config: &Config,
        gallery: Gallery,
        logger: Arc<dyn Logger + Send + Sync>,
        bridge: ClassificationBridge,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let logger = logger.with_namespace("photo_screen");
        let (event_sender, event_receiver) = channel();
        let model = init(gallery);

        Self {
            model: Arc::new(Mutex::new(model)),
            run_effect: RunEffect::new(
                config.classify_timeout,
                logger.clone(),
                bridge,
                event_sender.clone(),
            ),
            render: Render::new(device_display),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            logger,
        }
    }

    pub fn sender(&self) -> Sender<Event> {
        self.event_sender.clone()
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState::from_model(&self.lock_model())
    }

    #[allow(dead_code)]
    pub fn model(&self) -> Model {
        self.lock_model().clone()
    }

    /// Draws the initial frame.
    pub fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.render.render(&self.display_state())?;
        Ok(())
    }

    /// Applies one event: transition, render, then hand effects to workers.
    pub fn dispatch(&self, event: Event) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info(&format!("Event: {:?}", event));

        let (view, effects) = {
            let mut model = self.lock_model();
            let (new_model, effects) = transition(model.clone(), event);
            *model = new_model;
            (DisplayState::from_model(&model), effects)
        };

        let _ = self
            .logger
            .info(&format!("State: {:?}, effects: {:?}", view, effects));

        self.render.render(&view)?;
        self.spawn_effects(effects);
        Ok(())
    }

    /// Waits up to `timeout` for the next event and applies it. Returns
    /// `false` if nothing arrived.
    pub fn pump(&self, timeout: Duration) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let received = self
            .event_receiver
            .lock()
            .map_err(|e| e.to_string())?
            .recv_timeout(timeout);

        match received {
            Ok(event) => {
                self.dispatch(event)?;
                Ok(true)
            }
            Err(RecvTimeoutError::Timeout) => Ok(false),
            Err(RecvTimeoutError::Disconnected) => Err("event channel closed".into()),
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.start()?;

        loop {
            let event = self
                .event_receiver
                .lock()
                .map_err(|e| e.to_string())?
                .recv()?;

            if let Err(e) = self.dispatch(event) {
                let _ = self.logger.error(&format!("Render failed: {}", e));
            }
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    fn lock_model(&self) -> MutexGuard<'_, Model> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
