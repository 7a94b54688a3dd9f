use crate::device_display::interface::DeviceDisplay;
use crate::photo_screen::display_state::DisplayState;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every frame it is asked to show.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    frames: Arc<Mutex<Vec<DisplayState>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<DisplayState> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<DisplayState> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show(&mut self, view: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .map_err(|e| e.to_string())?
            .push(view.clone());
        Ok(())
    }
}
