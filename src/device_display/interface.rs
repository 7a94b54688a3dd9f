use crate::photo_screen::display_state::DisplayState;
use std::error::Error;

/// A surface the screen is drawn onto.
pub trait DeviceDisplay: Send + Sync {
    /// Replace whatever is shown with `view`
    fn show(&mut self, view: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>>;
}
