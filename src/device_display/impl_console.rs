use crate::device_display::interface::DeviceDisplay;
use crate::photo_screen::display_state::DisplayState;
use std::error::Error;

const WIDTH: usize = 36;
const BAR_WIDTH: usize = 16;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }

    fn frame(view: &DisplayState) -> Vec<String> {
        let filled = (view.confidence.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
        let bar = format!(
            "[{}{}] {}",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            view.confidence_text()
        );

        let mut lines = vec![format!("Image: {}", view.image), view.message.clone(), bar];
        if view.busy {
            lines.push("(busy)".to_string());
        }
        lines
    }
}

fn pad(text: &str) -> String {
    let truncated: String = text.chars().take(WIDTH).collect();
    let len = truncated.chars().count();
    format!("{}{}", truncated, " ".repeat(WIDTH - len))
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show(&mut self, view: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("┌{}┐", "─".repeat(WIDTH));
        for line in Self::frame(view) {
            println!("│{}│", pad(&line));
        }
        println!("└{}┘", "─".repeat(WIDTH));
        Ok(())
    }
}
