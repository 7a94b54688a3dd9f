use crate::asset_store::interface::AssetStore;
use crate::device_display::interface::DeviceDisplay;
use crate::gallery::{Direction, ImageId};
use crate::photo_screen::core::Event;
use crate::photo_screen::display_state::DisplayState;
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const IMAGE_SIZE: f32 = 300.0;

/// Shares the latest frame with a `PhotoScreenWindow` and wakes it up.
pub struct DeviceDisplayGui {
    view: Arc<Mutex<Option<DisplayState>>>,
    ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(None)),
            ctx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn window(
        &self,
        event_sender: Sender<Event>,
        asset_store: Arc<dyn AssetStore + Send + Sync>,
        tick_rate: Duration,
    ) -> PhotoScreenWindow {
        PhotoScreenWindow {
            view: self.view.clone(),
            ctx: self.ctx.clone(),
            event_sender,
            asset_store,
            tick_rate,
            texture: None,
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show(&mut self, view: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.view.lock().map_err(|e| e.to_string())? = Some(view.clone());

        if let Some(ctx) = self.ctx.lock().map_err(|e| e.to_string())?.as_ref() {
            ctx.request_repaint();
        }
        Ok(())
    }
}

pub struct PhotoScreenWindow {
    view: Arc<Mutex<Option<DisplayState>>>,
    ctx: Arc<Mutex<Option<egui::Context>>>,
    event_sender: Sender<Event>,
    asset_store: Arc<dyn AssetStore + Send + Sync>,
    tick_rate: Duration,
    /// Texture for the image currently on screen; `None` inside means the
    /// asset could not be loaded.
    texture: Option<(ImageId, Option<egui::TextureHandle>)>,
}

impl PhotoScreenWindow {
    /// Blocks until the window is closed. Must be called on the main thread.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 560.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native(
            "Photo Classifier",
            options,
            Box::new(move |cc| {
                if let Ok(mut slot) = self.ctx.lock() {
                    *slot = Some(cc.egui_ctx.clone());
                }
                Box::new(self)
            }),
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    fn send(&self, event: Event) {
        let _ = self.event_sender.send(event);
    }

    fn texture_for(&mut self, ctx: &egui::Context, id: &ImageId) -> Option<egui::TextureHandle> {
        match &self.texture {
            Some((loaded, texture)) if loaded == id => texture.clone(),
            _ => {
                let texture = self.load_texture(ctx, id);
                self.texture = Some((id.clone(), texture.clone()));
                texture
            }
        }
    }

    fn load_texture(&self, ctx: &egui::Context, id: &ImageId) -> Option<egui::TextureHandle> {
        let bytes = self.asset_store.lookup(id).ok()?;
        let rgba = image::load_from_memory(&bytes).ok()?.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        Some(ctx.load_texture(id.as_str(), color_image, egui::TextureOptions::default()))
    }
}

impl eframe::App for PhotoScreenWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.view.lock().ok().and_then(|view| view.clone());

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(view) = view else {
                ui.centered_and_justified(|ui| ui.label("Loading..."));
                return;
            };

            let texture = self.texture_for(ctx, &view.image);

            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                match texture {
                    Some(texture) => {
                        let [w, h] = texture.size();
                        let scale = (IMAGE_SIZE / w as f32).min(IMAGE_SIZE / h as f32);
                        let size = egui::vec2(w as f32 * scale, h as f32 * scale);
                        ui.add(
                            egui::Image::new(egui::load::SizedTexture::new(texture.id(), size))
                                .rounding(15.0),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(IMAGE_SIZE, IMAGE_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter()
                            .rect_filled(rect, 15.0, egui::Color32::from_gray(60));
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            view.image.as_str(),
                            egui::FontId::proportional(20.0),
                            egui::Color32::WHITE,
                        );
                    }
                }

                ui.add_space(20.0);
                ui.label(egui::RichText::new(&view.message).heading());
                ui.add_space(10.0);

                ui.add(
                    egui::ProgressBar::new(view.confidence)
                        .desired_width(IMAGE_SIZE)
                        .text(view.confidence_text()),
                );
                ui.add_space(20.0);

                if ui
                    .add_enabled(!view.busy, egui::Button::new("Analyze Image"))
                    .clicked()
                {
                    self.send(Event::Analyze);
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 120.0).max(0.0) / 2.0);
                    if ui.button("  ◀  ").clicked() {
                        self.send(Event::Navigate(Direction::Backward));
                    }
                    ui.add_space(50.0);
                    if ui.button("  ▶  ").clicked() {
                        self.send(Event::Navigate(Direction::Forward));
                    }
                });
            });
        });

        if view_is_busy(&self.view) {
            ctx.request_repaint_after(self.tick_rate);
        }
    }
}

fn view_is_busy(view: &Arc<Mutex<Option<DisplayState>>>) -> bool {
    view.lock()
        .ok()
        .and_then(|view| view.as_ref().map(|v| v.busy))
        .unwrap_or(true)
}
