//! The showcase page: carousel, 3D viewport, info card

use egui::{Align2, Color32, FontId, Rounding, Sense, Spinner, Vec2};
use vitrine_assets::AssetLoader;
use vitrine_core::{Catalog, Error, Result, ShowcaseState};
use vitrine_render::{LightingParams, ViewerCallback, ViewerDrawData};

use crate::camera::ViewerCamera;
use crate::config::ShowcaseConfig;
use crate::session::{RenderSession, SessionPhase};
use crate::ui::{self, NavAction, QuantityChange};

/// The whole product showcase page.
///
/// Owns the carousel state, the active product's render session, and the
/// background asset loader. Each frame drains finished loads, advances the
/// session, lays out the page, and requests another repaint so auto-rotation
/// keeps running.
pub struct ShowcaseApp {
    catalog: Catalog,
    state: ShowcaseState,
    session: RenderSession,
    loader: AssetLoader,
    camera: ViewerCamera,
    config: ShowcaseConfig,
    lighting: LightingParams,
    target_format: wgpu::TextureFormat,
}

impl ShowcaseApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Catalog,
        config: ShowcaseConfig,
    ) -> Result<Self> {
        let render_state = cc
            .wgpu_render_state
            .as_ref()
            .ok_or_else(|| Error::Gpu("wgpu render state unavailable".to_string()))?;
        let target_format = render_state.target_format;

        let loader = AssetLoader::new()?;
        let mut app = Self {
            catalog,
            state: ShowcaseState::new(),
            session: RenderSession::new(),
            loader,
            camera: ViewerCamera::default(),
            config,
            lighting: LightingParams::default(),
            target_format,
        };
        // The first product starts loading at mount.
        app.start_session_for_active();
        Ok(app)
    }

    /// Tear down the current render session and load the active product
    /// into a fresh one.
    fn start_session_for_active(&mut self) {
        let product = self.catalog.get(self.state.active_index());
        let generation = self.session.begin_next();
        self.loader.request(generation, product.model_path.clone());
    }

    fn apply_nav(&mut self, action: NavAction) {
        let moved = match action {
            NavAction::Prev => self.state.prev(&self.catalog),
            NavAction::Next => self.state.next(&self.catalog),
            NavAction::Select(index) => self.state.select(index, &self.catalog),
        };
        if moved {
            self.start_session_for_active();
        }
    }

    fn viewer_panel(&mut self, ui: &mut egui::Ui) {
        // Square viewport, as large as the panel allows.
        let side = ui.available_width().min(ui.available_height());
        let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::drag());

        self.camera.set_aspect(rect.width() / rect.height());

        ui.painter().rect_filled(
            rect,
            Rounding::same(8.0),
            Color32::from_rgb(0xf5, 0xf5, 0xf5),
        );

        // Always runs, even without a ready model: a `None` model makes the
        // callback drop the torn-down session's GPU buffers.
        ui.painter().add(egui_wgpu::Callback::new_paint_callback(
            rect,
            ViewerCallback {
                draw: ViewerDrawData {
                    generation: self.session.generation(),
                    model: self.session.model(),
                    model_matrix: self.session.model_matrix(),
                    view_proj: self.camera.view_projection_matrix(),
                    lighting: self.lighting.clone(),
                    target_format: self.target_format,
                },
            },
        ));

        // Window-level pointer tracking: a drag that wanders outside the
        // viewport keeps rotating the model until the button is released.
        let (pressed, position) = ui.input(|i| {
            (
                i.pointer.primary_down(),
                i.pointer.latest_pos().map(|pos| (pos.x, pos.y)),
            )
        });
        self.session
            .pointer(pressed, position, self.config.drag_sensitivity);

        if self.state.is_loading() {
            self.loading_overlay(ui, rect);
        } else if let SessionPhase::Failed(message) = self.session.phase().clone() {
            self.failure_overlay(ui, rect, &message);
        }
    }

    fn loading_overlay(&self, ui: &mut egui::Ui, rect: egui::Rect) {
        ui.painter()
            .rect_filled(rect, Rounding::same(8.0), Color32::from_black_alpha(160));
        let spinner_rect =
            egui::Rect::from_center_size(rect.center() - Vec2::new(0.0, 16.0), Vec2::splat(32.0));
        let _ = ui.put(spinner_rect, Spinner::new().size(32.0));
        ui.painter().text(
            rect.center() + Vec2::new(0.0, 24.0),
            Align2::CENTER_CENTER,
            "Loading model…",
            FontId::proportional(16.0),
            Color32::WHITE,
        );
    }

    fn failure_overlay(&mut self, ui: &mut egui::Ui, rect: egui::Rect, message: &str) {
        ui.painter()
            .rect_filled(rect, Rounding::same(8.0), Color32::from_black_alpha(160));
        ui.painter().text(
            rect.center() - Vec2::new(0.0, 20.0),
            Align2::CENTER_CENTER,
            format!("Could not load model: {message}"),
            FontId::proportional(14.0),
            Color32::LIGHT_RED,
        );
        let button_rect =
            egui::Rect::from_center_size(rect.center() + Vec2::new(0.0, 20.0), Vec2::new(80.0, 28.0));
        if ui.put(button_rect, egui::Button::new("Retry")).clicked() {
            self.state.begin_loading();
            self.start_session_for_active();
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain finished loads; the loaded signal clears the overlay.
        for result in self.loader.poll() {
            if self.session.deliver(result, self.config.normalize_target) {
                self.state.clear_loading();
            }
        }
        // Fallback timer: the overlay never outlives its timeout, even if
        // the decode is still running.
        if self.state.is_loading()
            && self.session.overlay_expired(self.config.loading_overlay_timeout)
        {
            self.state.clear_loading();
        }

        self.session.tick(self.config.auto_rotate_speed);

        // Narrow windows pull the camera back to keep the product in frame.
        let width = ctx.screen_rect().width();
        self.camera
            .set_distance(self.config.camera_distance_for_width(width));

        egui::TopBottomPanel::top("showcase_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading("3D Product Showcase");
            });
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("carousel_controls").show(ctx, |ui| {
            ui.add_space(8.0);
            let action = ui::carousel_controls(
                ui,
                &self.catalog,
                self.state.active_index(),
                !self.state.is_loading(),
            );
            ui.add_space(8.0);
            if let Some(action) = action {
                self.apply_nav(action);
            }
        });

        egui::SidePanel::right("product_info")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                let product = self.catalog.get(self.state.active_index()).clone();
                ui::product_info_card(ui, &product);
                ui.add_space(12.0);
                if let Some(change) = ui::quantity_selector(ui, self.state.quantity()) {
                    match change {
                        QuantityChange::Increase => self.state.increment_quantity(),
                        QuantityChange::Decrease => self.state.decrement_quantity(),
                    }
                }
                ui.add_space(12.0);
                if ui.button("Add to Cart").clicked() {
                    log::info!(
                        "add to cart: {} x{} ({})",
                        product.title,
                        self.state.quantity(),
                        product.price
                    );
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer_panel(ui);
        });

        // Keep the auto-rotation animating.
        ctx.request_repaint();
    }
}
