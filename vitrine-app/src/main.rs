//! vitrine: desktop 3D product showcase

mod app;
mod camera;
mod catalog;
mod config;
mod session;
mod ui;

use app::ShowcaseApp;
use config::ShowcaseConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let catalog = catalog::demo_catalog()?;
    let config = ShowcaseConfig::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("3D Product Showcase"),
        renderer: eframe::Renderer::Wgpu,
        depth_buffer: 24,
        ..Default::default()
    };

    eframe::run_native(
        "vitrine",
        options,
        Box::new(move |cc| {
            ShowcaseApp::new(cc, catalog, config)
                .map(|app| Box::new(app) as Box<dyn eframe::App>)
                .map_err(Into::into)
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run showcase: {e}"))
}
