use anyhow::Context;
use eframe::egui;
use sorteio::gui::SorteioApp;
use sorteio::logging;
use sorteio::name_gen::{GeminiGenerator, NameGenerator};
use sorteio::settings::Settings;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.json".into());
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("failed to load settings from {settings_path}"))?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );
    tracing::info!(path = %settings_path, "settings loaded");

    let generator: Arc<dyn NameGenerator> = Arc::new(GeminiGenerator::new(&settings.name_gen)?);
    if settings.name_gen.resolve_api_key().is_none() {
        tracing::warn!(
            "no API key in settings or ${}; auto fill will fail",
            settings.name_gen.api_key_env
        );
    }

    let (width, height) = settings.window_size.unwrap_or((960, 640));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sorteio")
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sorteio",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(SorteioApp::new(settings, generator))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run ui: {e}"))
}
