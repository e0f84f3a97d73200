mod config_panel;
mod result_panel;

use crate::confetti::Confetti;
use crate::draw::{DrawEngine, DrawEvent, DrawRejected};
use crate::name_gen::{spawn_generate, NameGenerator, PendingImport};
use crate::raffle::{Mode, Raffle};
use crate::settings::Settings;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Longest frame delta fed to the confetti. Frames after an idle period
/// would otherwise make every particle jump.
const MAX_FRAME_DT: Duration = Duration::from_millis(100);
const IMPORT_POLL: Duration = Duration::from_millis(100);

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Result of a finished name import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported { added: usize, total: usize },
    Failed(String),
}

pub struct SorteioApp {
    raffle: Raffle,
    engine: DrawEngine,
    confetti: Confetti,
    generator: Arc<dyn NameGenerator>,
    pending_import: Option<PendingImport>,
    toasts: Toasts,
    settings: Settings,
    last_frame: Option<Instant>,
}

impl SorteioApp {
    pub fn new(settings: Settings, generator: Arc<dyn NameGenerator>) -> Self {
        let (min, max) = settings.default_range;
        Self {
            raffle: Raffle::with_range(min, max),
            engine: DrawEngine::new(settings.roll_interval(), settings.roll_ticks),
            confetti: Confetti::new(settings.confetti_particles, settings.confetti_lifetime()),
            generator,
            pending_import: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            settings,
            last_frame: None,
        }
    }

    /// Replace the draw engine, e.g. with a seeded one in tests.
    pub fn with_engine(mut self, engine: DrawEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_confetti(mut self, confetti: Confetti) -> Self {
        self.confetti = confetti;
        self
    }

    pub fn raffle(&self) -> &Raffle {
        &self.raffle
    }

    pub fn raffle_mut(&mut self) -> &mut Raffle {
        &mut self.raffle
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    /// Switch between names and numbers, discarding the shown result.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.raffle.mode() {
            return;
        }
        self.raffle.set_mode(mode);
        self.engine.reset();
        self.confetti.deactivate();
    }

    pub fn clear_names(&mut self) {
        self.raffle.clear_names();
        self.engine.reset();
        self.confetti.deactivate();
    }

    pub fn start_draw(&mut self, now: Instant) -> Result<(), DrawRejected> {
        self.engine
            .start(&self.raffle.pool(), self.raffle.quantity(), now)?;
        self.confetti.deactivate();
        Ok(())
    }

    /// Advance timers to `now`. Starts the confetti when a draw is revealed.
    pub fn advance(&mut self, now: Instant, viewport: egui::Vec2) {
        let dt = self
            .last_frame
            .map(|t| now.saturating_duration_since(t).min(MAX_FRAME_DT))
            .unwrap_or_default();
        self.last_frame = Some(now);

        if let Some(DrawEvent::Revealed(_)) = self.engine.poll(now) {
            self.confetti.activate(viewport, now);
        } else if self.confetti.is_active() && self.confetti.viewport() != viewport {
            self.confetti.resize(viewport);
        }
        self.confetti.step(dt, now);
    }

    pub fn is_importing(&self) -> bool {
        self.pending_import.is_some()
    }

    /// Ask the generator for more names. Ignored while a request is pending
    /// or a draw is rolling.
    pub fn request_import(&mut self) -> bool {
        if self.is_importing() || self.engine.is_rolling() {
            return false;
        }
        let topic = self.settings.name_gen.topic.clone();
        tracing::info!(%topic, "requesting generated names");
        self.pending_import = Some(spawn_generate(self.generator.clone(), topic));
        true
    }

    /// Apply a finished import. The name list is untouched on failure.
    pub fn poll_import(&mut self) -> Option<ImportOutcome> {
        let res = self.pending_import.as_ref()?.try_take()?;
        self.pending_import = None;
        let outcome = match res {
            Ok(names) => {
                let added = self.raffle.import_names(names);
                let total = self.raffle.names().len();
                tracing::info!(added, total, "imported generated names");
                ImportOutcome::Imported { added, total }
            }
            Err(e) => ImportOutcome::Failed(format!("{e:#}")),
        };
        Some(outcome)
    }

    fn push_toast(&mut self, kind: ToastKind, text: String) {
        if !self.settings.enable_toasts {
            return;
        }
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default()
                .duration_in_seconds(self.settings.toast_duration as f64),
        });
    }

    fn report_import(&mut self, outcome: ImportOutcome) {
        match outcome {
            ImportOutcome::Imported { added, .. } => {
                self.push_toast(ToastKind::Success, format!("{added} nomes adicionados"));
            }
            ImportOutcome::Failed(err) => {
                tracing::warn!("name import failed: {err}");
                self.push_toast(
                    ToastKind::Error,
                    "Não foi possível gerar nomes. Verifique sua chave de API.".into(),
                );
            }
        }
    }
}

impl eframe::App for SorteioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.advance(now, ctx.screen_rect().size());
        if let Some(outcome) = self.poll_import() {
            self.report_import(outcome);
        }

        egui::SidePanel::left("config")
            .resizable(false)
            .default_width(340.0)
            .show(ctx, |ui| config_panel::show(self, ui));
        egui::CentralPanel::default().show(ctx, |ui| result_panel::show(self, ui, now));

        if self.confetti.is_active() {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("confetti"),
            ));
            self.confetti.paint(&painter);
            ctx.request_repaint();
        }
        if let Some(wait) = self.engine.next_tick_in(now) {
            ctx.request_repaint_after(wait);
        }
        if self.is_importing() {
            ctx.request_repaint_after(IMPORT_POLL);
        }

        self.toasts.show(ctx);
    }
}
