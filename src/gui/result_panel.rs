use super::{SorteioApp, ACCENT};
use crate::draw::DrawState;
use crate::raffle::Mode;
use eframe::egui::{self, Color32, RichText};
use std::time::Instant;

const PREVIEW_NAMES: usize = 20;

pub(super) fn show(app: &mut SorteioApp, ui: &mut egui::Ui, now: Instant) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_height(260.0);
        ui.vertical_centered(|ui| draw_area(app, ui));
    });
    ui.add_space(12.0);
    quantity_row(app, ui);
    ui.add_space(6.0);
    draw_button(app, ui, now);

    if app.raffle.mode() == Mode::Names {
        ui.add_space(12.0);
        names_preview(app, ui);
    }
}

fn draw_area(app: &SorteioApp, ui: &mut egui::Ui) {
    match app.engine.state() {
        DrawState::Idle => {
            ui.add_space(80.0);
            let waiting = match app.raffle.mode() {
                Mode::Names => "Aguardando sorteio de nomes...",
                Mode::Numbers => "Aguardando sorteio numérico...",
            };
            ui.weak(waiting);
        }
        DrawState::Rolling { preview, .. } => {
            ui.add_space(60.0);
            ui.label(RichText::new("SORTEANDO").color(Color32::LIGHT_RED).strong());
            ui.label(
                RichText::new(preview.as_deref().unwrap_or(""))
                    .size(52.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        }
        DrawState::Revealed { winners } if winners.len() == 1 => {
            ui.label(RichText::new("VENCEDOR(A)").color(Color32::LIGHT_RED).strong());
            ui.add_space(40.0);
            ui.label(
                RichText::new(&winners[0])
                    .size(64.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(12.0);
            ui.weak("Parabéns!");
        }
        DrawState::Revealed { winners } => {
            ui.label(RichText::new("VENCEDORES").color(Color32::LIGHT_RED).strong());
            ui.add_space(8.0);
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (idx, name) in winners.iter().enumerate() {
                        winner_chip(ui, idx + 1, name);
                    }
                });
            });
        }
    }
}

fn winner_chip(ui: &mut egui::Ui, place: usize, name: &str) {
    egui::Frame::none()
        .fill(ACCENT.gamma_multiply(0.6))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(14.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("#{place}")).color(Color32::LIGHT_RED).strong());
                ui.label(RichText::new(name).size(22.0).strong().color(Color32::WHITE));
            });
        });
}

fn quantity_row(app: &mut SorteioApp, ui: &mut egui::Ui) {
    let rolling = app.engine.is_rolling();
    ui.horizontal(|ui| {
        ui.label("Quantidade de Ganhadores:");
        if ui
            .add_enabled(!rolling && app.raffle.can_decrement(), egui::Button::new("➖"))
            .clicked()
        {
            app.raffle.decrement_quantity();
        }
        ui.strong(app.raffle.quantity().to_string());
        if ui
            .add_enabled(!rolling && app.raffle.can_increment(), egui::Button::new("➕"))
            .clicked()
        {
            app.raffle.increment_quantity();
        }
    });
}

fn draw_button(app: &mut SorteioApp, ui: &mut egui::Ui, now: Instant) {
    let rolling = app.engine.is_rolling();
    let label = if rolling {
        "Sorteando..."
    } else if app.raffle.quantity() > 1 {
        "▶ Sortear Ganhadores"
    } else {
        "▶ Sortear Agora"
    };
    let button = egui::Button::new(RichText::new(label).size(20.0).strong())
        .fill(ACCENT)
        .min_size(egui::vec2(ui.available_width(), 48.0));
    if ui.add_enabled(app.raffle.can_draw() && !rolling, button).clicked() {
        if let Err(e) = app.start_draw(now) {
            tracing::debug!("draw rejected: {e}");
        }
    }
}

fn names_preview(app: &SorteioApp, ui: &mut egui::Ui) {
    let names = app.raffle.names();
    ui.label(RichText::new(format!("LISTA DE NOMES ({})", names.len())).small().weak());
    egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for name in names.iter().take(PREVIEW_NAMES) {
                egui::Frame::none()
                    .fill(Color32::from_white_alpha(12))
                    .rounding(4.0)
                    .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                    .show(ui, |ui| ui.small(name));
            }
            if names.len() > PREVIEW_NAMES {
                ui.weak(format!("...mais {}", names.len() - PREVIEW_NAMES));
            }
            if names.is_empty() {
                ui.weak(RichText::new("Nenhum nome adicionado.").italics());
            }
        });
    });
}
