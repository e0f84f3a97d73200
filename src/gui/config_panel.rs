use super::SorteioApp;
use crate::raffle::Mode;
use eframe::egui;

pub(super) fn show(app: &mut SorteioApp, ui: &mut egui::Ui) {
    let rolling = app.engine.is_rolling();

    let mut mode = app.raffle.mode();
    ui.add_enabled_ui(!rolling, |ui| {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, Mode::Names, "👥 Nomes");
            ui.selectable_value(&mut mode, Mode::Numbers, "# Números");
        });
    });
    app.set_mode(mode);
    ui.separator();

    match app.raffle.mode() {
        Mode::Names => names_section(app, ui, rolling),
        Mode::Numbers => range_section(app, ui, rolling),
    }
}

fn names_section(app: &mut SorteioApp, ui: &mut egui::Ui, rolling: bool) {
    ui.heading("Participantes");

    let mut text = app.raffle.names_text().to_string();
    let edit = egui::TextEdit::multiline(&mut text)
        .hint_text("Digite os nomes aqui, um por linha...")
        .desired_rows(14)
        .desired_width(f32::INFINITY);
    if ui.add_enabled(!rolling, edit).changed() {
        app.raffle.set_names_text(text);
    }
    ui.weak(format!("{} nomes", app.raffle.names().len()));

    ui.horizontal(|ui| {
        let importing = app.is_importing();
        let label = if importing { "Gerando..." } else { "✨ Auto Preencher" };
        if ui
            .add_enabled(!importing && !rolling, egui::Button::new(label))
            .clicked()
        {
            app.request_import();
        }
        let can_clear = !rolling && !app.raffle.names().is_empty();
        if ui
            .add_enabled(can_clear, egui::Button::new("🗑"))
            .on_hover_text("Limpar nomes")
            .clicked()
        {
            app.clear_names();
        }
    });
}

fn range_section(app: &mut SorteioApp, ui: &mut egui::Ui, rolling: bool) {
    ui.heading("Intervalo");

    let (mut min, mut max) = app.raffle.range();
    ui.add_enabled_ui(!rolling, |ui| {
        ui.label("Número Inicial (De)");
        ui.add(egui::DragValue::new(&mut min).speed(1.0));
        ui.label("Número Final (Até)");
        ui.add(egui::DragValue::new(&mut max).speed(1.0));
    });
    if (min, max) != app.raffle.range() {
        app.raffle.set_range(min, max);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Total de números:");
        ui.strong(app.raffle.pool_span().to_string());
    });
}
