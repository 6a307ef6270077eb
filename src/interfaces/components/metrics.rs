use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Headline figure for the overview row
pub fn render_metric_card(ui: &mut egui::Ui, title: &str, value: &str, footnote: Option<&str>) {
    Card::new(title).footnote(footnote).show(ui, |ui| {
        ui.label(
            egui::RichText::new(value)
                .size(24.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
}

fn banner(ui: &mut egui::Ui, tint: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(tint.linear_multiply(0.15))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, add_contents);
}

/// Green banner used for a successful estimate
pub fn render_success(ui: &mut egui::Ui, text: &str) {
    banner(ui, DesignSystem::SUCCESS, |ui| {
        ui.label(
            egui::RichText::new(text)
                .size(16.0)
                .strong()
                .color(DesignSystem::SUCCESS),
        );
    });
}

/// Red banner for a failed load or prediction
pub fn render_error(ui: &mut egui::Ui, headline: &str, detail: &str) {
    banner(ui, DesignSystem::DANGER, |ui| {
        ui.label(
            egui::RichText::new(headline)
                .strong()
                .color(DesignSystem::DANGER),
        );
        ui.label(egui::RichText::new(detail).color(DesignSystem::TEXT_PRIMARY));
    });
}
