use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Framed panel with a small caption above its contents and an optional
/// muted footnote below them.
pub struct Card<'a> {
    caption: &'a str,
    footnote: Option<&'a str>,
    min_height: f32,
}

impl<'a> Card<'a> {
    pub fn new(caption: &'a str) -> Self {
        Self {
            caption,
            footnote: None,
            min_height: DesignSystem::CARD_MIN_HEIGHT,
        }
    }

    pub fn footnote(mut self, footnote: Option<&'a str>) -> Self {
        self.footnote = footnote;
        self
    }

    pub fn show(self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        DesignSystem::card_frame().show(ui, |ui| {
            ui.set_min_height(self.min_height);
            ui.label(
                egui::RichText::new(self.caption)
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY)
                    .strong(),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);

            add_contents(ui);

            if let Some(note) = self.footnote {
                ui.label(
                    egui::RichText::new(note)
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        });
    }
}
