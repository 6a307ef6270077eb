use eframe::egui;

/// Dashboard palette, spacing and shared frames
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 17, 23);
    pub const BG_SIDEBAR: egui::Color32 = egui::Color32::from_rgb(38, 39, 48);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(24, 28, 36);
    pub const BG_STRIPE: egui::Color32 = egui::Color32::from_rgb(20, 23, 30);

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 75, 75);
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(99, 110, 250); // bars, points

    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(33, 195, 84);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 43, 43);

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(170);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(49, 51, 63);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub const CARD_MIN_HEIGHT: f32 = 80.0;
    pub const CHART_HEIGHT: f32 = 320.0;

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.faint_bg_color = Self::BG_STRIPE;
        visuals.extreme_bg_color = Self::BG_SIDEBAR;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        widgets.inactive.bg_fill = Self::BG_SIDEBAR;
        widgets.inactive.weak_bg_fill = Self::BG_SIDEBAR;
        widgets.active.bg_fill = Self::ACCENT_PRIMARY;

        // Radio buttons, slider handles and combo selection use the brand red
        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.35);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn sidebar_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_SIDEBAR)
            .inner_margin(egui::Margin::same(Self::SPACING_MEDIUM as i8))
    }

    pub fn section_title(ui: &mut egui::Ui, title: &str) {
        ui.add_space(Self::SPACING_MEDIUM);
        ui.label(
            egui::RichText::new(title)
                .size(18.0)
                .strong()
                .color(Self::TEXT_PRIMARY),
        );
        ui.add_space(Self::SPACING_SMALL);
    }
}
