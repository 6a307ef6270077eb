use crate::application::data::ListingTable;
use crate::config::DisplayEnvConfig;
use crate::interfaces::components::charts::render_category_bars;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use eframe::egui;
use egui_plot::{Plot, PlotPoints, Points};

pub fn render_depreciation(ui: &mut egui::Ui, table: &ListingTable, display: &DisplayEnvConfig) {
    DesignSystem::section_title(ui, "Price vs. Mileage");

    let points = Points::new("Listings", PlotPoints::from(table.price_mileage_points()))
        .radius(2.5)
        .color(DesignSystem::ACCENT_SECONDARY);

    Plot::new("price_vs_mileage")
        .height(DesignSystem::CHART_HEIGHT)
        .allow_scroll(false)
        .show_grid([true, true])
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });

    DesignSystem::section_title(
        ui,
        &format!("Top {} Brands Retaining Value", display.top_brands),
    );

    let retention = table.best_value_retention(display.top_brands);
    if retention.is_empty() {
        ui.label(
            egui::RichText::new("No listings with a non-zero mileage.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let (labels, values) = DashboardViewModel::brand_bars(&retention);
    render_category_bars(ui, "best_resale_value", "Price per KM", labels, &values);
}
