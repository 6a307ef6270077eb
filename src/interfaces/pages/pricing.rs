use crate::application::data::ListingTable;
use crate::config::DisplayEnvConfig;
use crate::interfaces::components::charts::render_category_bars;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::formatting::format_currency;
use crate::interfaces::view_models::DashboardViewModel;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

pub fn render_pricing(ui: &mut egui::Ui, table: &ListingTable, display: &DisplayEnvConfig) {
    DesignSystem::section_title(ui, "Price Distribution");

    let histogram = table.price_histogram(display.histogram_bins);
    let symbol = display.currency_symbol.clone();
    let bars: Vec<Bar> = histogram
        .iter()
        .map(|bin| {
            Bar::new(bin.midpoint(), bin.count as f64)
                .width((bin.end - bin.start).max(1.0))
                .name(format!(
                    "{} to {}",
                    format_currency(bin.start, &symbol),
                    format_currency(bin.end, &symbol)
                ))
        })
        .collect();

    Plot::new("price_distribution")
        .height(DesignSystem::CHART_HEIGHT)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| format_currency(mark.value, &symbol))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new("Listings", bars).color(DesignSystem::ACCENT_SECONDARY),
            );
        });

    DesignSystem::section_title(ui, "Average Price by Brand");

    let (labels, values) = DashboardViewModel::brand_bars(&table.mean_price_by_make());
    render_category_bars(ui, "avg_price_by_brand", "Avg. Price", labels, &values);
}
