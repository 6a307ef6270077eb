use crate::application::data::ListingTable;
use crate::interfaces::components::metrics::render_metric_card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{DashboardViewModel, LISTING_HEADERS};
use eframe::egui;

const PREVIEW_ROWS: usize = 5;

pub fn render_overview(ui: &mut egui::Ui, table: &ListingTable, currency_symbol: &str) {
    let metrics = DashboardViewModel::overview(table, currency_symbol);
    let age_note = format!("relative to {}", table.reference_year());

    ui.columns(4, |cols| {
        render_metric_card(&mut cols[0], "Total Cars", &metrics.total_cars, None);
        render_metric_card(&mut cols[1], "Avg. Price", &metrics.avg_price, None);
        render_metric_card(
            &mut cols[2],
            "Most Common Brand",
            &metrics.most_common_make,
            None,
        );
        render_metric_card(
            &mut cols[3],
            "Avg. Car Age",
            &metrics.avg_car_age,
            Some(age_note.as_str()),
        );
    });

    DesignSystem::section_title(ui, "Sample Listings");

    egui::ScrollArea::horizontal()
        .id_salt("listing_preview_scroll")
        .show(ui, |ui| {
            egui::Grid::new("listing_preview_grid")
                .striped(true)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    for header in LISTING_HEADERS {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for listing in table.head(PREVIEW_ROWS) {
                        for cell in DashboardViewModel::listing_cells(listing, currency_symbol) {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });

    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(
        egui::RichText::new(format!(
            "Loaded from {} at {}",
            table.version().path.display(),
            table.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")
        ))
        .small()
        .color(DesignSystem::TEXT_MUTED),
    );
}
