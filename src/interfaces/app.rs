use crate::application::data::{ListingLoader, ListingTable};
use crate::application::ml::PredictionService;
use crate::config::Config;
use crate::interfaces::components::metrics::render_error;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::pages::depreciation::render_depreciation;
use crate::interfaces::pages::overview::render_overview;
use crate::interfaces::pages::predict::render_predict;
use crate::interfaces::pages::pricing::render_pricing;
use crate::interfaces::view_models::{
    Page, PredictionForm, PredictionFormOptions, PredictionOutcome,
};
use eframe::egui;
use std::sync::Arc;
use tracing::error;

enum TableState {
    Loaded(Arc<ListingTable>),
    Failed { headline: String, detail: String },
}

/// The desktop dashboard: sidebar navigation over four views
pub struct DashboardApp {
    config: Config,
    loader: ListingLoader,
    predictor: PredictionService,
    page: Page,
    table: TableState,
    form_options: Option<PredictionFormOptions>,
    form: Option<PredictionForm>,
    outcome: Option<PredictionOutcome>,
}

impl DashboardApp {
    pub fn new(config: Config, loader: ListingLoader, predictor: PredictionService) -> Self {
        let mut app = Self {
            config,
            loader,
            predictor,
            page: Page::default(),
            table: TableState::Failed {
                headline: "Loading".to_string(),
                detail: String::new(),
            },
            form_options: None,
            form: None,
            outcome: None,
        };
        app.refresh_table();
        app
    }

    /// Re-reads the dataset through the cache; a changed file yields a new table.
    fn refresh_table(&mut self) {
        match self.loader.load_data() {
            Ok(table) => {
                let changed = match &self.table {
                    TableState::Loaded(current) => !Arc::ptr_eq(current, &table),
                    TableState::Failed { .. } => true,
                };
                if changed {
                    let options = PredictionFormOptions::from_table(&table);
                    match self.form.as_mut() {
                        Some(form) => form.clamp_to(&options),
                        None => self.form = Some(PredictionForm::with_defaults(&options)),
                    }
                    self.form_options = Some(options);
                }
                self.table = TableState::Loaded(table);
            }
            Err(e) => {
                error!("Failed to load dataset: {}", e);
                self.table = TableState::Failed {
                    headline: e.kind_label().to_string(),
                    detail: e.to_string(),
                };
            }
        }
    }

    fn run_prediction(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        let result = self.predictor.predict(&form.to_request());
        if let Err(e) = &result {
            error!("Prediction failed: {}", e);
        }
        self.outcome = Some(PredictionOutcome::from_result(
            result,
            &self.config.display.currency_symbol,
        ));
    }

    fn render_navigation(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("navigation_panel")
            .default_width(200.0)
            .resizable(false)
            .frame(DesignSystem::sidebar_frame())
            .show(ctx, |ui| {
                ui.heading("🔍 Navigation");
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(egui::RichText::new("Go to").color(DesignSystem::TEXT_SECONDARY));

                let previous = self.page;
                for page in Page::ALL {
                    ui.radio_value(&mut self.page, page, page.title());
                }
                if self.page != previous {
                    self.refresh_table();
                }

                ui.add_space(DesignSystem::SPACING_LARGE);
                if ui.button("Reload dataset").clicked() {
                    self.refresh_table();
                }
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_navigation(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(
                egui::RichText::new("🚗 ALPHA MOTORS Dashboard")
                    .size(26.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(egui::RichText::new(self.page.heading()).size(20.0).strong());
            ui.separator();

            let table = match &self.table {
                TableState::Loaded(table) => Arc::clone(table),
                TableState::Failed { headline, detail } => {
                    render_error(ui, headline, detail);
                    return;
                }
            };

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| match self.page {
                    Page::Overview => {
                        render_overview(ui, &table, &self.config.display.currency_symbol)
                    }
                    Page::PricingAnalysis => render_pricing(ui, &table, &self.config.display),
                    Page::DepreciationTrends => {
                        render_depreciation(ui, &table, &self.config.display)
                    }
                    Page::PredictPrice => {
                        let clicked = match (&self.form_options, self.form.as_mut()) {
                            (Some(options), Some(form)) => {
                                render_predict(ui, options, form, self.outcome.as_ref())
                            }
                            _ => false,
                        };
                        if clicked {
                            self.run_prediction();
                        }
                    }
                });
        });
    }
}
