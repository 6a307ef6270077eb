use crate::interfaces::components::metrics::{render_error, render_success};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_form::ENGINE_SIZE_RANGE;
use crate::interfaces::view_models::{PredictionForm, PredictionFormOptions, PredictionOutcome};
use eframe::egui;

fn combo(ui: &mut egui::Ui, label: &str, selected: &mut String, choices: &[String]) {
    egui::ComboBox::from_label(label)
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for choice in choices {
                ui.selectable_value(&mut *selected, choice.clone(), choice.as_str());
            }
        });
}

/// Renders the form and last outcome. Returns true when Predict was clicked.
pub fn render_predict(
    ui: &mut egui::Ui,
    options: &PredictionFormOptions,
    form: &mut PredictionForm,
    outcome: Option<&PredictionOutcome>,
) -> bool {
    ui.add(egui::Slider::new(&mut form.year, options.year_range()).text("Year of Manufacture"));
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut form.mileage)
                .range(options.mileage_range())
                .speed(100.0),
        );
        ui.label("Mileage (km)");
    });
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut form.engine_size)
                .range(ENGINE_SIZE_RANGE)
                .speed(10.0),
        );
        ui.label("Engine Size (cc)");
    });

    combo(ui, "Select Car Make", &mut form.make, &options.makes);
    combo(ui, "Condition", &mut form.condition, &options.conditions);
    combo(ui, "Fuel Type", &mut form.fuel, &options.fuels);
    combo(ui, "Transmission", &mut form.transmission, &options.transmissions);

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    let clicked = ui
        .add_enabled(form.is_submittable(options), egui::Button::new("Predict Price"))
        .clicked();

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    match outcome {
        Some(PredictionOutcome::Estimate(text)) => render_success(ui, text),
        Some(PredictionOutcome::Failure { headline, detail }) => {
            render_error(ui, headline, detail)
        }
        None => {}
    }

    clicked
}
