use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Vertical bar chart over named categories, labelled on the x axis
pub fn render_category_bars(
    ui: &mut egui::Ui,
    id: &str,
    series_name: &str,
    labels: Vec<String>,
    values: &[f64],
) {
    let bars: Vec<Bar> = labels
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(i, (label, value))| Bar::new(i as f64, *value).width(0.7).name(label))
        .collect();

    Plot::new(id)
        .height(DesignSystem::CHART_HEIGHT)
        .allow_scroll(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(series_name, bars).color(DesignSystem::ACCENT_SECONDARY),
            );
        });
}
