use creatures::simulation::ecosystem::Ecosystem;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, ecosystem: &Ecosystem) {
    let response = egui::SidePanel::right("stats_panel")
        .default_width(state.panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            let stats = &state.last_stats;
            ui.label(format!("Tick: {}", ecosystem.tick()));
            ui.label(format!("Creatures: {}", stats.population));
            ui.label(format!("Recycle pool: {}", ecosystem.pool_len()));
            ui.label(format!("Obstacles: {}", ecosystem.obstacles().len()));
            ui.label(format!("Total deaths: {}", state.total_deaths));
            ui.separator();

            let hall = ecosystem.hall_of_fame();
            ui.label(format!("Hall of fame: {} / {}", hall.len(), ecosystem.params().max_hall_of_fame));
            match hall.best() {
                Some(best) => ui.label(format!("Best score: {}", best.score)),
                None => ui.label("Best score: -"),
            };
            ui.separator();

            ui.label("Population");
            draw_history_plot(ui, "population_plot", &state.population_history, "Creatures", egui::Color32::from_rgb(100, 150, 255));
            ui.label("Best score");
            draw_history_plot(ui, "best_score_plot", &state.best_score_history, "Best", egui::Color32::from_rgb(255, 200, 100));

            ui.separator();
            ui.small("Left click the arena to spawn a random creature.");
        });
    state.panel_width = response.response.rect.width();
}

fn draw_history_plot(ui: &mut egui::Ui, id: &str, data: &VecDeque<(f64, f64)>, name: &str, color: egui::Color32) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new(id)
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| format!("{}\nTick: {:.0}\nValue: {:.0}", name, value.x, value.y))
        .show(ui, |plot_ui| {
            let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(Line::new(points).color(color).name(name));
        });
}
