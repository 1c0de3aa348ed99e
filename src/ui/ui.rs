use creatures::simulation::ecosystem::{Ecosystem, TickStats};
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;
/// Ticks between two history samples.
const SAMPLE_INTERVAL: u64 = 10;

pub struct UIState {
    pub panel_width: f32,
    pub pointer_over_ui: bool,
    pub last_stats: TickStats,
    pub population_history: VecDeque<(f64, f64)>,
    pub best_score_history: VecDeque<(f64, f64)>,
    pub total_deaths: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            panel_width: 300.0,
            pointer_over_ui: false,
            last_stats: TickStats::default(),
            population_history: VecDeque::new(),
            best_score_history: VecDeque::new(),
            total_deaths: 0,
        }
    }

    pub fn record(&mut self, ecosystem: &Ecosystem, stats: &TickStats) {
        self.last_stats = *stats;
        self.total_deaths += stats.deaths as u64;

        if stats.tick % SAMPLE_INTERVAL != 0 {
            return;
        }
        let t = stats.tick as f64;
        self.population_history.push_back((t, stats.population as f64));
        let best = ecosystem.hall_of_fame().best().map_or(0, |e| e.score);
        self.best_score_history.push_back((t, best as f64));

        if self.population_history.len() > MAX_HISTORY_POINTS {
            self.population_history.pop_front();
        }
        if self.best_score_history.len() > MAX_HISTORY_POINTS {
            self.best_score_history.pop_front();
        }
    }
}

pub fn draw_ui(state: &mut UIState, ecosystem: &Ecosystem) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, ecosystem);

        state.pointer_over_ui = egui_ctx.wants_pointer_input() || egui_ctx.is_pointer_over_area();
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
