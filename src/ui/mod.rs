// UI module - stats side panel drawn with egui

mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
