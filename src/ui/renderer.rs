//! Top-level rendering coordinator.
//!
//! The main rendering entry point: computes the view model from application
//! state and delegates to the component layer.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and hands it to the
/// component layer. Prints ANSI-styled output using the cursor-positioning
/// helpers; does not clear the screen.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, rows, cols);
}
