//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The computed view model is handed back to the caller, which keeps it to
//! resolve mouse clicks against exactly what was drawn.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout and returns the view model that was drawn.
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!`. Every row of the pane
/// is repainted.
pub fn render(state: &AppState, rows: usize, cols: usize) -> UIViewModel {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_list_mode(&viewmodel, &state.theme, cols, rows);
    viewmodel
}
