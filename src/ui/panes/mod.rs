//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over borrowed session data.
//!
//! # Pane Modules
//!
//! - [`array`]: the working array with pointer markers and the active span
//! - [`inspector`]: phase, operation count, family facts and explanation
//! - [`stats`]: input, parameter and the comparison stats
//! - [`status`]: status bar with keybindings and playback state
//! - `utils`: shared block and placeholder helpers

mod utils;

pub mod array;
pub mod inspector;
pub mod stats;
pub mod status;

use crate::model::AlgorithmStep;

pub use array::render_array_pane;
pub use inspector::render_inspector_pane;
pub use stats::render_stats_pane;
pub use status::render_status_bar;

/// One trace as a panel sees it
pub struct TraceRenderData<'a> {
    pub title: &'static str,
    pub complexity: &'static str,
    /// Step at the clamped display index, `None` for an empty trace
    pub step: Option<&'a dyn AlgorithmStep>,
    pub index: Option<usize>,
    pub len: usize,
    /// Still advancing with the timeline (not frozen on its last step)
    pub is_active: bool,
}
