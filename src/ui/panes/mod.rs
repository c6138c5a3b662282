//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, coloured by each element's role in the current step
//! - [`info`]: step narration, colour legend, complexity and operation counts
//! - [`code`]: reference implementation with syntax highlighting
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function and, where the
//! pane needs more than a couple of inputs, a `*RenderData` struct.

pub mod bars;
pub mod code;
pub mod info;
pub mod status;

pub use bars::{render_bars_pane, BarsRenderData};
pub use code::render_code_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
