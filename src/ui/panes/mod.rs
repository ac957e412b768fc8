//! TUI pane rendering modules
//!
//! - [`display`]: the calculator buffer with the pending operator glyph
//! - [`keypad`]: clickable buttons, plus the hit-testing used for mouse input
//! - [`status`]: status bar with keybindings and chain state
//!
//! Each module exports a primary `render_*` function. Panes are stateless;
//! everything they draw is passed in by [`App`](crate::ui::App).

pub mod display;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use keypad::{hit_test, render_keypad_pane, Button};
pub use status::render_status_bar;
