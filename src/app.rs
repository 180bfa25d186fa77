//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current phase, the
//! open chooser or error dialog and the `DisplayState` the UI renders.

mod model;

pub use model::*;
