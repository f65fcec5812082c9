//! # fibseq-cli
//!
//! Terminal rendering, screen clearing, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod screen;
pub mod ui;

pub use presenter::{JsonPresenter, ReportPresenter, TextPresenter};
pub use screen::{NoClear, ScreenClearer, TermClearer};
pub use ui::{Palette, Ui};
