//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: application state and the keyboard/autoplay event loop
//! - **[`panes`]**: stateless render functions for the array, recursion,
//!   code and status panes
//! - **[`theme`]**: the color palette, one color per element role
//! - **[`terminal`]**: raw mode and alternate screen, restored on drop
//!
//! Construct an [`App`] with a [`Player`] and call [`App::run`].
//!
//! [`Player`]: crate::player::Player
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use terminal::TerminalGuard;
