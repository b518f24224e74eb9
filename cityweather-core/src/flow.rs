//! The two-screen lookup flow.
//!
//! The views hold no rendering code; each exposes operations that return the
//! route transition it wants, and the shell that owns the [`Session`] applies
//! it. `flow::entry` validates and stages the city, `flow::result` runs the
//! fetch state machine.
//!
//! [`Session`]: crate::session::Session

pub mod entry;
pub mod result;

pub use entry::EntryView;
pub use result::{ResultState, ResultView};

/// The two logical screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// City entry screen.
    Entry,
    /// Weather results screen.
    Results,
}
