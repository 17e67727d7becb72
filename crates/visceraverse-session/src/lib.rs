//! VisceraVerse — Session State bounded context.
//!
//! A single explicitly-owned state object holding the current scenario and
//! everything the user has done to it. All mutation goes through named
//! actions; there is no ambient global state.

pub mod state;
pub mod tool;

pub use state::{DataTag, OrganInteraction, SessionState, SessionView};
pub use tool::Tool;
