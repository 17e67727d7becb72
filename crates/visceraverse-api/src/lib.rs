//! VisceraVerse API — HTTP surface for the autopsy simulator.
//!
//! Exposes the scenario action boundary, session store actions, and the
//! scene interaction model over axum routes. The binary entry point lives
//! in `main.rs`.

pub mod error;
pub mod routes;
pub mod state;
