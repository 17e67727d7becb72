//! VisceraVerse Core — shared domain types.
//!
//! This crate defines the scenario data model, the closed anatomy
//! enumeration, and the abstractions every other context depends on.
//! It contains no infrastructure code.

pub mod backend;
pub mod clock;
pub mod error;
pub mod organ;
pub mod scenario;
