//! Route modules, one per context.

pub mod health;
pub mod scenario;
pub mod scene;
pub mod session;
