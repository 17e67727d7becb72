//! VisceraVerse — Interaction/Scene bounded context.
//!
//! Models the 3D side of the simulator without a renderer: a fixed set of
//! named anatomical hit-targets, a perspective camera, pointer-ray casting,
//! planar dragging, injury decals, and screen-space tag anchors. Gestures
//! are turned into session-store mutations by [`controller::SceneController`].

pub mod camera;
pub mod controller;
pub mod decal;
pub mod raycast;
pub mod target;

pub use camera::Camera;
pub use controller::{SceneController, TagAnchor};
pub use decal::InjuryDecal;
pub use raycast::{Hit, Ray};
pub use target::HitTarget;
