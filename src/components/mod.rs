//! ECS components for entities.
//!
//! Submodules overview:
//! - [`confined`] – marker for entities clamped to the world bounds
//! - [`inputcontrolled`] – keyboard-driven acceleration intent
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – player entity marker
//! - [`projectile`] – pooled bullet trajectory/lifecycle state
//! - [`reticle`] – aiming reticle marker and clamp window
//! - [`rigidbody`] – kinematic body with velocity, acceleration, and drag
//! - [`rotation`] – rotation angle in radians
//! - [`scale`] – 2D display scale for sprites
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod confined;
pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod projectile;
pub mod reticle;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod zindex;
