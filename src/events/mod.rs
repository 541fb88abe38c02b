//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate: the input
//! poller emits them on discrete transitions and observers react without
//! direct coupling to the polling code.
//!
//! Submodules:
//! - [`fire`] – bullet firing request serviced from the recyclable pool
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – edge-triggered logical input actions
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off

pub mod fire;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
