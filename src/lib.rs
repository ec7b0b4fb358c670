//! Isometric arcade platformer core
//!
//! Per-frame simulation for a small platformer: keyboard input drives a
//! physics body across fixed platform layouts, pointer buttons launch two
//! projectile types, and a 1 Hz level timer gates the hostile spawn window.

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod level;
pub mod player;
