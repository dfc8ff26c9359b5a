//! Duck Hunt in the terminal.
//!
//! Game logic (`compute`, `duck`, `dog`, `timer`, `animation`) is plain data
//! and functions with injected randomness.  Scenes in [`scene`] drive it
//! frame by frame and draw through [`display`].

pub mod animation;
pub mod compute;
pub mod config;
pub mod display;
pub mod dog;
pub mod duck;
pub mod entities;
pub mod error;
pub mod message;
pub mod scene;
pub mod sprites;
pub mod textures;
pub mod timer;
