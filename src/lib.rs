//! # Xmas Scene
//!
//! A festive 3D scene: falling snow and firework bursts around a procedurally
//! described Christmas tree.
//!
//! ## Features
//!
//! - **Particles**: frame-stepped particle/emitter simulation with injected randomness
//! - **Collision**: "freeze on contact" sphere zones approximating the tree silhouette
//! - **Scene Driver**: fixed per-frame update, collide, recolor and draw cycle
//! - **Audio**: looping background music and firework sounds (optional `audio` feature)
//! - **Rendering**: headless draw list producing GPU-ready particle instances
//!
//! ## Architecture Design
//!
//! The particle core (`render::particles`) is pure state plus total functions.
//! Every side effect (audio, drawing, texture loading, the wall clock) lives in
//! a collaborator the scene driver calls through a trait, so the core runs
//! deterministically in tests with a seeded `StdRng`.
//!
//! ### Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use xmas_scene::audio::NullAudio;
//! use xmas_scene::config::SceneConfig;
//! use xmas_scene::render::{Camera, DrawList, SceneGeometry};
//! use xmas_scene::scene::SceneDriver;
//!
//! let config = SceneConfig::new();
//! let mut driver = SceneDriver::new(config.simulation.clone(), SceneGeometry::new(None));
//! let mut renderer = DrawList::new(Camera::from_display(&config.display));
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let report = driver.step(&mut rng, &mut NullAudio, &mut renderer);
//! assert_eq!(report.snow_particles, 7);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Engine run loop, errors and macros
//! - [`config`]: Scene configuration
//! - [`render`]: Particle system, scene geometry and draw collaborator
//! - [`scene`]: Scene driver
//! - [`audio`]: Audio collaborator
//! - [`resources`]: Texture loading

/// Core engine functionality including the main loop and error types
pub mod core;
/// Configuration system
pub mod config;
/// Particle simulation, static scene geometry and the draw collaborator
pub mod render;
/// Scene driver orchestrating emitters, collisions, audio and drawing
pub mod scene;
/// Audio playback
pub mod audio;
/// Resource loading for textures
pub mod resources;
