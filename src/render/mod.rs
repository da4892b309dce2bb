pub mod draw_list;
pub mod geometry;
pub mod particles;

// Re-export draw collaborator
pub use draw_list::{DrawList, FrameStats, ParticleInstance, SceneRenderer};

// Re-export static scene description
pub use geometry::{Camera, SceneGeometry, Tree, PARTICLE_RADIUS};

// Re-export CPU Particle System components
pub use particles::{
    create_firework, create_snow_emitter, handle_collisions, CollisionSphere, Emitter,
    EmitterStats, Particle,
};
