//! CPU 粒子系统模块
//!
//! 逐帧离散模拟：一次 `update` 就是一步，不依赖真实时间。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Particle System                       │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Emission (Emitter::spawn_batch)                      │
//! │     - 发射器寿命未耗尽时按速率生成新粒子                   │
//! │     - 位置复制自原点，速度与颜色随机                       │
//! │                                                          │
//! │  2. Simulation (Emitter::update)                         │
//! │     - 施加外力（重力）                                    │
//! │     - 位置积分、寿命递减                                  │
//! │     - 积分完成后统一回收过期粒子                          │
//! │                                                          │
//! │  3. Collision (handle_collisions)                        │
//! │     - 球内粒子速度清零                                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```
//! use glam::Vec3;
//! use rand::{rngs::StdRng, SeedableRng};
//! use xmas_scene::render::particles::{create_firework, handle_collisions};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut firework = create_firework(&mut rng);
//! firework.update(Vec3::new(0.0, -0.01, 0.0), &mut rng);
//! handle_collisions(firework.particles_mut(), Vec3::new(0.0, 2.5, 0.0), 2.0);
//! assert!(!firework.particles().is_empty());
//! ```

pub mod collision;
pub mod emitter;
pub mod factory;
pub mod particle;
mod property_tests;

pub use collision::{handle_collisions, CollisionSphere};
pub use emitter::{Emitter, EmitterStats};
pub use factory::{create_firework, create_snow_emitter};
pub use particle::Particle;
