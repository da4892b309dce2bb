//! 球形碰撞区
//!
//! 粒子进入球体后速度直接清零（"冻结"），不做反弹，也不回收粒子。

use super::particle::Particle;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 球形碰撞区
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl CollisionSphere {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// 点是否严格位于球内（落在球面上不算）
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance(self.center) < self.radius
    }

    /// 冻结球内的粒子，返回本次被处理的粒子数
    pub fn apply(&self, particles: &mut [Particle]) -> usize {
        handle_collisions(particles, self.center, self.radius)
    }
}

/// 将位于球内的粒子速度置零
///
/// 只修改速度；位置、颜色、寿命不变。重复调用是幂等的。
pub fn handle_collisions(particles: &mut [Particle], sphere_center: Vec3, sphere_radius: f32) -> usize {
    let mut frozen = 0;
    for particle in particles.iter_mut() {
        if particle.position.distance(sphere_center) < sphere_radius {
            particle.velocity = Vec3::ZERO;
            frozen += 1;
        }
    }
    frozen
}
