use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::render::particles::CollisionSphere;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 模拟配置
///
/// 一步对应一帧；所有力的单位都是"世界单位 / 步²"。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 目标帧率
    pub target_fps: u32,

    /// 作用于雪花的重力
    pub snow_force: Vec3,

    /// 作用于烟花粒子的重力
    pub firework_force: Vec3,

    /// 烟花计时器阈值（帧），计时器超过该值时发射新烟花
    pub firework_interval: u32,

    /// 雪花碰撞区（树顶、树中、树底）
    pub snow_collision_zones: Vec<CollisionSphere>,

    /// 烟花粒子碰撞区
    pub firework_collision_zones: Vec<CollisionSphere>,

    /// 随机种子（None = 使用系统熵）
    pub seed: Option<u64>,

    /// 最大帧数（0 = 无限运行）
    pub max_frames: u64,
}

impl_default!(SimulationConfig {
    target_fps: 60,
    snow_force: Vec3::new(0.0, -0.001, 0.0),
    firework_force: Vec3::new(0.0, -0.01, 0.0),
    firework_interval: 120,
    snow_collision_zones: vec![
        CollisionSphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0),
        CollisionSphere::new(Vec3::new(0.0, -2.5, 0.0), 2.0),
        CollisionSphere::new(Vec3::new(0.0, -5.0, 0.0), 3.0),
    ],
    firework_collision_zones: vec![CollisionSphere::new(Vec3::new(0.0, 2.5, 0.0), 2.0)],
    seed: None,
    max_frames: 0,
});

impl SimulationConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.target_fps == 0 || self.target_fps > 1000 {
            return Err(ConfigError::ValidationError(
                "Invalid target FPS".to_string(),
            ));
        }
        if !self.snow_force.is_finite() || !self.firework_force.is_finite() {
            return Err(ConfigError::ValidationError(
                "Forces must be finite".to_string(),
            ));
        }
        let zones = self
            .snow_collision_zones
            .iter()
            .chain(&self.firework_collision_zones);
        for zone in zones {
            if !zone.center.is_finite() || !zone.radius.is_finite() || zone.radius < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid collision zone: {:?}",
                    zone
                )));
            }
        }
        Ok(())
    }
}
