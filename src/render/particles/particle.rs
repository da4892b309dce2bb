//! 单个粒子
//!
//! 粒子只做最简单的离散积分：每步把受力累加到速度上，再把速度累加到位置上。
//! 不涉及时间增量，一次 `update` 就是一帧。

use glam::Vec3;

/// 粒子
///
/// 由所属的 [`Emitter`](super::Emitter) 创建和回收。碰撞处理和场景驱动
/// 只会原地修改 `velocity` / `color`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// 世界坐标位置
    pub position: Vec3,
    /// 速度（世界单位 / 步）
    pub velocity: Vec3,
    /// RGB 颜色，分量在 [0, 1]
    pub color: Vec3,
    /// 剩余寿命（步数）
    pub lifespan: i32,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, color: Vec3, lifespan: i32) -> Self {
        Self {
            position,
            velocity,
            color,
            lifespan,
        }
    }

    /// 将外力逐分量累加到速度
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        self.velocity += force;
    }

    /// 前进一步：位置加速度，寿命减一
    ///
    /// 对已过期的粒子调用也是合法的，寿命会继续递减到负数。
    #[inline]
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.lifespan -= 1;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifespan <= 0
    }
}
