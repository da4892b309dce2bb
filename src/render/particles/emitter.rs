//! 粒子发射器
//!
//! 发射器拥有一组粒子。每步先按速率发射新粒子（仅在发射器寿命未耗尽时），
//! 然后对所有粒子施加外力、积分，最后回收过期粒子。

use super::particle::Particle;
use glam::Vec3;
use rand::Rng;

// ============================================================================
// 粒子发射器
// ============================================================================

/// 发射器统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitterStats {
    /// 当前存活粒子数
    pub alive_count: usize,
    /// 总发射数
    pub total_emitted: u64,
    /// 本帧发射数
    pub frame_emitted: u32,
    /// 本帧回收数
    pub frame_expired: usize,
}

/// 粒子发射器
#[derive(Debug, Clone)]
pub struct Emitter {
    /// 发射原点
    pub position: Vec3,
    /// 每步发射数量
    pub rate: u32,
    /// 新粒子的初始寿命（步数）
    pub particle_lifespan: i32,
    /// 新粒子每个速度分量的取值范围 `[-speed_range, speed_range]`
    pub speed_range: f32,
    /// 发射器剩余寿命（None = 无限）
    pub emitter_lifespan: Option<i32>,
    particles: Vec<Particle>,
    stats: EmitterStats,
}

impl Emitter {
    pub fn new(
        position: Vec3,
        rate: u32,
        particle_lifespan: i32,
        speed_range: f32,
        emitter_lifespan: Option<i32>,
    ) -> Self {
        Self {
            position,
            rate,
            particle_lifespan,
            speed_range,
            emitter_lifespan,
            particles: Vec::new(),
            stats: EmitterStats::default(),
        }
    }

    /// 以插入顺序访问粒子
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// 供碰撞处理和重新着色使用；只能原地修改，不能增删
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn stats(&self) -> EmitterStats {
        self.stats
    }

    /// 发射器是否仍在发射
    pub fn is_emitting(&self) -> bool {
        self.emitter_lifespan.map_or(true, |remaining| remaining > 0)
    }

    /// 追加 `rate` 个新粒子
    ///
    /// 位置复制自发射原点，速度每个分量在 `[-speed_range, speed_range]` 内独立均匀采样，
    /// 颜色每个通道在 [0, 1) 内均匀采样。
    pub fn spawn_batch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let range = self.speed_range.abs();
        self.particles.reserve(self.rate as usize);

        for _ in 0..self.rate {
            let velocity = Vec3::new(
                rng.gen_range(-range..=range),
                rng.gen_range(-range..=range),
                rng.gen_range(-range..=range),
            );
            let color = Vec3::new(rng.gen(), rng.gen(), rng.gen());
            self.particles.push(Particle::new(
                self.position,
                velocity,
                color,
                self.particle_lifespan,
            ));
        }

        self.stats.frame_emitted += self.rate;
        self.stats.total_emitted += u64::from(self.rate);
    }

    /// 推进一步
    ///
    /// 顺序固定：寿命递减 → 发射 → 施力并积分 → 回收。
    /// 新发射的粒子在同一步内也会受力和积分；过期粒子在被回收前仍会最后积分一次。
    pub fn update<R: Rng + ?Sized>(&mut self, external_force: Vec3, rng: &mut R) {
        self.stats.frame_emitted = 0;

        if let Some(remaining) = self.emitter_lifespan.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        if self.is_emitting() {
            self.spawn_batch(rng);
        }

        for particle in &mut self.particles {
            particle.apply_force(external_force);
            particle.update();
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());

        self.stats.frame_expired = before - self.particles.len();
        self.stats.alive_count = self.particles.len();
    }

    /// 停止发射且没有存活粒子
    pub fn is_dead(&self) -> bool {
        !self.is_emitting() && self.particles.is_empty()
    }
}

// ============================================================================
// 测试
// ============================================================================
