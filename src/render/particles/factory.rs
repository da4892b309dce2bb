//! 发射器预设：烟花与降雪
//!
//! 随机数生成器由调用方注入，便于用固定种子复现。

use super::emitter::Emitter;
use glam::Vec3;
use rand::Rng;
use std::ops::Range;

/// 烟花发射位置范围
pub const FIREWORK_X: Range<f32> = -15.0..15.0;
pub const FIREWORK_Y: Range<f32> = 7.0..12.0;
pub const FIREWORK_Z: Range<f32> = -20.0..10.0;
/// 烟花每步发射数量
pub const FIREWORK_RATE: Range<u32> = 45..50;
/// 烟花粒子寿命（步数，实数采样）
pub const FIREWORK_PARTICLE_LIFESPAN: Range<f32> = 20.0..25.0;
pub const FIREWORK_SPEED: Range<f32> = 0.4..0.5;
/// 烟花发射器寿命：15 步后停止发射
pub const FIREWORK_EMITTER_LIFESPAN: i32 = 15;

pub const SNOW_ORIGIN: Vec3 = Vec3::new(0.0, 20.0, 0.0);
pub const SNOW_RATE: u32 = 7;
pub const SNOW_PARTICLE_LIFESPAN: i32 = 200;
pub const SNOW_SPEED: f32 = 0.1;

/// 创建一次烟花爆发
///
/// 粒子寿命在 [20, 25) 内按实数采样后向上取整：计数器每步减一，
/// 实数寿命 `t` 与整数寿命 `ceil(t)` 在同一步过期。
pub fn create_firework<R: Rng + ?Sized>(rng: &mut R) -> Emitter {
    let position = Vec3::new(
        rng.gen_range(FIREWORK_X),
        rng.gen_range(FIREWORK_Y),
        rng.gen_range(FIREWORK_Z),
    );
    let rate = rng.gen_range(FIREWORK_RATE);
    let particle_lifespan = rng.gen_range(FIREWORK_PARTICLE_LIFESPAN).ceil() as i32;
    let speed_range = rng.gen_range(FIREWORK_SPEED);

    Emitter::new(
        position,
        rate,
        particle_lifespan,
        speed_range,
        Some(FIREWORK_EMITTER_LIFESPAN),
    )
}

/// 创建永不停止的降雪发射器
pub fn create_snow_emitter() -> Emitter {
    Emitter::new(
        SNOW_ORIGIN,
        SNOW_RATE,
        SNOW_PARTICLE_LIFESPAN,
        SNOW_SPEED,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_firework_parameters_in_range() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let fw = create_firework(&mut rng);
            assert!(FIREWORK_X.contains(&fw.position.x));
            assert!(FIREWORK_Y.contains(&fw.position.y));
            assert!(FIREWORK_Z.contains(&fw.position.z));
            assert!(FIREWORK_RATE.contains(&fw.rate));
            assert!((20..=25).contains(&fw.particle_lifespan));
            assert!(FIREWORK_SPEED.contains(&fw.speed_range));
            assert_eq!(fw.emitter_lifespan, Some(FIREWORK_EMITTER_LIFESPAN));
            assert!(fw.particles().is_empty());
        }
    }

    #[test]
    fn test_firework_is_reproducible() {
        let a = create_firework(&mut StdRng::seed_from_u64(1));
        let b = create_firework(&mut StdRng::seed_from_u64(1));
        assert_eq!(a.position, b.position);
        assert_eq!(a.rate, b.rate);
        assert_eq!(a.particle_lifespan, b.particle_lifespan);
        assert_eq!(a.speed_range, b.speed_range);
    }

    #[test]
    fn test_firework_burst_lifecycle() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut fw = create_firework(&mut rng);
        let lifespan = fw.particle_lifespan;

        let mut steps = 0;
        while !fw.is_dead() {
            fw.update(Vec3::new(0.0, -0.01, 0.0), &mut rng);
            steps += 1;
            assert!(steps < 100, "firework never finished");
        }
        // 最后一批粒子在第 14 步发射，再存活 lifespan 步
        assert_eq!(steps, FIREWORK_EMITTER_LIFESPAN - 1 + lifespan - 1);
        assert_eq!(
            fw.stats().total_emitted,
            u64::from(fw.rate) * (FIREWORK_EMITTER_LIFESPAN as u64 - 1)
        );
    }

    #[test]
    fn test_snow_emitter_is_fixed_and_perpetual() {
        let snow = create_snow_emitter();
        assert_eq!(snow.position, Vec3::new(0.0, 20.0, 0.0));
        assert_eq!(snow.rate, 7);
        assert_eq!(snow.particle_lifespan, 200);
        assert_eq!(snow.speed_range, 0.1);
        assert_eq!(snow.emitter_lifespan, None);
        assert!(snow.is_emitting());
    }
}
