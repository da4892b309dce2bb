//! 粒子核心属性测试
//!
//! 使用proptest验证积分、受力与碰撞的不变量

#[cfg(test)]
mod tests {
    use crate::render::particles::{handle_collisions, Emitter, Particle};
    use glam::Vec3;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // 取整数坐标，保证积分结果在 f32 上精确可比
    fn grid_vec3() -> impl Strategy<Value = Vec3> {
        (-64i32..64, -64i32..64, -64i32..64)
            .prop_map(|(x, y, z)| Vec3::new(x as f32, y as f32, z as f32))
    }

    fn finite_vec3() -> impl Strategy<Value = Vec3> {
        (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn update_n_times_is_linear(
            position in grid_vec3(),
            velocity in grid_vec3(),
            lifespan in -10i32..500,
            steps in 0i32..64
        ) {
            let mut p = Particle::new(position, velocity, Vec3::ONE, lifespan);
            for _ in 0..steps {
                p.update();
            }
            prop_assert_eq!(p.lifespan, lifespan - steps);
            prop_assert_eq!(p.position, position + velocity * steps as f32);
        }

        #[test]
        fn expiry_matches_lifespan(lifespan in -5i32..20, steps in 0i32..30) {
            let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, lifespan);
            for _ in 0..steps {
                p.update();
            }
            prop_assert_eq!(p.is_expired(), lifespan - steps <= 0);
        }

        #[test]
        fn forces_accumulate(v in finite_vec3(), f1 in finite_vec3(), f2 in finite_vec3()) {
            let mut a = Particle::new(Vec3::ZERO, v, Vec3::ONE, 1);
            let mut b = a;
            a.apply_force(f1);
            a.apply_force(f2);
            b.apply_force(f1 + f2);
            // 浮点加法不满足结合律，允许舍入误差
            prop_assert!((a.velocity - b.velocity).abs().max_element() < 1e-3);
        }

        #[test]
        fn collision_is_idempotent(
            positions in prop::collection::vec(finite_vec3(), 0..32),
            center in finite_vec3(),
            radius in 0.0f32..150.0
        ) {
            let mut once: Vec<Particle> = positions
                .iter()
                .map(|&p| Particle::new(p, Vec3::ONE, Vec3::splat(0.5), 5))
                .collect();
            let mut twice = once.clone();

            handle_collisions(&mut once, center, radius);
            handle_collisions(&mut twice, center, radius);
            handle_collisions(&mut twice, center, radius);

            prop_assert_eq!(&once, &twice);
            for (p, &origin) in once.iter().zip(&positions) {
                prop_assert_eq!(p.position, origin);
                prop_assert_eq!(p.color, Vec3::splat(0.5));
                if origin.distance(center) < radius {
                    prop_assert_eq!(p.velocity, Vec3::ZERO);
                } else {
                    prop_assert_eq!(p.velocity, Vec3::ONE);
                }
            }
        }

        #[test]
        fn exhausted_emitter_never_grows(
            seed in any::<u64>(),
            rate in 0u32..20,
            lifespan in 1i32..30,
            frames in 1usize..40
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut emitter = Emitter::new(Vec3::ZERO, rate, lifespan, 0.5, Some(3));
            emitter.update(Vec3::ZERO, &mut rng);
            emitter.update(Vec3::ZERO, &mut rng);
            emitter.update(Vec3::ZERO, &mut rng);

            let mut previous = emitter.particles().len();
            for _ in 0..frames {
                emitter.update(Vec3::new(0.0, -0.01, 0.0), &mut rng);
                prop_assert!(emitter.particles().len() <= previous);
                prop_assert!(emitter.particles().iter().all(|p| !p.is_expired()));
                previous = emitter.particles().len();
            }
        }
    }
}
