//! 场景驱动器
//!
//! 每帧顺序：
//! 1. 绘制静态几何
//! 2. 降雪：更新 → 三个树形碰撞区 → 重新着色为白色 → 绘制
//! 3. 烟花：逐个更新 → 碰撞 → 绘制
//! 4. 移除已结束的烟花
//! 5. 烟花计时器超过阈值时发射新烟花并播放音效

use crate::audio::SceneAudio;
use crate::config::SimulationConfig;
use crate::render::geometry::SceneGeometry;
use crate::render::particles::{create_firework, create_snow_emitter, Emitter};
use crate::render::SceneRenderer;
use glam::Vec3;
use rand::Rng;

/// 雪花统一显示为白色
const SNOW_COLOR: Vec3 = Vec3::ONE;

/// 单步结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// 本步结束后的帧序号（从 1 开始）
    pub frame: u64,
    pub snow_particles: usize,
    pub firework_particles: usize,
    /// 本步结束后仍活动的烟花数
    pub active_fireworks: usize,
    /// 本步被冻结的粒子数（同一粒子被多个碰撞区命中时重复计数）
    pub frozen: usize,
    /// 本步是否发射了新烟花
    pub launched_firework: bool,
    /// 本步移除的烟花数
    pub retired_fireworks: usize,
}

/// 场景驱动器
pub struct SceneDriver {
    config: SimulationConfig,
    geometry: SceneGeometry,
    snow: Emitter,
    fireworks: Vec<Emitter>,
    firework_timer: u32,
    frame: u64,
}

impl SceneDriver {
    pub fn new(config: SimulationConfig, geometry: SceneGeometry) -> Self {
        Self {
            config,
            geometry,
            snow: create_snow_emitter(),
            fireworks: Vec::new(),
            firework_timer: 0,
            frame: 0,
        }
    }

    /// 场景启动：开始背景音乐
    pub fn start<A: SceneAudio + ?Sized>(&mut self, audio: &mut A) {
        tracing::info!(target: "scene", "Scene started");
        audio.start_background_music();
    }

    pub fn snow(&self) -> &Emitter {
        &self.snow
    }

    pub fn fireworks(&self) -> &[Emitter] {
        &self.fireworks
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn firework_timer(&self) -> u32 {
        self.firework_timer
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    /// 场景内粒子总数
    pub fn particle_count(&self) -> usize {
        self.snow.particles().len()
            + self
                .fireworks
                .iter()
                .map(|f| f.particles().len())
                .sum::<usize>()
    }

    /// 推进一帧
    pub fn step<R, A, D>(&mut self, rng: &mut R, audio: &mut A, renderer: &mut D) -> StepReport
    where
        R: Rng + ?Sized,
        A: SceneAudio + ?Sized,
        D: SceneRenderer + ?Sized,
    {
        let mut report = StepReport::default();

        renderer.begin_frame();
        renderer.draw_geometry(&self.geometry);

        self.snow.update(self.config.snow_force, rng);
        for zone in &self.config.snow_collision_zones {
            report.frozen += zone.apply(self.snow.particles_mut());
        }
        for particle in self.snow.particles_mut() {
            particle.color = SNOW_COLOR;
        }
        renderer.draw_particles(self.snow.particles());

        for firework in &mut self.fireworks {
            firework.update(self.config.firework_force, rng);
            for zone in &self.config.firework_collision_zones {
                report.frozen += zone.apply(firework.particles_mut());
            }
            renderer.draw_particles(firework.particles());
        }

        let before = self.fireworks.len();
        self.fireworks.retain(|f| !f.is_dead());
        report.retired_fireworks = before - self.fireworks.len();
        if report.retired_fireworks > 0 {
            tracing::debug!(
                target: "scene",
                "Retired {} firework(s) at frame {}",
                report.retired_fireworks,
                self.frame + 1
            );
        }

        self.firework_timer += 1;
        if self.firework_timer > self.config.firework_interval {
            let firework = create_firework(rng);
            tracing::debug!(
                target: "scene",
                "Launching firework at {:?} (rate {}, lifespan {})",
                firework.position,
                firework.rate,
                firework.particle_lifespan
            );
            self.fireworks.push(firework);
            audio.play_firework();
            self.firework_timer = 0;
            report.launched_firework = true;
        }

        renderer.end_frame();
        self.frame += 1;

        report.frame = self.frame;
        report.snow_particles = self.snow.particles().len();
        report.firework_particles = self.particle_count() - report.snow_particles;
        report.active_fireworks = self.fireworks.len();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{NullAudio, RecordingAudio};
    use crate::config::DisplayConfig;
    use crate::render::{Camera, DrawList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn driver(config: SimulationConfig) -> SceneDriver {
        SceneDriver::new(config, SceneGeometry::new(None))
    }

    fn draw_list() -> DrawList {
        DrawList::new(Camera::from_display(&DisplayConfig::default()))
    }

    #[test]
    fn test_start_plays_music_once() {
        let mut audio = RecordingAudio::default();
        let mut scene = driver(SimulationConfig::default());
        scene.start(&mut audio);
        assert_eq!(audio.music_started, 1);
        assert_eq!(audio.fireworks_played, 0);
    }

    #[test]
    fn test_snow_is_white_after_step() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut scene = driver(SimulationConfig::default());
        scene.step(&mut rng, &mut NullAudio, &mut draw_list());
        scene.step(&mut rng, &mut NullAudio, &mut draw_list());

        assert_eq!(scene.snow().particles().len(), 14);
        assert!(scene
            .snow()
            .particles()
            .iter()
            .all(|p| p.color == Vec3::ONE));
    }

    #[test]
    fn test_firework_launch_cadence() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut audio = RecordingAudio::default();
        let mut renderer = draw_list();
        let mut scene = driver(SimulationConfig::default());

        let mut launches = Vec::new();
        for _ in 0..400 {
            let report = scene.step(&mut rng, &mut audio, &mut renderer);
            if report.launched_firework {
                launches.push(report.frame);
            }
        }

        // 计时器在超过 120 时才触发，周期为 121 帧
        assert_eq!(launches, vec![121, 242, 363]);
        assert_eq!(audio.fireworks_played, 3);
        assert_eq!(scene.firework_timer(), 400 - 363);
    }

    #[test]
    fn test_fireworks_retire() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = SimulationConfig {
            firework_interval: 0,
            ..Default::default()
        };
        let mut scene = driver(config);
        let mut renderer = draw_list();

        // 间隔为 0 时每帧都发射
        let report = scene.step(&mut rng, &mut NullAudio, &mut renderer);
        assert!(report.launched_firework);
        assert_eq!(report.active_fireworks, 1);

        let mut retired = 0;
        for _ in 0..60 {
            retired += scene
                .step(&mut rng, &mut NullAudio, &mut renderer)
                .retired_fireworks;
        }
        assert!(retired > 0);
        // 烟花最多存活 14 + 25 - 1 步
        assert!(scene.fireworks().len() <= 38);
    }

    #[test]
    fn test_snow_freezes_in_tree_zone() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = SimulationConfig {
            snow_force: Vec3::new(0.0, -0.5, 0.0),
            ..Default::default()
        };
        let mut scene = driver(config);

        let mut frozen = 0;
        for _ in 0..60 {
            frozen += scene.step(&mut rng, &mut NullAudio, &mut draw_list()).frozen;
        }
        assert!(frozen > 0);
        let stuck = scene
            .snow()
            .particles()
            .iter()
            .filter(|p| p.velocity == Vec3::ZERO)
            .count();
        assert!(stuck > 0);
    }

    #[test]
    fn test_renderer_sees_every_particle() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = SimulationConfig {
            firework_interval: 2,
            ..Default::default()
        };
        let mut scene = driver(config);
        let mut renderer = draw_list();

        for _ in 0..10 {
            scene.step(&mut rng, &mut NullAudio, &mut renderer);
        }
        scene.step(&mut rng, &mut NullAudio, &mut renderer);

        let stats = renderer.last_frame();
        assert!(stats.geometry_drawn);
        // 绘制发生在移除死亡烟花和发射新烟花之前
        assert!(stats.particles >= scene.snow().particles().len());
        assert_eq!(renderer.frames(), 11);
        assert_eq!(scene.frame(), 11);
    }
}
