//! 主引擎入口
//!
//! 负责组装协作方（日志、纹理、音频、渲染器、随机数源）并以固定步长运行场景。

use super::error::{EngineError, EngineResult};
use crate::audio::{self, SceneAudio};
use crate::config::SceneConfig;
use crate::render::{Camera, DrawList, SceneGeometry};
use crate::resources::{load_texture, TextureData};
use crate::scene::SceneDriver;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 场景引擎
///
/// 生命周期：
/// 1. **初始化阶段**：验证配置、加载背景纹理、打开音频
/// 2. **运行阶段**：按目标帧率逐帧推进场景
/// 3. **关闭阶段**：达到帧数上限或退出标志被置位后返回（帧数上限为 0 时只靠退出标志）
pub struct Engine {
    config: SceneConfig,
    driver: SceneDriver,
    renderer: DrawList,
    audio: Box<dyn SceneAudio>,
    rng: StdRng,
    quit: Arc<AtomicBool>,
}

impl Engine {
    /// 按配置初始化引擎
    pub fn new(config: SceneConfig) -> EngineResult<Self> {
        config.validate()?;

        let background = match load_texture(&config.background_texture) {
            Ok(texture) => {
                tracing::info!(
                    target: "assets",
                    "Loaded background {} ({}x{})",
                    config.background_texture,
                    texture.width,
                    texture.height
                );
                Some(texture)
            }
            Err(e) => {
                tracing::warn!(target: "assets", "Background texture unavailable: {}", e);
                None
            }
        };

        let audio = audio::new_backend(&config.audio);
        Ok(Self::with_audio(config, background, audio))
    }

    /// 使用指定的背景纹理和音频后端初始化
    pub fn with_audio(
        config: SceneConfig,
        background: Option<TextureData>,
        audio: Box<dyn SceneAudio>,
    ) -> Self {
        let rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let driver = SceneDriver::new(config.simulation.clone(), SceneGeometry::new(background));
        let renderer = DrawList::new(Camera::from_display(&config.display));

        Self {
            config,
            driver,
            renderer,
            audio,
            rng,
            quit: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 退出标志；置位后 `run` 在当前帧结束时返回
    pub fn quit_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    /// 初始化日志系统
    ///
    /// 配置tracing日志框架；`RUST_LOG` 优先，未设置时使用配置中的级别。
    pub fn initialize_logging(config: &SceneConfig) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(config.logging.level.as_directive())
        });
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    }

    pub fn driver(&self) -> &SceneDriver {
        &self.driver
    }

    pub fn renderer(&self) -> &DrawList {
        &self.renderer
    }

    /// 不等待地推进 `frames` 帧
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.tick();
        }
    }

    /// 运行主循环
    ///
    /// 每帧结束后睡眠到下一个节拍；落后时不追帧，直接进入下一帧。
    pub fn run(&mut self) -> EngineResult<()> {
        let fps = self.config.simulation.target_fps;
        if fps == 0 {
            return Err(EngineError::Init("target_fps must be positive".to_string()));
        }
        let tick = Duration::from_secs(1) / fps;
        let max_frames = self.config.simulation.max_frames;

        tracing::info!(target: "engine", "Engine starting at {} fps", fps);
        self.driver.start(self.audio.as_mut());

        let mut next_tick = Instant::now();
        while !self.quit.load(Ordering::Relaxed)
            && (max_frames == 0 || self.driver.frame() < max_frames)
        {
            self.tick();

            next_tick += tick;
            let now = Instant::now();
            if next_tick > now {
                std::thread::sleep(next_tick - now);
            } else {
                next_tick = now;
            }
        }

        tracing::info!(
            target: "engine",
            "Engine shutting down after {} frames",
            self.driver.frame()
        );
        Ok(())
    }

    fn tick(&mut self) {
        let _span = tracing::trace_span!(target: "engine", "frame").entered();
        let report = self
            .driver
            .step(&mut self.rng, self.audio.as_mut(), &mut self.renderer);

        let interval = self.config.logging.stats_interval;
        if interval > 0 && report.frame % interval == 0 {
            let stats = self.renderer.last_frame();
            tracing::info!(
                target: "engine",
                "frame {}: {} snow, {} firework particles in {} burst(s), {} visible",
                report.frame,
                report.snow_particles,
                report.firework_particles,
                report.active_fireworks,
                stats.visible
            );
        }
    }
}
