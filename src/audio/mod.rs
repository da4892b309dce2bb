//! 音频系统模块
//!
//! 场景只通过 [`SceneAudio`] 触发两类音效：循环播放的背景音乐，以及每次烟花发射时的爆炸声。
//! 粒子核心不依赖音频；测试中使用 [`NullAudio`] 或 [`RecordingAudio`]。
//!
//! 启用 `audio` feature 后，[`RodioAudio`] 使用 rodio 在默认输出设备上播放。

#[cfg(feature = "audio")]
pub mod rodio_backend;

#[cfg(feature = "audio")]
pub use rodio_backend::{AudioService, RodioAudio};

/// 场景音频协作方
pub trait SceneAudio {
    /// 开始循环播放背景音乐
    fn start_background_music(&mut self);

    /// 播放一次烟花音效（替换仍在播放的上一次）
    fn play_firework(&mut self);
}

/// 不发声的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl SceneAudio for NullAudio {
    fn start_background_music(&mut self) {}

    fn play_firework(&mut self) {}
}

/// 记录调用次数，用于测试
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordingAudio {
    pub music_started: u32,
    pub fireworks_played: u32,
}

impl SceneAudio for RecordingAudio {
    fn start_background_music(&mut self) {
        self.music_started += 1;
    }

    fn play_firework(&mut self) {
        self.fireworks_played += 1;
    }
}

/// 按配置创建音频后端
///
/// 静音、未启用 `audio` feature 或设备打开失败时退化为 [`NullAudio`]。
pub fn new_backend(config: &crate::config::AudioConfig) -> Box<dyn SceneAudio> {
    if config.muted {
        tracing::info!(target: "audio", "Audio muted");
        return Box::new(NullAudio);
    }

    #[cfg(feature = "audio")]
    {
        match RodioAudio::new(config.clone()) {
            Ok(audio) => return Box::new(audio),
            Err(e) => tracing::warn!(target: "audio", "Audio disabled: {}", e),
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        tracing::info!(target: "audio", "Built without the `audio` feature, running silent");
    }

    Box::new(NullAudio)
}
