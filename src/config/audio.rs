//! 音频配置

use serde::{Deserialize, Serialize};
use super::{ConfigResult, ConfigError};

/// 音频配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// 背景音乐文件
    pub music_path: String,

    /// 背景音乐音量 (0.0 - 1.0)
    pub music_volume: f32,

    /// 烟花音效文件
    pub firework_path: String,

    /// 烟花音效音量 (0.0 - 1.0)
    pub firework_volume: f32,

    /// 是否静音
    pub muted: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_path: "Assets/christmas_music.mp3".to_string(),
            music_volume: 0.1,
            firework_path: "Assets/fireworks.mp3".to_string(),
            firework_volume: 0.2,
            muted: false,
        }
    }
}

impl AudioConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::ValidationError("Invalid music volume".to_string()));
        }
        if !(0.0..=1.0).contains(&self.firework_volume) {
            return Err(ConfigError::ValidationError("Invalid firework volume".to_string()));
        }
        Ok(())
    }
}
