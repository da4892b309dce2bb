/// 统一配置系统
///
/// 默认值即场景的固定常量；可选地从TOML/JSON文件和环境变量覆盖
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::impl_default;

pub mod audio;
pub mod display;
pub mod simulation;

pub use audio::AudioConfig;
pub use display::{DisplayConfig, Resolution};
pub use simulation::SimulationConfig;

/// 场景配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 场景主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// 显示配置
    #[serde(default)]
    pub display: DisplayConfig,

    /// 模拟配置
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// 音频配置
    #[serde(default)]
    pub audio: AudioConfig,

    /// 天空背景纹理
    #[serde(default = "default_background_texture")]
    pub background_texture: String,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_background_texture() -> String {
    "Assets/sky.jpg".to_string()
}

impl_default!(SceneConfig {
    display: DisplayConfig::default(),
    simulation: SimulationConfig::default(),
    audio: AudioConfig::default(),
    background_texture: default_background_texture(),
    logging: LoggingConfig::default(),
});

impl SceneConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("XMAS_DISPLAY_WIDTH") {
            if let Ok(width) = val.parse() {
                self.display.resolution.width = width;
            }
        }
        if let Ok(val) = env::var("XMAS_DISPLAY_HEIGHT") {
            if let Ok(height) = val.parse() {
                self.display.resolution.height = height;
            }
        }
        if let Ok(val) = env::var("XMAS_TARGET_FPS") {
            if let Ok(fps) = val.parse() {
                self.simulation.target_fps = fps;
            }
        }
        if let Ok(val) = env::var("XMAS_MAX_FRAMES") {
            if let Ok(frames) = val.parse() {
                self.simulation.max_frames = frames;
            }
        }
        if let Ok(val) = env::var("XMAS_SEED") {
            if let Ok(seed) = val.parse() {
                self.simulation.seed = Some(seed);
            }
        }
        if let Ok(val) = env::var("XMAS_AUDIO_MUTED") {
            self.audio.muted = val.parse().unwrap_or(self.audio.muted);
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.display.validate()?;
        self.simulation.validate()?;
        self.audio.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./xmas_scene.toml
    /// 2. ./xmas_scene.json
    /// 3. ~/.config/xmas_scene/config.toml
    /// 4. 使用默认配置
    ///
    /// 返回配置及其来源（None 表示默认配置）。此时日志尚未初始化，由调用方记录来源。
    /// 只有文件不存在时才继续查找下一个；存在但无法读取或解析的文件直接返回错误。
    pub fn load_or_default() -> ConfigResult<(Self, Option<PathBuf>)> {
        let mut candidates = vec![
            PathBuf::from("xmas_scene.toml"),
            PathBuf::from("xmas_scene.json"),
        ];
        if let Some(home) = env::var_os("HOME") {
            candidates.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("xmas_scene")
                    .join("config.toml"),
            );
        }
        Self::load_first(&candidates)
    }

    /// 按顺序加载第一个存在的候选文件
    pub fn load_first(candidates: &[PathBuf]) -> ConfigResult<(Self, Option<PathBuf>)> {
        for path in candidates {
            let loaded = if path.extension().is_some_and(|ext| ext == "json") {
                Self::from_json_file(path)
            } else {
                Self::from_toml_file(path)
            };
            match loaded {
                Ok(config) => return Ok((config, Some(path.clone()))),
                Err(ConfigError::FileError(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(ConfigError::ParseError(format!("{}: {}", path.display(), e)))
                }
            }
        }

        Ok((Self::new(), None))
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 未设置时生效）
    pub level: LogLevel,

    /// 每隔多少帧输出一次统计（0 = 不输出）
    pub stats_interval: u64,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    stats_interval: 60,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 对应的 `EnvFilter` 指令
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}
