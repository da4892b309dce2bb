//! 统一错误处理模块
//!
//! 粒子核心的操作都是全函数，不返回错误；这里只覆盖协作方
//! （配置、资源、音频）可能出现的失败。
//!
//! `EngineError` 汇总各子系统错误，供运行循环和可执行文件使用。

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎顶层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

/// 资源加载错误
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {path}")]
    NotFound { path: String },

    #[error("Failed to load asset: {path}, reason: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("Asset decode error: {0}")]
    Decode(String),
}

/// 音频系统错误
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to initialize audio device")]
    DeviceInit,

    #[error("Audio file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to decode audio: {0}")]
    DecodeFailed(String),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
pub type AssetResult<T> = Result<T, AssetError>;
pub type AudioResult<T> = Result<T, AudioError>;
