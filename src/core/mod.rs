//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `engine` - 主引擎入口和运行循环
//! - `error` - 错误类型定义
//! - `macros` - 通用宏

pub mod engine;
pub mod error;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{
    AssetError, AssetResult, AudioError, AudioResult, EngineError, EngineResult,
};

// 重新导出主要类型
pub use engine::Engine;
