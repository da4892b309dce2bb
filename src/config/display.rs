use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 显示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 分辨率
    pub resolution: Resolution,

    /// 垂直视场角（度）
    pub fov_y_degrees: f32,

    /// 近裁剪面
    pub near: f32,

    /// 远裁剪面
    pub far: f32,

    /// 相机到场景原点的距离（沿 +Z 后退）
    pub camera_distance: f32,

    /// 清屏颜色
    pub clear_color: [f32; 4],
}

impl_default!(DisplayConfig {
    resolution: Resolution::default(),
    fov_y_degrees: 45.0,
    near: 0.1,
    far: 100.0,
    camera_distance: 40.0,
    clear_color: [0.0, 0.0, 0.2, 1.0],
});

impl DisplayConfig {
    /// 宽高比
    pub fn aspect_ratio(&self) -> f32 {
        self.resolution.width as f32 / self.resolution.height as f32
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(ConfigError::ValidationError(
                "Invalid resolution".to_string(),
            ));
        }
        if !(1.0..180.0).contains(&self.fov_y_degrees) {
            return Err(ConfigError::ValidationError(
                "Invalid field of view".to_string(),
            ));
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(ConfigError::ValidationError(
                "Invalid clip planes".to_string(),
            ));
        }
        Ok(())
    }
}

/// 分辨率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// 宽度（像素）
    pub width: u32,
    /// 高度（像素）
    pub height: u32,
}

impl_default!(Resolution {
    width: 1280,
    height: 720,
});
