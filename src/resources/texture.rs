//! 纹理加载
//!
//! 解码为 RGB8，并按 OpenGL 约定把行序翻转为自下而上。

use crate::core::error::{AssetError, AssetResult};
use std::path::Path;

/// 解码后的 RGB8 纹理
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// 行优先，第一行是图像最底部的一行
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// 取 (x, y) 处像素，y 从底部算起
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }
}

/// 从文件加载纹理
pub fn load_texture<P: AsRef<Path>>(path: P) -> AssetResult<TextureData> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(AssetError::NotFound {
            path: path.display().to_string(),
        });
    }

    let image = image::open(path).map_err(|e| AssetError::LoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(from_image(image))
}

/// 从内存中的编码数据加载纹理
pub fn load_texture_from_memory(bytes: &[u8]) -> AssetResult<TextureData> {
    let image = image::load_from_memory(bytes).map_err(|e| AssetError::Decode(e.to_string()))?;
    Ok(from_image(image))
}

fn from_image(image: image::DynamicImage) -> TextureData {
    let rgb = image::imageops::flip_vertical(&image.to_rgb8());
    let (width, height) = rgb.dimensions();
    tracing::debug!(target: "assets", "Decoded {}x{} texture", width, height);
    TextureData {
        width,
        height,
        pixels: rgb.into_raw(),
    }
}
