//! 资源加载
//!
//! 目前只有天空背景纹理。

pub mod texture;

pub use texture::{load_texture, load_texture_from_memory, TextureData};
