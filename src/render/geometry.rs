//! 静态场景几何
//!
//! 地面、天空背景和圣诞树都只是数据描述；具体怎么画由渲染器决定。

use crate::config::DisplayConfig;
use crate::resources::TextureData;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// 粒子绘制为小球的半径
pub const PARTICLE_RADIUS: f32 = 0.05;

/// 带颜色的四边形（逆时针顶点）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
    pub color: Vec3,
    /// 纹理坐标；None 表示不贴图
    pub uvs: Option<[Vec2; 4]>,
}

/// 沿 +Z 方向生长的圆台（顶半径为 0 时即圆锥）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// 底面中心
    pub base: Vec3,
    pub base_radius: f32,
    pub top_radius: f32,
    pub height: f32,
    pub color: Vec3,
}

/// 圣诞树：三层圆锥加树干
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub origin: Vec3,
    pub tiers: [Frustum; 3],
    pub trunk: Frustum,
}

impl Tree {
    pub fn new(origin: Vec3) -> Self {
        let green = Vec3::new(0.0, 0.5, 0.0);
        let brown = Vec3::new(0.4, 0.2, 0.0);
        let cone = |offset: f32, radius: f32, height: f32| Frustum {
            base: origin + Vec3::new(0.0, offset, 0.0),
            base_radius: radius,
            top_radius: 0.0,
            height,
            color: green,
        };

        Self {
            origin,
            tiers: [cone(0.0, 3.0, 5.0), cone(2.5, 2.5, 4.0), cone(5.0, 2.0, 3.0)],
            trunk: Frustum {
                base: origin + Vec3::new(0.0, -3.0, 0.0),
                base_radius: 0.5,
                top_radius: 0.5,
                height: 5.0,
                color: brown,
            },
        }
    }

    /// 按绘制顺序遍历所有部件
    pub fn parts(&self) -> impl Iterator<Item = &Frustum> {
        self.tiers.iter().chain(std::iter::once(&self.trunk))
    }
}

/// 整个静态场景
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    pub background: Quad,
    pub ground: Quad,
    pub tree: Tree,
    /// 天空背景纹理；None 时背景只画纯色
    pub background_texture: Option<TextureData>,
}

impl SceneGeometry {
    pub fn new(background_texture: Option<TextureData>) -> Self {
        Self {
            background: Quad {
                corners: [
                    Vec3::new(-70.0, -10.0, -50.0),
                    Vec3::new(70.0, -10.0, -50.0),
                    Vec3::new(70.0, 38.0, -50.0),
                    Vec3::new(-70.0, 38.0, -50.0),
                ],
                color: Vec3::ONE,
                uvs: Some([
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 0.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(0.0, 1.0),
                ]),
            },
            ground: Quad {
                corners: [
                    Vec3::new(-200.0, -8.0, -200.0),
                    Vec3::new(-200.0, -8.0, 200.0),
                    Vec3::new(200.0, -8.0, 200.0),
                    Vec3::new(200.0, -8.0, -200.0),
                ],
                color: Vec3::ONE,
                uvs: None,
            },
            tree: Tree::new(Vec3::new(0.0, -5.0, 0.0)),
            background_texture,
        }
    }
    pub fn is_textured(&self) -> bool {
        self.background_texture.is_some()
    }
}

/// 固定相机：位于 (0, 0, camera_distance)，看向 -Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub projection: Mat4,
    pub view: Mat4,
}

impl Camera {
    pub fn from_display(display: &DisplayConfig) -> Self {
        Self {
            projection: Mat4::perspective_rh_gl(
                display.fov_y_degrees.to_radians(),
                display.aspect_ratio(),
                display.near,
                display.far,
            ),
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -display.camera_distance)),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// 点是否落在视锥内（裁剪空间判断）
    pub fn is_visible(&self, point: Vec3) -> bool {
        let clip: Vec4 = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return false;
        }
        clip.x.abs() <= clip.w && clip.y.abs() <= clip.w && clip.z.abs() <= clip.w
    }
}
