//! 绘制协作方
//!
//! 场景驱动每帧调用 [`SceneRenderer`]。粒子只暴露位置与颜色。
//! [`DrawList`] 是无窗口实现：把粒子打包成 GPU 友好的实例数据并统计可见数量。

use super::geometry::{Camera, SceneGeometry};
use super::particles::Particle;

/// 场景渲染器
pub trait SceneRenderer {
    fn begin_frame(&mut self);

    /// 绘制静态几何（背景、地面、树）
    fn draw_geometry(&mut self, geometry: &SceneGeometry);

    fn draw_particles(&mut self, particles: &[Particle]);

    fn end_frame(&mut self);
}

/// 粒子实例数据（对应着色器中的实例属性）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// 位置
    pub position: [f32; 3],
    /// 颜色
    pub color: [f32; 3],
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.position.to_array(),
            color: particle.color.to_array(),
        }
    }
}

/// 单帧统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// 本帧提交的粒子数
    pub particles: usize,
    /// 落在视锥内的粒子数
    pub visible: usize,
    /// `draw_particles` 调用次数
    pub draw_calls: u32,
    /// 是否绘制了静态几何
    pub geometry_drawn: bool,
    /// 本帧绑定的背景纹理尺寸
    pub background_size: Option<(u32, u32)>,
}

/// 无窗口渲染器
pub struct DrawList {
    camera: Camera,
    instances: Vec<ParticleInstance>,
    current: FrameStats,
    last_frame: FrameStats,
    frames: u64,
}

impl DrawList {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            instances: Vec::new(),
            current: FrameStats::default(),
            last_frame: FrameStats::default(),
            frames: 0,
        }
    }

    /// 当前帧已提交的实例
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    /// 实例缓冲区的原始字节，可直接上传到顶点缓冲
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// 上一个完整帧的统计
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneRenderer for DrawList {
    fn begin_frame(&mut self) {
        self.instances.clear();
        self.current = FrameStats::default();
    }

    fn draw_geometry(&mut self, geometry: &SceneGeometry) {
        self.current.geometry_drawn = true;
        self.current.background_size = geometry
            .background_texture
            .as_ref()
            .map(|texture| (texture.width, texture.height));
    }

    fn draw_particles(&mut self, particles: &[Particle]) {
        self.current.draw_calls += 1;
        self.current.particles += particles.len();
        for particle in particles {
            if self.camera.is_visible(particle.position) {
                self.current.visible += 1;
            }
            self.instances.push(ParticleInstance::from(particle));
        }
    }

    fn end_frame(&mut self) {
        self.last_frame = self.current;
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::resources::TextureData;
    use glam::Vec3;

    fn draw_list() -> DrawList {
        DrawList::new(Camera::from_display(&DisplayConfig::default()))
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 24);
    }

    #[test]
    fn test_frame_collects_instances() {
        let mut list = draw_list();
        let particles = [
            Particle::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ONE, 5),
            Particle::new(Vec3::new(0.0, 0.0, 90.0), Vec3::ZERO, Vec3::X, 5),
        ];

        list.begin_frame();
        list.draw_geometry(&SceneGeometry::new(None));
        list.draw_particles(&particles);
        list.end_frame();

        let stats = list.last_frame();
        assert_eq!(stats.particles, 2);
        assert_eq!(stats.visible, 1);
        assert_eq!(stats.draw_calls, 1);
        assert!(stats.geometry_drawn);
        assert_eq!(stats.background_size, None);
        assert_eq!(list.frames(), 1);
        assert_eq!(list.instances()[1].color, [1.0, 0.0, 0.0]);
        assert_eq!(list.as_bytes().len(), 48);
    }

    #[test]
    fn test_geometry_binds_background_texture() {
        let mut list = draw_list();
        let sky = TextureData {
            width: 4,
            height: 2,
            pixels: vec![0; 4 * 2 * 3],
        };

        list.begin_frame();
        list.draw_geometry(&SceneGeometry::new(Some(sky)));
        list.end_frame();

        assert_eq!(list.last_frame().background_size, Some((4, 2)));
    }

    #[test]
    fn test_begin_frame_resets() {
        let mut list = draw_list();
        list.begin_frame();
        list.draw_particles(&[Particle::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, 1)]);
        list.end_frame();

        list.begin_frame();
        assert!(list.instances().is_empty());
        list.end_frame();
        assert_eq!(list.last_frame(), FrameStats::default());
    }
}
