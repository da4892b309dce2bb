//! 场景驱动
//!
//! 持有降雪发射器和所有活动烟花，按固定顺序推进每一帧。

pub mod driver;

pub use driver::{SceneDriver, StepReport};
