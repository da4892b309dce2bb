//! 核心宏定义
//!
//! 提供统一的宏来减少代码重复

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use xmas_scene::impl_default;
///
/// struct ZoneConfig {
///     radius: f32,
///     name: String,
/// }
///
/// impl_default!(ZoneConfig {
///     radius: 1.0,
///     name: String::new(),
/// });
///
/// assert_eq!(ZoneConfig::default().radius, 1.0);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
