//! Style domain: live host styles, the compact record they encode to, and its
//! storage form.

mod category;
mod color;
pub mod encode;
pub mod live;
mod payload;
mod record;
pub mod wire;

pub use category::StyleCategory;
pub use color::{round_opacity, Rgba};
pub use encode::{encode_color_variable, encode_local_color_variable, EncodeStyle};
pub use payload::{
    EffectKind, GradientKind, GradientStop, GridPattern, InvalidTextMetrics, PaintKind, PaintLayer,
    StylePayload, TextMetrics,
};
pub use record::{StyleRecord, StyleSource};
pub use wire::WireError;
