//! Style catalog port
//!
//! Read-only view of the styles and variables defined in the open file.

use crate::ids::LocalId;
use crate::style::live::{ColorVariable, EffectStyle, GridStyle, PaintStyle, TextStyle};

pub trait StyleCatalogPort: Send + Sync {
    /// Name of the open file, used as its library id.
    fn file_name(&self) -> String;

    fn paint_styles(&self) -> Vec<PaintStyle>;
    fn text_styles(&self) -> Vec<TextStyle>;
    fn effect_styles(&self) -> Vec<EffectStyle>;
    fn grid_styles(&self) -> Vec<GridStyle>;

    /// Local variables whose resolved type is color.
    fn color_variables(&self) -> Vec<ColorVariable>;

    /// Any local variable by id, used to follow aliases.
    fn variable_by_id(&self, id: &LocalId) -> Option<ColorVariable>;
}
