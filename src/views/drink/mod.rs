mod long;
mod short;

pub use long::Long;
pub use short::{Short, ShortIngredient};
