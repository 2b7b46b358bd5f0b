mod drink;
mod ingredient;

pub use drink::*;
pub use ingredient::*;
