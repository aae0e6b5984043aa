pub mod output;
pub mod theme;

pub use output::{farewell, info, reject, rule, section, success, warn};
pub use theme::{theme, Theme};
