pub mod ai_config;
pub mod locale;

pub use ai_config::*;
pub use locale::*;
