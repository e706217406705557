// Common utilities

pub mod duration;
pub mod key_template;
pub mod log_format;

pub use duration::DurationParseError;
pub use key_template::KeyTemplate;
pub use log_format::LogFormat;
