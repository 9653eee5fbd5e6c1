//! Configuration modules.

mod inference;
mod logging;
mod settings;

pub use inference::InferenceConfig;
pub use logging::LoggingConfig;
pub use settings::Config;
