mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{JusoSettings, LoggingSettings, ServerSettings, Settings};
