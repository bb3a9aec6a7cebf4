mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnalysisSettings, DatabaseSettings, LlmSettings, LoggingSettings, QuotaSettings,
    ServerSettings, Settings,
};
