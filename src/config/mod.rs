mod settings;

pub use settings::{
    ApiSettings, AudioSettings, LlmSettings, OutputSettings, PipelineSettings, ResourceSettings,
    Settings, SettingsError,
};
