use skyglobe_config::ConfigError;

use crate::bindings::BindingsError;
use crate::plan::PlanError;
use crate::platform::PlatformError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Bindings(#[from] BindingsError),
}
