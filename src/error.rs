use crate::input::SupportedControllerType;
use ovr::Controller;
use thiserror::Error;

/// Why a newly connected controller did not get a session.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no input profile for {controller_type:?} (controller {controller:?})")]
    NoProfile {
        controller: Controller,
        controller_type: SupportedControllerType,
    },
    #[error("input profile {profile} has no interactions for controller {controller:?}")]
    NoInteractions {
        controller: Controller,
        profile: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
