use crate::infra::error::AppError;
use indexnow_relay::app_state::AppState as RelayState;
use indexnow_relay::relay_resources::RelayResources;

#[derive(Clone)]
pub struct AppState {
    pub relay_state: RelayState,
}

impl AppState {
    pub fn new() -> Result<Self, AppError> {
        let resources = RelayResources::from_env()?;

        Self::with_resources(resources)
    }

    pub fn with_resources(resources: RelayResources) -> Result<Self, AppError> {
        let relay_state = RelayState::new(resources)?;

        Ok(Self { relay_state })
    }
}
