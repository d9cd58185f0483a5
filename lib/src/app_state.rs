use crate::error::RelayError;
use crate::http_gateway::HttpGateway;
use crate::relay_resources::RelayResources;

#[derive(Clone)]
pub struct AppState {
    pub resources: RelayResources,
    pub http_gateway: HttpGateway,
}

impl AppState {
    pub fn new(resources: RelayResources) -> Result<Self, RelayError> {
        let http_gateway = HttpGateway::new(resources.http_timeout_in_millis)?;

        Ok(Self { resources, http_gateway })
    }
}
