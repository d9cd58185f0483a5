use crate::endpoint_result::EndpointResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RELAY_NOTE: &str = "IndexNow pings relayed. Check 'results' per endpoint. Non-200s may still be retried later by search engines.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedNotification {
    pub urls: Vec<String>,
    pub key_used: String,
    pub key_location: String,
    pub host: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RelaySummary {
    pub received: ReceivedNotification,
    pub results: BTreeMap<String, EndpointResult>,
    pub note: String,
}

impl RelaySummary {
    pub fn new(
        received: ReceivedNotification,
        results: BTreeMap<String, EndpointResult>,
    ) -> Self {
        Self {
            received,
            results,
            note: RELAY_NOTE.to_string(),
        }
    }
}
