use reqwest::Method;
use serde_json::Value;

use crate::client::{PlaytomicClient, tournament_path, tournaments_path};
use crate::error::PlaytomicError;

/// Tournament operations. A tournament is a scheduled competitive event tied
/// to a tenant.
pub struct Tournaments<'a> {
    client: &'a mut PlaytomicClient,
}

impl<'a> Tournaments<'a> {
    pub(crate) fn new(client: &'a mut PlaytomicClient) -> Self {
        Tournaments { client }
    }

    /// Get tournament data.
    pub async fn get(&mut self, tournament_id: &str) -> Result<Value, PlaytomicError> {
        self.client
            .request(Method::GET, &tournament_path(tournament_id), None)
            .await
    }

    /// Create a new tournament.
    pub async fn create(&mut self, tournament_data: Value) -> Result<Value, PlaytomicError> {
        self.client
            .request(Method::POST, &tournaments_path(), Some(tournament_data))
            .await
    }
}
