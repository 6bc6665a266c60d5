use reqwest::Method;
use serde_json::Value;

use crate::client::{PlaytomicClient, tenant_path, tenants_path};
use crate::error::PlaytomicError;

/// Tenant operations. A tenant is an organizational entity (a venue or club)
/// in the platform.
pub struct Tenants<'a> {
    client: &'a mut PlaytomicClient,
}

impl<'a> Tenants<'a> {
    pub(crate) fn new(client: &'a mut PlaytomicClient) -> Self {
        Tenants { client }
    }

    /// Fetch tenant details by tenant ID.
    pub async fn get(&mut self, tenant_id: &str) -> Result<Value, PlaytomicError> {
        self.client
            .request(Method::GET, &tenant_path(tenant_id), None)
            .await
    }

    /// Create a new tenant.
    pub async fn create(&mut self, tenant_data: Value) -> Result<Value, PlaytomicError> {
        self.client
            .request(Method::POST, &tenants_path(), Some(tenant_data))
            .await
    }
}
