//! The capability every resource API talks through.

use crate::value::ResourceIdentifier;
use crate::TransportError;
use serde_json::Value;
use std::time::Duration;

/// The four verbs of the CLIP v2 resource endpoints.
///
/// Paths are relative to the API root, e.g. `resource/light`. Implementations
/// own the connection, the application key and the TLS policy; callers never
/// see the response envelope. A `timeout` of `None` means the implementation
/// default.
///
/// [`crate::Bridge`] is the HTTPS implementation.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Returns the `data` array of a `GET` on `path`.
    async fn fetch(&self, path: &str, timeout: Option<Duration>) -> Result<Value, TransportError>;

    /// Sends `payload` as a `PUT` on `path/id`.
    async fn replace(
        &self,
        path: &str,
        id: &str,
        payload: &Value,
        timeout: Option<Duration>,
    ) -> Result<(), TransportError>;

    /// Sends `payload` as a `POST` on `path` and returns the identifier of the
    /// new resource.
    async fn create(
        &self,
        path: &str,
        payload: &Value,
        timeout: Option<Duration>,
    ) -> Result<ResourceIdentifier, TransportError>;

    /// Sends a `DELETE` on `path/id`.
    async fn remove(
        &self,
        path: &str,
        id: &str,
        timeout: Option<Duration>,
    ) -> Result<(), TransportError>;
}
