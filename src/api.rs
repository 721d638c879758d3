//! Typed access to one resource kind over a [`Transport`].

use crate::codec::{decode, decode_list, encode_create, encode_patch, DecodedList, Resource};
use crate::patch::Patch;
use crate::resource::Scene;
use crate::transport::Transport;
use crate::value::{RecallAction, ResourceIdentifier};
use crate::{DecodeError, HueError, TransportError};
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;

/// Lists, reads and modifies the resources of kind `R`.
///
/// Holds a shared borrow of the transport and nothing else, so any number of
/// these can be used side by side.
///
/// ### Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use hueclient::patch::Patch;
/// use hueclient::{BridgeConfig, ResourceApi};
/// use hueclient::resource::Light;
///
/// let bridge = BridgeConfig::new("192.168.0.4", "rVV05G0i52vQMMLn6BK3dpr0F3uDiqtDjPLPK2uj")
///     .connect()
///     .unwrap();
/// let lights = ResourceApi::<Light, _>::new(&bridge);
/// for light in lights.list().await.unwrap().resources {
///     lights.update(&light.id, &Patch::new().off()).await.unwrap();
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct ResourceApi<'t, R, T> {
    transport: &'t T,
    timeout: Option<Duration>,
    kind: PhantomData<fn() -> R>,
}

impl<'t, R: Resource, T: Transport> ResourceApi<'t, R, T> {
    pub fn new(transport: &'t T) -> Self {
        Self {
            transport,
            timeout: None,
            kind: PhantomData,
        }
    }

    /// Overrides the transport's default timeout for every call made through this API.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    fn path(&self) -> String {
        R::RTYPE.collection_path()
    }

    /// Fetches every resource of this kind, sorted by id. Resources that fail to
    /// decode are reported in [`DecodedList::errors`].
    pub async fn list(&self) -> crate::Result<DecodedList<R>> {
        let raw = self.transport.fetch(&self.path(), self.timeout).await?;
        let mut list = decode_list::<R>(raw)?;
        list.resources.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(list)
    }

    pub async fn get(&self, id: &str) -> crate::Result<R> {
        let path = format!("{}/{id}", self.path());
        let raw = match self.transport.fetch(&path, self.timeout).await {
            Err(TransportError::Status { status: 404, .. }) => return Err(self.not_found(id)),
            other => other?,
        };
        let item = match raw {
            Value::Array(items) => items.into_iter().next().ok_or_else(|| self.not_found(id))?,
            _ => {
                return Err(DecodeError::malformed(".", "expected a one element array").into());
            }
        };
        Ok(decode(item)?)
    }

    /// Applies `patch` to the resource `id`.
    ///
    /// The payload is encoded before anything is sent: a field this kind does
    /// not accept fails with [`HueError::UnsupportedField`] and no request is
    /// made. An empty patch is not sent either.
    pub async fn update(&self, id: &str, patch: &Patch) -> crate::Result<()> {
        let payload = encode_patch::<R>(patch)?;
        if patch.is_empty() {
            log::debug!("empty patch for {} {id}, nothing to send", R::RTYPE);
            return Ok(());
        }
        self.transport
            .replace(&self.path(), id, &payload, self.timeout)
            .await?;
        Ok(())
    }

    /// Creates a resource from `patch`, checked against [`Resource::CREATABLE`].
    pub async fn create(&self, patch: &Patch) -> crate::Result<ResourceIdentifier> {
        let payload = encode_create::<R>(patch)?;
        Ok(self
            .transport
            .create(&self.path(), &payload, self.timeout)
            .await?)
    }

    pub async fn delete(&self, id: &str) -> crate::Result<()> {
        self.transport.remove(&self.path(), id, self.timeout).await?;
        Ok(())
    }

    fn not_found(&self, id: &str) -> HueError {
        HueError::NotFound {
            rtype: R::RTYPE,
            id: id.to_string(),
        }
    }
}

impl<T: Transport> ResourceApi<'_, Scene, T> {
    /// Plays back the scene `id`.
    pub async fn recall(&self, id: &str, action: RecallAction) -> crate::Result<()> {
        self.update(id, &Patch::new().recall(action)).await
    }
}
