use crate::busy::{lock, BusyGuard};
use crate::state::{items_of, CollectionState};
use crate::MirrorError;
use serde::Serialize;
use serde_json::Value;
use staffing_core::{Entity, EntityId};
use staffing_transport::{ApiPath, ApiRequest, Transport};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

pub(crate) const LOAD_FALLBACK: &str = "Failed to load data.";

/// Selects which list inside the state a fetch replaces.
pub(crate) type Target<X> = fn(&mut CollectionState<X>) -> &mut Vec<Entity>;

/// Per-collection configuration: where it lives and how raw records are mapped.
#[derive(Debug, Clone, Copy)]
pub struct CollectionConfig {
    /// Plural name used in logs.
    pub name: &'static str,
    /// Singular noun used in fallback error messages.
    pub singular: &'static str,
    /// First path segment of the collection (`employees`, `projects`, ...).
    pub base_path: &'static str,
    /// Applied to every fetched or added record, never to cached ones.
    pub map_entity: Option<fn(Entity) -> Entity>,
}

impl CollectionConfig {
    pub fn path(&self) -> ApiPath {
        ApiPath::new([self.base_path])
    }

    fn map(&self, entity: Entity) -> Entity {
        match self.map_entity {
            Some(f) => f(entity),
            None => entity,
        }
    }
}

/// Local mirror of one server-owned collection.
///
/// Cloning yields another handle to the same state.
pub struct RemoteCollection<X = ()> {
    transport: Arc<dyn Transport>,
    config: CollectionConfig,
    state: Arc<Mutex<CollectionState<X>>>,
}

impl<X> Clone for RemoteCollection<X> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config,
            state: self.state.clone(),
        }
    }
}

impl<X: Default + Clone> RemoteCollection<X> {
    pub fn new(transport: Arc<dyn Transport>, config: CollectionConfig) -> Self {
        Self {
            transport,
            config,
            state: Arc::new(Mutex::new(CollectionState::default())),
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn state(&self) -> CollectionState<X> {
        lock(&self.state).clone()
    }

    pub fn items(&self) -> Vec<Entity> {
        lock(&self.state).items.clone()
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.state).is_busy
    }

    pub fn last_error(&self) -> Option<MirrorError> {
        lock(&self.state).last_error.clone()
    }

    pub fn last_error_message(&self) -> Option<String> {
        lock(&self.state).last_error_message()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).is_empty()
    }

    pub fn has_data(&self) -> bool {
        lock(&self.state).has_data()
    }

    /// GET the whole collection and replace `items` with the response.
    ///
    /// Never fails to the caller: on error `items` is emptied, `last_error` is
    /// set and an empty list is returned.
    pub async fn fetch_all(&self) -> Vec<Entity> {
        let _busy = self.begin();
        self.load_into(
            ApiRequest::get(self.config.path()),
            self.config.map_entity,
            items_of::<X>,
        )
        .await
    }

    pub async fn refresh(&self) -> Vec<Entity> {
        info!("Refreshing {}", self.config.name);
        self.fetch_all().await
    }

    /// POST `payload` and append the returned record without re-fetching.
    pub async fn add<P>(&self, payload: &P) -> Result<Entity, MirrorError>
    where
        P: Serialize + ?Sized,
    {
        let _busy = self.begin();
        let fallback = format!("Could not add {}.", self.config.singular);

        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => return Err(self.fail("add", MirrorError::Unexpected(e.to_string()))),
        };
        let request = ApiRequest::post(self.config.path()).with_body(body);

        match self.call(request, &fallback).await {
            Ok(created) => {
                let entity = self.config.map(Entity::new(created));
                self.with_state_mut(|s| s.items.push(entity.clone()));
                Ok(entity)
            }
            Err(err) => Err(self.fail("add", err)),
        }
    }

    /// PUT `/{base}/{id}/terminate` and drop every cached record with that id.
    pub async fn terminate(&self, id: impl Into<EntityId>) -> Result<(), MirrorError> {
        let id = id.into();
        let _busy = self.begin();
        let fallback = format!("Could not terminate {}.", self.config.singular);
        let request = ApiRequest::put(self.config.path().join(&id).join("terminate"));

        match self.call(request, &fallback).await {
            Ok(_) => {
                self.with_state_mut(|s| s.items.retain(|e| !id.matches(e)));
                Ok(())
            }
            Err(err) => Err(self.fail("terminate", err)),
        }
    }

    pub(crate) fn begin(&self) -> BusyGuard<X> {
        BusyGuard::acquire(&self.state)
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut CollectionState<X>) -> R) -> R {
        let mut guard = lock(&self.state);
        f(&mut guard)
    }

    /// One transport round trip, with failures mapped to a [`MirrorError`].
    pub(crate) async fn call(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> Result<Value, MirrorError> {
        self.transport
            .send(request)
            .await
            .map(|resp| resp.body)
            .map_err(|e| MirrorError::from_transport(e, fallback))
    }

    /// Record a failed write and hand the error back for the caller.
    pub(crate) fn fail(&self, op: &str, err: MirrorError) -> MirrorError {
        error!("Failed to {} {}: {}", op, self.config.singular, err);
        self.with_state_mut(|s| s.last_error = Some(err.clone()));
        err
    }

    /// Fetch a list into `target`. Does not touch the busy flag; callers hold the guard.
    ///
    /// A response that is not a JSON array is treated as a failure: the target
    /// list is emptied and `last_error` is set to [`MirrorError::UnexpectedFormat`].
    pub(crate) async fn load_into(
        &self,
        request: ApiRequest,
        map: Option<fn(Entity) -> Entity>,
        target: Target<X>,
    ) -> Vec<Entity> {
        let path = request.path.to_string();

        let loaded = match self.call(request, LOAD_FALLBACK).await {
            Ok(Value::Array(raw)) => Ok(raw
                .into_iter()
                .map(Entity::new)
                .map(|e| match map {
                    Some(f) => f(e),
                    None => e,
                })
                .collect::<Vec<_>>()),
            Ok(other) => {
                warn!("Response for {} was not a list: {}", path, other);
                Err(MirrorError::UnexpectedFormat)
            }
            Err(err) => Err(err),
        };

        match loaded {
            Ok(entities) => {
                self.with_state_mut(|s| *target(s) = entities.clone());
                entities
            }
            Err(err) => {
                error!("Failed to fetch {} from {}: {}", self.config.name, path, err);
                self.with_state_mut(|s| {
                    target(s).clear();
                    s.last_error = Some(err);
                });
                Vec::new()
            }
        }
    }
}
