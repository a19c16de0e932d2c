use crate::collection::{CollectionConfig, RemoteCollection};
use staffing_transport::Transport;
use std::ops::Deref;
use std::sync::Arc;

pub const PROJECTS: CollectionConfig = CollectionConfig {
    name: "projects",
    singular: "project",
    base_path: "projects",
    map_entity: None,
};

/// Mirror of `/projects`. Records are kept exactly as the server sends them.
#[derive(Clone)]
pub struct ProjectMirror {
    collection: RemoteCollection,
}

impl ProjectMirror {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            collection: RemoteCollection::new(transport, PROJECTS),
        }
    }
}

impl Deref for ProjectMirror {
    type Target = RemoteCollection;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}
