use crate::collection::{CollectionConfig, RemoteCollection};
use crate::state::items_of;
use crate::MirrorError;
use staffing_core::{Entity, EntityId};
use staffing_transport::{ApiPath, ApiRequest, Transport};
use std::ops::Deref;
use std::sync::Arc;

pub const ASSIGNMENTS: CollectionConfig = CollectionConfig {
    name: "assignments",
    singular: "assignment",
    base_path: "assignments",
    map_entity: None,
};

/// `/assignments/project/{id}`: the only shape the backend serves for a project's assignments.
pub fn project_assignments_path(project_id: &EntityId) -> ApiPath {
    ASSIGNMENTS.path().join("project").join(project_id)
}

pub fn employee_assignments_path(employee_id: &EntityId) -> ApiPath {
    ASSIGNMENTS.path().join("employee").join(employee_id)
}

/// Mirror of `/assignments`, filterable by project or employee.
#[derive(Clone)]
pub struct AssignmentMirror {
    collection: RemoteCollection,
}

impl AssignmentMirror {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            collection: RemoteCollection::new(transport, ASSIGNMENTS),
        }
    }

    /// Replace `items` with one project's assignments. Same contract as `fetch_all`.
    pub async fn fetch_for_project(&self, project_id: impl Into<EntityId>) -> Vec<Entity> {
        let project_id = project_id.into();
        let _busy = self.begin();
        self.load_into(
            ApiRequest::get(project_assignments_path(&project_id)),
            None,
            items_of,
        )
        .await
    }

    /// Replace `items` with one employee's assignments. Same contract as `fetch_all`.
    pub async fn fetch_for_employee(&self, employee_id: impl Into<EntityId>) -> Vec<Entity> {
        let employee_id = employee_id.into();
        let _busy = self.begin();
        self.load_into(
            ApiRequest::get(employee_assignments_path(&employee_id)),
            None,
            items_of,
        )
        .await
    }

    /// POST `/assignments/{project}/assign/{employee}`, then reload the project's assignments.
    ///
    /// The reload always runs after a successful POST and never replaces the
    /// returned value, which is the POST body. A failed reload is recorded in
    /// `last_error` like any read but does not fail the assignment.
    pub async fn assign_employee_to_project(
        &self,
        project_id: impl Into<EntityId>,
        employee_id: impl Into<EntityId>,
    ) -> Result<Entity, MirrorError> {
        let (project_id, employee_id) = (project_id.into(), employee_id.into());
        let path = ASSIGNMENTS
            .path()
            .join(&project_id)
            .join("assign")
            .join(&employee_id);
        self.mutate_then_reload(
            ApiRequest::post(path),
            &project_id,
            "assign",
            "Could not assign the employee.",
        )
        .await
    }

    /// DELETE `/assignments/{project}/unassign/{employee}`, then reload the project's assignments.
    pub async fn unassign_employee_from_project(
        &self,
        project_id: impl Into<EntityId>,
        employee_id: impl Into<EntityId>,
    ) -> Result<Entity, MirrorError> {
        let (project_id, employee_id) = (project_id.into(), employee_id.into());
        let path = ASSIGNMENTS
            .path()
            .join(&project_id)
            .join("unassign")
            .join(&employee_id);
        self.mutate_then_reload(
            ApiRequest::delete(path),
            &project_id,
            "unassign",
            "Could not unassign the employee.",
        )
        .await
    }

    async fn mutate_then_reload(
        &self,
        request: ApiRequest,
        project_id: &EntityId,
        op: &str,
        fallback: &str,
    ) -> Result<Entity, MirrorError> {
        let _busy = self.begin();

        let body = match self.call(request, fallback).await {
            Ok(body) => body,
            Err(err) => return Err(self.fail(op, err)),
        };

        self.load_into(
            ApiRequest::get(project_assignments_path(project_id)),
            None,
            items_of,
        )
        .await;

        Ok(Entity::new(body))
    }
}

impl Deref for AssignmentMirror {
    type Target = RemoteCollection;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}
