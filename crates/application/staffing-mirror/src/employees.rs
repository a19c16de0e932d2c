use crate::collection::{CollectionConfig, RemoteCollection, LOAD_FALLBACK};
use crate::state::CollectionState;
use crate::MirrorError;
use serde::Serialize;
use serde_json::Value;
use staffing_core::{translate_employee, Entity, PageBody, PageInfo};
use staffing_transport::{ApiRequest, Transport};
use std::ops::Deref;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const EMPLOYEES: CollectionConfig = CollectionConfig {
    name: "employees",
    singular: "employee",
    base_path: "employees",
    map_entity: Some(translate_employee),
};

/// Secondary caches kept next to the full employee list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeExtras {
    /// Lightweight `{id, firstName, lastName1, lastName2}` projection, untranslated.
    pub basic_items: Vec<Entity>,
    /// Metadata of the last successful paginated fetch.
    pub page: Option<PageInfo>,
}

fn basic_items_of(state: &mut CollectionState<EmployeeExtras>) -> &mut Vec<Entity> {
    &mut state.extra.basic_items
}

/// Mirror of `/employees` with display translation, the basic projection and paging.
#[derive(Clone)]
pub struct EmployeeMirror {
    collection: RemoteCollection<EmployeeExtras>,
}

impl EmployeeMirror {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            collection: RemoteCollection::new(transport, EMPLOYEES),
        }
    }

    pub fn basic_items(&self) -> Vec<Entity> {
        self.state().extra.basic_items
    }

    pub fn page(&self) -> Option<PageInfo> {
        self.state().extra.page
    }

    /// Full GET of `/employees`. Replaces `items`, so any page metadata is dropped.
    pub async fn fetch_all(&self) -> Vec<Entity> {
        let items = self.collection.fetch_all().await;
        self.with_state_mut(|s| s.extra.page = None);
        items
    }

    pub async fn refresh(&self) -> Vec<Entity> {
        info!("Refreshing {}", EMPLOYEES.name);
        self.fetch_all().await
    }

    /// GET `/employees/basic` into `basic_items`. Same contract as `fetch_all`.
    pub async fn fetch_basic(&self) -> Vec<Entity> {
        let _busy = self.begin();
        let request = ApiRequest::get(EMPLOYEES.path().join("basic"));
        self.load_into(request, None, basic_items_of).await
    }

    /// GET `/employees/paginated?page=&size=` into `items` and store the page metadata.
    ///
    /// A body without the `{content, totalElements, totalPages}` shape empties
    /// the list but leaves `last_error` unset; transport failures are recorded.
    pub async fn fetch_paginated(&self, page: u32, size: u32) -> Vec<Entity> {
        let _busy = self.begin();
        let request = ApiRequest::get(EMPLOYEES.path().join("paginated"))
            .with_query("page", page)
            .with_query("size", size);

        let body = match self.call(request, LOAD_FALLBACK).await {
            Ok(body) => body,
            Err(err) => {
                error!("Failed to fetch employee page {}: {}", page, err);
                self.with_state_mut(|s| {
                    s.items.clear();
                    s.extra.page = None;
                    s.last_error = Some(err);
                });
                return Vec::new();
            }
        };

        let Some(parsed) = PageBody::parse(&body) else {
            warn!("Paginated employee response had an unexpected shape: {}", body);
            self.with_state_mut(|s| {
                s.items.clear();
                s.extra.page = None;
            });
            return Vec::new();
        };

        let items: Vec<Entity> = parsed
            .content
            .into_iter()
            .map(Entity::new)
            .map(translate_employee)
            .collect();
        let info = PageInfo {
            page,
            size,
            total_items: parsed.total_elements,
            total_pages: parsed.total_pages,
        };
        self.with_state_mut(|s| {
            s.items = items.clone();
            s.extra.page = Some(info);
        });
        items
    }

    /// POST a batch to `/employees/bulk` and append every saved employee.
    pub async fn add_bulk<P: Serialize>(&self, payloads: &[P]) -> Result<Vec<Entity>, MirrorError> {
        let _busy = self.begin();

        let body = match serde_json::to_value(payloads) {
            Ok(body) => body,
            Err(e) => return Err(self.fail("add", MirrorError::Unexpected(e.to_string()))),
        };
        let request = ApiRequest::post(EMPLOYEES.path().join("bulk")).with_body(body);

        let saved = match self.call(request, "Could not add employees.").await {
            Ok(Value::Array(saved)) => saved,
            Ok(other) => {
                warn!("Bulk employee response was not a list: {}", other);
                return Err(self.fail("add", MirrorError::UnexpectedFormat));
            }
            Err(err) => return Err(self.fail("add", err)),
        };

        let added: Vec<Entity> = saved
            .into_iter()
            .map(Entity::new)
            .map(translate_employee)
            .collect();
        self.with_state_mut(|s| s.items.extend(added.iter().cloned()));
        Ok(added)
    }
}

impl Deref for EmployeeMirror {
    type Target = RemoteCollection<EmployeeExtras>;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}
