use serde::{Deserialize, Serialize};

pub mod employee;
pub mod entity;
pub mod validators;

pub use employee::translate_employee;
pub use entity::{Entity, EntityId};

/// Pagination metadata stored next to a paginated listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Wire shape of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBody {
    pub content: Vec<serde_json::Value>,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl PageBody {
    /// Returns `None` when the body does not have the `{content, totalElements, totalPages}` shape.
    pub fn parse(body: &serde_json::Value) -> Option<Self> {
        Self::deserialize(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_body_parses_spring_style_page() {
        let body = json!({
            "content": [{"id": 1}, {"id": 2}],
            "totalElements": 12,
            "totalPages": 6,
            "number": 0
        });
        let page = PageBody::parse(&body).unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 12);
        assert_eq!(page.total_pages, 6);
    }

    #[test]
    fn page_body_rejects_bare_array() {
        assert!(PageBody::parse(&json!([{"id": 1}])).is_none());
        assert!(PageBody::parse(&json!({
            "content": "nope",
            "totalElements": 1,
            "totalPages": 1
        }))
        .is_none());
    }
}
