use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A server-defined record. Only the fields a mirror inspects are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Value);

impl Entity {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<EntityId> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_i64().map(EntityId::Int),
            Value::String(s) => Some(EntityId::Str(s.clone())),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Entity {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Identifier used for terminate and relational calls.
///
/// Matching is strict: `Int(7)` never matches an entity whose id is the string `"7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    pub fn matches(&self, entity: &Entity) -> bool {
        match (self, entity.field("id")) {
            (EntityId::Int(want), Some(Value::Number(n))) => n.as_i64() == Some(*want),
            (EntityId::Str(want), Some(Value::String(s))) => s == want,
            _ => false,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(v) => write!(f, "{v}"),
            EntityId::Str(v) => f.write_str(v),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(EntityId::Int)
            .unwrap_or_else(|_| EntityId::Str(s.to_string())))
    }
}

impl From<i64> for EntityId {
    fn from(v: i64) -> Self {
        EntityId::Int(v)
    }
}

impl From<i32> for EntityId {
    fn from(v: i32) -> Self {
        EntityId::Int(v.into())
    }
}

impl From<&str> for EntityId {
    fn from(v: &str) -> Self {
        EntityId::Str(v.to_string())
    }
}

impl From<String> for EntityId {
    fn from(v: String) -> Self {
        EntityId::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_reads_integer_and_string_ids() {
        assert_eq!(Entity::new(json!({"id": 7})).id(), Some(EntityId::Int(7)));
        assert_eq!(
            Entity::new(json!({"id": "a-1"})).id(),
            Some(EntityId::Str("a-1".into()))
        );
        assert_eq!(Entity::new(json!({"name": "x"})).id(), None);
        assert_eq!(Entity::new(json!([1, 2])).id(), None);
    }

    #[test]
    fn matching_does_not_coerce_between_numbers_and_strings() {
        let numeric = Entity::new(json!({"id": 7}));
        let textual = Entity::new(json!({"id": "7"}));

        assert!(EntityId::Int(7).matches(&numeric));
        assert!(!EntityId::Int(7).matches(&textual));
        assert!(EntityId::Str("7".into()).matches(&textual));
        assert!(!EntityId::Str("7".into()).matches(&numeric));
    }

    #[test]
    fn parse_prefers_integers() {
        assert_eq!("42".parse::<EntityId>().unwrap(), EntityId::Int(42));
        assert_eq!(
            "emp-42".parse::<EntityId>().unwrap(),
            EntityId::Str("emp-42".into())
        );
    }
}
