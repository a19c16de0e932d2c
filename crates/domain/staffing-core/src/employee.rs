//! Display translation for coded employee fields.

use crate::Entity;
use serde_json::Value;

pub const CIVIL_STATUS_FIELD: &str = "civilStatus";
pub const UNIVERSITY_EDUCATION_FIELD: &str = "universityEducation";

pub const SINGLE_LABEL: &str = "Single";
pub const MARRIED_LABEL: &str = "Married";
pub const YES_LABEL: &str = "Yes";
pub const NO_LABEL: &str = "No";

/// Code the backend uses for "single" and for "has a university degree".
const AFFIRMATIVE_CODE: &str = "S";

/// Replace the coded `civilStatus` / `universityEducation` values with display labels.
///
/// Anything other than the code `"S"` (including a missing field) maps to the
/// negative label. Applied once to raw server values; calling it again on a
/// translated record yields the negative labels, so never re-apply to a cache.
pub fn translate_employee(mut employee: Entity) -> Entity {
    let Value::Object(map) = employee.as_value_mut() else {
        return employee;
    };

    let civil = label_for(map.get(CIVIL_STATUS_FIELD), SINGLE_LABEL, MARRIED_LABEL);
    let education = label_for(map.get(UNIVERSITY_EDUCATION_FIELD), YES_LABEL, NO_LABEL);
    map.insert(CIVIL_STATUS_FIELD.into(), Value::String(civil.into()));
    map.insert(UNIVERSITY_EDUCATION_FIELD.into(), Value::String(education.into()));

    employee
}

fn label_for(code: Option<&Value>, affirmative: &'static str, negative: &'static str) -> &'static str {
    match code.and_then(Value::as_str) {
        Some(AFFIRMATIVE_CODE) => affirmative,
        _ => negative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_and_educated_codes_map_to_affirmative_labels() {
        let e = translate_employee(Entity::new(json!({
            "id": 1,
            "firstName": "Ana",
            "civilStatus": "S",
            "universityEducation": "S"
        })));
        assert_eq!(e.str_field("civilStatus"), Some("Single"));
        assert_eq!(e.str_field("universityEducation"), Some("Yes"));
        assert_eq!(e.str_field("firstName"), Some("Ana"));
    }

    #[test]
    fn other_or_missing_codes_map_to_negative_labels() {
        let e = translate_employee(Entity::new(json!({
            "id": 2,
            "civilStatus": "C",
        })));
        assert_eq!(e.str_field("civilStatus"), Some("Married"));
        assert_eq!(e.str_field("universityEducation"), Some("No"));
    }

    #[test]
    fn non_object_records_pass_through() {
        let raw = Entity::new(json!("not an employee"));
        assert_eq!(translate_employee(raw.clone()), raw);
    }
}
