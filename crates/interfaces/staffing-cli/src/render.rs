//! Console output for mirrored collections.

use crate::OutputFormat;
use serde_json::Value;
use staffing_core::Entity;

/// Header, JSON pointer into the record, column width.
type Column = (&'static str, &'static str, usize);

const EMPLOYEE_COLUMNS: &[Column] = &[
    ("ID", "/id", 6),
    ("FIRST NAME", "/firstName", 16),
    ("LAST NAMES", "/lastName1", 16),
    ("", "/lastName2", 16),
    ("CIVIL STATUS", "/civilStatus", 14),
    ("UNIVERSITY", "/universityEducation", 10),
];

const BASIC_EMPLOYEE_COLUMNS: &[Column] = &[
    ("ID", "/id", 6),
    ("FIRST NAME", "/firstName", 16),
    ("LAST NAMES", "/lastName1", 16),
    ("", "/lastName2", 16),
];

const PROJECT_COLUMNS: &[Column] = &[
    ("ID", "/id", 6),
    ("DESCRIPTION", "/description", 40),
    ("LOCATION", "/location", 20),
    ("START", "/startDate", 12),
    ("END", "/endDate", 12),
];

const ASSIGNMENT_COLUMNS: &[Column] = &[
    ("PROJECT", "/id/projectId", 8),
    ("EMPLOYEE", "/id/employeeId", 9),
    ("DESCRIPTION", "/project/description", 32),
    ("NAME", "/employee/firstName", 16),
    ("ASSIGNED", "/assignmentDate", 12),
];

pub fn employees(items: &[Entity], format: OutputFormat) -> anyhow::Result<()> {
    print_records(items, format, EMPLOYEE_COLUMNS)
}

pub fn basic_employees(items: &[Entity], format: OutputFormat) -> anyhow::Result<()> {
    print_records(items, format, BASIC_EMPLOYEE_COLUMNS)
}

pub fn projects(items: &[Entity], format: OutputFormat) -> anyhow::Result<()> {
    print_records(items, format, PROJECT_COLUMNS)
}

pub fn assignments(items: &[Entity], format: OutputFormat) -> anyhow::Result<()> {
    print_records(items, format, ASSIGNMENT_COLUMNS)
}

pub fn record(entity: &Entity) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(entity)?);
    Ok(())
}

fn print_records(items: &[Entity], format: OutputFormat, columns: &[Column]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No records found.");
                return Ok(());
            }
            for line in table_lines(items, columns) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

pub(crate) fn table_lines(items: &[Entity], columns: &[Column]) -> Vec<String> {
    let row = |cells: Vec<String>| {
        columns
            .iter()
            .zip(cells)
            .map(|(col, cell)| format!("{cell:<width$}", width = col.2))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(row(columns.iter().map(|(h, _, _)| h.to_string()).collect()));
    lines.push(row(columns.iter().map(|(_, _, w)| "-".repeat(*w)).collect()));
    for item in items {
        lines.push(row(columns.iter().map(|(_, ptr, _)| cell(item, ptr)).collect()));
    }
    lines
}

fn cell(entity: &Entity, pointer: &str) -> String {
    match entity.as_value().pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_renders_nested_fields_and_placeholders() {
        let items = vec![Entity::new(json!({
            "id": {"projectId": 3, "employeeId": 9},
            "project": {"description": "Intranet"},
            "assignmentDate": null
        }))];
        let lines = table_lines(&items, ASSIGNMENT_COLUMNS);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PROJECT  EMPLOYEE"));
        assert!(lines[2].starts_with("3        9         Intranet"));
        assert!(lines[2].ends_with('-'));
    }
}
