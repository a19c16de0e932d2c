use crate::{render, OutputFormat, PayloadArgs};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use staffing_core::validators::validate_employee_payload;
use staffing_core::{Entity, EntityId, PageInfo};
use staffing_mirror::{MirrorError, Session};

/// Turn a read's recorded error into a command failure.
fn ensure_loaded(last_error: Option<MirrorError>) -> Result<()> {
    match last_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

pub fn read_payload(args: &PayloadArgs) -> Result<Value> {
    let text = match (&args.data, &args.file) {
        (Some(data), _) => data.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file {}", path.display()))?,
        (None, None) => bail!("Either --data or --file is required"),
    };
    serde_json::from_str(&text).context("Payload is not valid JSON")
}

fn validate_employee(payload: &Value) -> Result<()> {
    let errors = validate_employee_payload(payload);
    if errors.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = errors
        .iter()
        .map(|e| format!("  {}: {}", e.field, e.message))
        .collect();
    bail!("Employee payload is invalid:\n{}", lines.join("\n"))
}

pub async fn cmd_employees_list(session: &Session, format: OutputFormat) -> Result<Vec<Entity>> {
    let items = session.employees.fetch_all().await;
    ensure_loaded(session.employees.last_error())?;
    render::employees(&items, format)?;
    Ok(items)
}

pub async fn cmd_employees_basic(session: &Session, format: OutputFormat) -> Result<Vec<Entity>> {
    let items = session.employees.fetch_basic().await;
    ensure_loaded(session.employees.last_error())?;
    render::basic_employees(&items, format)?;
    Ok(items)
}

pub async fn cmd_employees_page(
    session: &Session,
    page: u32,
    size: u32,
    format: OutputFormat,
) -> Result<Vec<Entity>> {
    let size = staffing_config::clamp_page_size(size);
    let items = session.employees.fetch_paginated(page, size).await;
    ensure_loaded(session.employees.last_error())?;
    render::employees(&items, format)?;
    if let Some(trailer) = page_trailer(format, session.employees.page()) {
        println!("{trailer}");
    }
    Ok(items)
}

/// Table output only: JSON output must stay a single document.
fn page_trailer(format: OutputFormat, page: Option<PageInfo>) -> Option<String> {
    let info = page.filter(|_| format == OutputFormat::Table)?;
    Some(format!(
        ":: Page {} of {} ({} employees, {} per page)",
        info.page + 1,
        info.total_pages.max(1),
        info.total_items,
        info.size
    ))
}

pub async fn cmd_employees_add(session: &Session, payload: Value) -> Result<Entity> {
    validate_employee(&payload)?;
    let created = session.employees.add(&payload).await?;
    println!(":: Employee added.");
    render::record(&created)?;
    Ok(created)
}

pub async fn cmd_employees_add_bulk(session: &Session, payload: Value) -> Result<Vec<Entity>> {
    let Value::Array(payloads) = payload else {
        bail!("Bulk payload must be a JSON array of employees");
    };
    for (ix, p) in payloads.iter().enumerate() {
        validate_employee(p).with_context(|| format!("Employee #{} rejected", ix + 1))?;
    }
    let added = session.employees.add_bulk(&payloads).await?;
    println!(":: {} employees added.", added.len());
    Ok(added)
}

pub async fn cmd_employees_terminate(session: &Session, id: EntityId) -> Result<()> {
    session.employees.terminate(id.clone()).await?;
    println!(":: Employee {id} terminated.");
    Ok(())
}

pub async fn cmd_projects_list(session: &Session, format: OutputFormat) -> Result<Vec<Entity>> {
    let items = session.projects.fetch_all().await;
    ensure_loaded(session.projects.last_error())?;
    render::projects(&items, format)?;
    Ok(items)
}

pub async fn cmd_projects_add(session: &Session, payload: Value) -> Result<Entity> {
    let created = session.projects.add(&payload).await?;
    println!(":: Project added.");
    render::record(&created)?;
    Ok(created)
}

pub async fn cmd_projects_terminate(session: &Session, id: EntityId) -> Result<()> {
    session.projects.terminate(id.clone()).await?;
    println!(":: Project {id} terminated.");
    Ok(())
}

/// List assignments, optionally narrowed to one project or one employee.
pub async fn cmd_assignments_list(
    session: &Session,
    project: Option<EntityId>,
    employee: Option<EntityId>,
    format: OutputFormat,
) -> Result<Vec<Entity>> {
    let mirror = &session.assignments;
    let items = match (project, employee) {
        (Some(project), _) => mirror.fetch_for_project(project).await,
        (None, Some(employee)) => mirror.fetch_for_employee(employee).await,
        (None, None) => mirror.fetch_all().await,
    };
    ensure_loaded(mirror.last_error())?;
    render::assignments(&items, format)?;
    Ok(items)
}

pub async fn cmd_assignments_add(session: &Session, payload: Value) -> Result<Entity> {
    let created = session.assignments.add(&payload).await?;
    println!(":: Assignment added.");
    render::record(&created)?;
    Ok(created)
}

pub async fn cmd_assignments_terminate(session: &Session, id: EntityId) -> Result<()> {
    session.assignments.terminate(id.clone()).await?;
    println!(":: Assignment {id} terminated.");
    Ok(())
}

pub async fn cmd_assign(
    session: &Session,
    project: EntityId,
    employee: EntityId,
    format: OutputFormat,
) -> Result<Entity> {
    let returned = session
        .assignments
        .assign_employee_to_project(project.clone(), employee.clone())
        .await?;
    println!(":: Employee {employee} assigned to project {project}.");
    report_reload(session, format)?;
    Ok(returned)
}

pub async fn cmd_unassign(
    session: &Session,
    project: EntityId,
    employee: EntityId,
    format: OutputFormat,
) -> Result<Entity> {
    let returned = session
        .assignments
        .unassign_employee_from_project(project.clone(), employee.clone())
        .await?;
    println!(":: Employee {employee} unassigned from project {project}.");
    report_reload(session, format)?;
    Ok(returned)
}

/// The mutation already succeeded; a failed reload is only a warning.
fn report_reload(session: &Session, format: OutputFormat) -> Result<()> {
    match session.assignments.last_error_message() {
        Some(msg) => {
            tracing::warn!("Could not reload project assignments: {msg}");
            println!(":: Warning: project assignments could not be reloaded ({msg})");
            Ok(())
        }
        None => render::assignments(&session.assignments.items(), format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_trailer_is_table_only() {
        let info = PageInfo {
            page: 2,
            size: 10,
            total_items: 42,
            total_pages: 5,
        };

        assert_eq!(
            page_trailer(OutputFormat::Table, Some(info)).as_deref(),
            Some(":: Page 3 of 5 (42 employees, 10 per page)")
        );
        assert_eq!(page_trailer(OutputFormat::Json, Some(info)), None);
        assert_eq!(page_trailer(OutputFormat::Table, None), None);
    }
}
