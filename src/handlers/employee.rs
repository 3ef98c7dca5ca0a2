use actix_web::{web, HttpResponse};
use log::info;
use serde::Serialize;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::employee::{Employee, EmployeePayload};
use crate::storage::EmployeeStore;

#[derive(Serialize)]
struct EmployeeList {
    employees: Vec<Employee>,
    count: usize,
}

// The id is pulled out as a raw string so a bad token maps to InvalidId
// instead of the extractor's generic 404/400.
fn parse_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse::<u32>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let employee = store.insert(payload.into());
    info!("employee created: id={} name={}", employee.id, employee.name);

    Ok(HttpResponse::Created().json(employee))
}

pub async fn list_employees(store: web::Data<dyn EmployeeStore>) -> HttpResponse {
    let employees = store.list();

    HttpResponse::Ok().json(EmployeeList {
        count: employees.len(),
        employees,
    })
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let employee = store.get(id)?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let payload = payload.into_inner();
    payload.validate()?;

    let employee = store.update(id, payload.into())?;
    info!("employee updated: id={}", id);

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    store.delete(id)?;
    info!("employee deleted: id={}", id);

    Ok(HttpResponse::NoContent().finish())
}
