use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Optional field, but when a number is given it has to look like one:
/// an optional +7/8 prefix followed by exactly ten digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+7|8)?\d{10}$").expect("phone pattern is valid"));

/// A stored employee record. `id` is assigned by the store on insert and is
/// never taken from caller input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub sex: String,
    pub age: i32,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request body for create and update. Carries no `id`; a stray `id` key in
/// the body is silently dropped by serde, so the path/assigned id always wins.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct EmployeePayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub sex: String,
    #[validate(range(min = 0, message = "age cannot be negative"))]
    pub age: i32,
    #[validate(range(min = 0.0, message = "salary cannot be negative"))]
    pub salary: f64,
    #[serde(default)]
    #[validate(regex(path = "PHONE_RE", message = "invalid phone number"))]
    pub phone_number: Option<String>,
}

impl From<EmployeePayload> for Employee {
    fn from(payload: EmployeePayload) -> Self {
        // Placeholder id; the store overwrites it on insert/update.
        Employee {
            id: 0,
            name: payload.name,
            sex: payload.sex,
            age: payload.age,
            salary: payload.salary,
            phone_number: payload.phone_number,
        }
    }
}
