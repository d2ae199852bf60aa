//! Typed calls against the `employees` resource

use shared::models::{Employee, EmployeePayload};

use crate::{ClientResult, HttpClient};

/// Collection path, relative to the base URL
pub const EMPLOYEES_PATH: &str = "employees";

fn item_path(id: i64) -> String {
    format!("{}/{}", EMPLOYEES_PATH, id)
}

/// Employee API over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct EmployeeApi<H> {
    http: H,
}

impl<H: HttpClient> EmployeeApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// `GET /employees`, in server order
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.http.get(EMPLOYEES_PATH).await
    }

    /// `GET /employees/{id}`
    pub async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.http.get(&item_path(id)).await
    }

    /// `POST /employees`; the server assigns the id and echoes the record
    pub async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        self.http.post(EMPLOYEES_PATH, payload).await
    }

    /// `PUT /employees/{id}` with every field (whole-record replacement)
    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee> {
        self.http.put(&item_path(id), payload).await
    }

    /// `DELETE /employees/{id}`; any 2xx counts, whatever the body
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&item_path(id)).await
    }
}
