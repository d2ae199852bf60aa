//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as stored server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned, immutable once created
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub department: String,
    pub email: String,
    pub salary: f64,
    /// Years of experience
    pub experience: i32,
}

impl Employee {
    /// The record's fields without its identifier
    pub fn payload(&self) -> EmployeePayload {
        EmployeePayload {
            name: self.name.clone(),
            age: self.age,
            position: self.position.clone(),
            department: self.department.clone(),
            email: self.email.clone(),
            salary: self.salary,
            experience: self.experience,
        }
    }
}

/// Create / update employee payload
///
/// Always carries every field: update is a whole-record replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub age: i32,
    pub position: String,
    pub department: String,
    pub email: String,
    pub salary: f64,
    pub experience: i32,
}

impl EmployeePayload {
    /// Attach a server-assigned id
    pub fn with_id(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            position: self.position,
            department: self.department,
            email: self.email,
            salary: self.salary,
            experience: self.experience,
        }
    }
}
