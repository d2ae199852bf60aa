//! Edit form state
//!
//! The form holds raw text for every input plus the id of the record being
//! edited. An empty id means the next submit creates a record; a present id
//! means it replaces that record.

use std::fmt;

use shared::models::{Employee, EmployeePayload};
use thiserror::Error;

/// One input of the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Position,
    Department,
    Email,
    Salary,
    Experience,
}

impl Field {
    /// Form order
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Age,
        Field::Position,
        Field::Department,
        Field::Email,
        Field::Salary,
        Field::Experience,
    ];

    /// JSON key of the field
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Position => "position",
            Field::Department => "department",
            Field::Email => "email",
            Field::Salary => "salary",
            Field::Experience => "experience",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Position => "Position",
            Field::Department => "Department",
            Field::Email => "Email",
            Field::Salary => "Salary",
            Field::Experience => "Experience",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a numeric input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Missing,
    NotAnInteger,
    NotANumber,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => f.write_str("a value is required"),
            InvalidReason::NotAnInteger => f.write_str("expected a whole number"),
            InvalidReason::NotANumber => f.write_str("expected a finite number"),
        }
    }
}

/// A form input that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {}: {reason} (got {input:?})", .field.label().to_lowercase())]
pub struct ValidationError {
    pub field: Field,
    pub reason: InvalidReason,
    pub input: String,
}

impl ValidationError {
    fn new(field: Field, reason: InvalidReason, input: &str) -> Self {
        Self {
            field,
            reason,
            input: input.to_string(),
        }
    }
}

/// Raw text of every form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub age: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub salary: String,
    pub experience: String,
}

impl EmployeeFields {
    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            name: emp.name.clone(),
            age: emp.age.to_string(),
            position: emp.position.clone(),
            department: emp.department.clone(),
            email: emp.email.clone(),
            salary: emp.salary.to_string(),
            experience: emp.experience.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Position => &self.position,
            Field::Department => &self.department,
            Field::Email => &self.email,
            Field::Salary => &self.salary,
            Field::Experience => &self.experience,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Position => &mut self.position,
            Field::Department => &mut self.department,
            Field::Email => &mut self.email,
            Field::Salary => &mut self.salary,
            Field::Experience => &mut self.experience,
        };
        *slot = value.into();
    }

    /// Parse into a payload, failing on the first invalid numeric input
    ///
    /// Text inputs are sent as typed.
    pub fn parse(&self) -> Result<EmployeePayload, ValidationError> {
        Ok(EmployeePayload {
            name: self.name.clone(),
            age: parse_int(Field::Age, &self.age)?,
            position: self.position.clone(),
            department: self.department.clone(),
            email: self.email.clone(),
            salary: parse_number(Field::Salary, &self.salary)?,
            experience: parse_int(Field::Experience, &self.experience)?,
        })
    }
}

fn parse_int(field: Field, raw: &str) -> Result<i32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, InvalidReason::Missing, raw));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| ValidationError::new(field, InvalidReason::NotAnInteger, raw))
}

fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, InvalidReason::Missing, raw));
    }
    // f64::from_str accepts "NaN" and "inf"
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::new(field, InvalidReason::NotANumber, raw)),
    }
}

/// Which request the next submit issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

/// A parsed, ready-to-send submit
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(EmployeePayload),
    Update { id: i64, payload: EmployeePayload },
}

/// The edit buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub fields: EmployeeFields,
    editing_id: Option<i64>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match self.editing_id {
            Some(id) => FormMode::Update(id),
            None => FormMode::Create,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Copy a fetched record into the form, switching to update mode
    pub fn populate(&mut self, emp: &Employee) {
        self.fields = EmployeeFields::from_employee(emp);
        self.editing_id = Some(emp.id);
    }

    /// Clear every input and the edit buffer id
    pub fn reset(&mut self) {
        self.fields = EmployeeFields::default();
        self.editing_id = None;
    }

    pub fn submission(&self) -> Result<Submission, ValidationError> {
        let payload = self.fields.parse()?;
        Ok(match self.editing_id {
            Some(id) => Submission::Update { id, payload },
            None => Submission::Create(payload),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set(Field::Name, "Ann");
        form.set(Field::Age, "30");
        form.set(Field::Position, "Eng");
        form.set(Field::Department, "R&D");
        form.set(Field::Email, "a@x.com");
        form.set(Field::Salary, "90000");
        form.set(Field::Experience, "5");
        form
    }

    fn stored() -> Employee {
        Employee {
            id: 3,
            name: "Bo".into(),
            age: 41,
            position: "Lead".into(),
            department: "Ops".into(),
            email: "bo@x.com".into(),
            salary: 1234.5,
            experience: 12,
        }
    }

    #[test]
    fn test_empty_id_submits_create() {
        let form = filled();
        assert_eq!(form.mode(), FormMode::Create);
        match form.submission().unwrap() {
            Submission::Create(payload) => {
                assert_eq!(payload.name, "Ann");
                assert_eq!(payload.age, 30);
                assert_eq!(payload.salary, 90000.0);
                assert_eq!(payload.experience, 5);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_populate_switches_to_update() {
        let mut form = filled();
        form.populate(&stored());
        assert_eq!(form.mode(), FormMode::Update(3));
        assert_eq!(form.fields.get(Field::Salary), "1234.5");
        assert_eq!(
            form.submission().unwrap(),
            Submission::Update {
                id: 3,
                payload: stored().payload()
            }
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.populate(&stored());
        form.reset();
        assert_eq!(form, EmployeeForm::default());
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let mut form = filled();
        form.set(Field::Age, "thirty");
        let err = form.submission().unwrap_err();
        assert_eq!(err.field, Field::Age);
        assert_eq!(err.reason, InvalidReason::NotAnInteger);
        assert_eq!(err.input, "thirty");
    }

    #[test]
    fn test_fractional_experience_is_rejected() {
        let mut form = filled();
        form.set(Field::Experience, "2.5");
        let err = form.submission().unwrap_err();
        assert_eq!(err.field, Field::Experience);
        assert_eq!(err.reason, InvalidReason::NotAnInteger);
    }

    #[test]
    fn test_nan_salary_is_rejected() {
        for raw in ["NaN", "inf", "-infinity", "abc"] {
            let mut form = filled();
            form.set(Field::Salary, raw);
            let err = form.submission().unwrap_err();
            assert_eq!(err.field, Field::Salary, "input {raw}");
            assert_eq!(err.reason, InvalidReason::NotANumber, "input {raw}");
        }
    }

    #[test]
    fn test_blank_number_is_missing() {
        let mut form = filled();
        form.set(Field::Salary, "   ");
        let err = form.submission().unwrap_err();
        assert_eq!(err.reason, InvalidReason::Missing);
        assert_eq!(err.to_string(), r#"invalid salary: a value is required (got "   ")"#);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let mut form = filled();
        form.set(Field::Age, " 30 ");
        form.set(Field::Salary, "75000.25\n");
        let payload = form.fields.parse().unwrap();
        assert_eq!(payload.age, 30);
        assert_eq!(payload.salary, 75000.25);
    }

    #[test]
    fn test_get_set_roundtrip_every_field() {
        let mut fields = EmployeeFields::default();
        for field in Field::ALL {
            fields.set(field, field.label());
        }
        for field in Field::ALL {
            assert_eq!(fields.get(field), field.label());
        }
    }
}
