//! Table rendering
//!
//! Pure functions from fetched records to table rows. Rows are rebuilt from
//! scratch on every list fetch.

use shared::models::Employee;

/// Table header, in display order
pub const COLUMNS: [&str; 9] = [
    "ID",
    "Name",
    "Age",
    "Position",
    "Department",
    "Email",
    "Salary",
    "Experience",
    "Actions",
];

/// Row-scoped action, parameterized by the row's id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(i64),
    Delete(i64),
}

impl RowAction {
    pub fn id(&self) -> i64 {
        match self {
            RowAction::Edit(id) | RowAction::Delete(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "Edit",
            RowAction::Delete(_) => "Delete",
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub id: i64,
    /// Display text for every column but `Actions`
    pub cells: Vec<String>,
    pub actions: [RowAction; 2],
}

impl EmployeeRow {
    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            id: emp.id,
            cells: vec![
                emp.id.to_string(),
                emp.name.clone(),
                emp.age.to_string(),
                emp.position.clone(),
                emp.department.clone(),
                emp.email.clone(),
                emp.salary.to_string(),
                emp.experience.to_string(),
            ],
            actions: [RowAction::Edit(emp.id), RowAction::Delete(emp.id)],
        }
    }
}

/// One row per record, in the order received
pub fn render_rows(employees: &[Employee]) -> Vec<EmployeeRow> {
    employees.iter().map(EmployeeRow::from_employee).collect()
}

/// Plain-text table for terminal output
pub fn format_table(rows: &[EmployeeRow]) -> String {
    let actions: Vec<String> = rows
        .iter()
        .map(|row| {
            row.actions
                .iter()
                .map(|a| format!("[{}]", a.label()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for (row, action) in rows.iter().zip(&actions) {
        for (i, cell) in row.cells.iter().chain(std::iter::once(action)).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(COLUMNS.iter().copied(), &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');

    if rows.is_empty() {
        out.push_str("(no employees)\n");
        return out;
    }

    for (row, action) in rows.iter().zip(&actions) {
        let cells = row
            .cells
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(action.as_str()));
        out.push_str(&format_line(cells, &widths));
        out.push('\n');
    }
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
