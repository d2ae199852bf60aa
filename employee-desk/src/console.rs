//! Interactive terminal front end
//!
//! Prints the employee table and the form state, then runs one menu action
//! per line of input until `0` or end of input.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use employee_client::{ClientError, EmployeeClient, Field, FormMode, HttpClient, format_table};

/// Menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Refresh,
    Submit,
    Edit,
    Delete,
    Reset,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Refresh),
            "2" => Some(MenuChoice::Submit),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Reset),
            "0" | "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Line-based console over any reader / writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// `None` at end of input
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Empty input keeps `default`
    pub fn prompt_with_default(&mut self, label: &str, default: &str) -> io::Result<Option<String>> {
        let prompt = if default.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, default)
        };
        Ok(self.prompt(&prompt)?.map(|input| {
            if input.is_empty() {
                default.to_string()
            } else {
                input
            }
        }))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn show<H: HttpClient>(&mut self, client: &EmployeeClient<H>) -> io::Result<()> {
        self.line("")?;
        write!(self.output, "{}", format_table(client.rows()))?;
        match client.mode() {
            FormMode::Create => self.line("Form: new employee")?,
            FormMode::Update(id) => self.line(format!("Form: editing employee {}", id))?,
        }
        if let Some(notice) = client.notice() {
            self.line(format!("! {}", notice))?;
        }
        Ok(())
    }

    fn menu(&mut self) -> io::Result<()> {
        self.line("")?;
        self.line("1. Refresh list")?;
        self.line("2. Fill form and submit")?;
        self.line("3. Edit employee")?;
        self.line("4. Delete employee")?;
        self.line("5. Reset form")?;
        self.line("0. Exit")
    }

    /// Prompt every field with its current form value as default
    ///
    /// Returns `false` at end of input.
    async fn fill_and_submit<H: HttpClient>(
        &mut self,
        client: &mut EmployeeClient<H>,
    ) -> io::Result<bool> {
        for field in Field::ALL {
            let current = client.form().fields.get(field).to_string();
            let Some(value) = self.prompt_with_default(field.label(), &current)? else {
                return Ok(false);
            };
            client.set_field(field, value);
        }

        match client.submit_form().await {
            Ok(emp) => self.line(format!("Saved employee {}", emp.id))?,
            // nothing was sent; the form keeps what was typed
            Err(ClientError::InvalidInput(e)) => self.line(format!("✗ {}", e))?,
            Err(_) => {}
        }
        Ok(true)
    }

    fn prompt_id(&mut self, prompt: &str) -> io::Result<Option<Option<i64>>> {
        let Some(input) = self.prompt(prompt)? else {
            return Ok(None);
        };
        match input.parse::<i64>() {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                self.line(format!("✗ Invalid id: {:?}", input))?;
                Ok(Some(None))
            }
        }
    }
}

/// Run the menu loop until quit or end of input
pub async fn run<H, R, W>(
    client: &mut EmployeeClient<H>,
    console: &mut Console<R, W>,
) -> io::Result<()>
where
    H: HttpClient,
    R: BufRead,
    W: Write,
{
    let _ = client.load_employees().await;

    loop {
        console.show(client)?;
        console.menu()?;

        let Some(input) = console.prompt("Enter choice (0-5): ")? else {
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Quit) => break,
            Some(MenuChoice::Refresh) => {
                let _ = client.load_employees().await;
            }
            Some(MenuChoice::Submit) => {
                if !console.fill_and_submit(client).await? {
                    break;
                }
            }
            Some(MenuChoice::Edit) => match console.prompt_id("Employee ID to edit: ")? {
                None => break,
                Some(None) => {}
                Some(Some(id)) => {
                    if client.edit_employee(id).await.is_ok()
                        && !console.fill_and_submit(client).await?
                    {
                        break;
                    }
                }
            },
            Some(MenuChoice::Delete) => match console.prompt_id("Employee ID to delete: ")? {
                None => break,
                Some(None) => {}
                Some(Some(id)) => {
                    let _ = client.delete_employee(id).await;
                }
            },
            Some(MenuChoice::Reset) => client.reset_form(),
            None => console.line("✗ Invalid choice")?,
        }
    }

    console.line("Goodbye!")
}
