//! Console Module
//!
//! Menu-driven front end over one `Session` per record kind.
//!
//! Reads from any `BufRead` and writes to any `Write`, so a whole session
//! can be scripted. End of input acts like "Back" in a kind menu and like
//! "Exit" in the main menu.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::domain::{Credit, Deposit, Figures, Loan};
use crate::error::{Result, VaultError};
use crate::store::{Field, FieldValue, Query, Record, SearchOutcome, SortBy, ValueKind};
use crate::session::Session;

/// What a record kind needs to be driven from the console
pub trait ConsoleRecord: Record + Display + Figures {}

impl<R: Record + Display + Figures> ConsoleRecord for R {}

/// Interactive console over an input and an output stream
pub struct Console<B, W> {
    input: B,
    output: W,
}

impl<B: BufRead, W: Write> Console<B, W> {
    pub fn new(input: B, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (B, W) {
        (self.input, self.output)
    }

    /// Run the main menu until "Exit" or end of input
    pub fn run(&mut self, config: &Config) -> Result<()> {
        loop {
            writeln!(self.output, "\n=== finvault ===")?;
            writeln!(self.output, "1) Loans")?;
            writeln!(self.output, "2) Deposits")?;
            writeln!(self.output, "3) Credits")?;
            writeln!(self.output, "4) Exit")?;

            let choice = match self.read_line("Choice: ")? {
                Some(line) => line,
                None => break,
            };

            match choice.trim() {
                "1" => self.run_kind::<Loan>(config)?,
                "2" => self.run_kind::<Deposit>(config)?,
                "3" => self.run_kind::<Credit>(config)?,
                "4" => break,
                _ => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    /// Run one kind's menu: open its session, loop, save on the way out
    pub fn run_kind<R: ConsoleRecord>(&mut self, config: &Config) -> Result<()> {
        let mut session = Session::<R>::open(config)?;
        let title = title_of::<R>();

        loop {
            writeln!(self.output, "\n[{}]", title)?;
            writeln!(self.output, "1) Add {}", R::KIND)?;
            writeln!(self.output, "2) View {}s", R::KIND)?;
            writeln!(self.output, "3) Sort {}s", R::KIND)?;
            writeln!(self.output, "4) Search {}", R::KIND)?;
            writeln!(self.output, "5) Show recent actions")?;
            writeln!(self.output, "6) Update {}", R::KIND)?;
            writeln!(self.output, "7) Delete {}", R::KIND)?;
            writeln!(self.output, "8) Load sample data")?;
            writeln!(self.output, "9) Reset data")?;
            writeln!(self.output, "10) Back")?;

            let choice = match self.read_line("Choice: ")? {
                Some(line) => line,
                None => break,
            };

            match choice.trim() {
                "1" => self.add(&mut session)?,
                "2" => self.view(&session)?,
                "3" => self.sort(&mut session)?,
                "4" => self.search(&mut session)?,
                "5" => self.recent(&mut session)?,
                "6" => self.update(&mut session)?,
                "7" => self.delete(&mut session)?,
                "8" => match session.load_sample() {
                    Ok(count) => writeln!(self.output, "Loaded {} sample {}s.", count, R::KIND)?,
                    Err(e) => writeln!(self.output, "Could not load sample data: {}", e)?,
                },
                "9" => {
                    if !session.reset() {
                        writeln!(self.output, "Warning: the empty data file could not be written.")?;
                    }
                    writeln!(self.output, "All {} data reset.", R::KIND)?;
                }
                "10" => break,
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }

        if !session.close() {
            writeln!(self.output, "Warning: could not save {}s.", R::KIND)?;
        }
        Ok(())
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn add<R: ConsoleRecord>(&mut self, session: &mut Session<R>) -> Result<()> {
        let name = match self.read_name("Name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        let mut values = Vec::with_capacity(R::Field::ALL.len());
        for field in R::Field::ALL {
            match self.read_value(field.label(), field.kind(), None)? {
                Some(value) => values.push(value),
                None => return Ok(()),
            }
        }

        let record = match R::from_values(name, &values) {
            Ok(record) => record,
            Err(e) => {
                writeln!(self.output, "Invalid {}: {}", R::KIND, e)?;
                return Ok(());
            }
        };

        let figures = record.figures();
        match session.add(record) {
            Ok(_) => {
                for (label, value) in figures {
                    writeln!(self.output, "{}: {:.2}", label, value)?;
                }
            }
            Err(VaultError::DuplicateKey(name)) => {
                writeln!(self.output, "A {} named '{}' already exists.", R::KIND, name)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn view<R: ConsoleRecord>(&mut self, session: &Session<R>) -> Result<()> {
        writeln!(self.output, "\n--- {} ---", title_of::<R>())?;
        if session.store().is_empty() {
            writeln!(self.output, "No {}s.", R::KIND)?;
        }
        for record in session.view() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn sort<R: ConsoleRecord>(&mut self, session: &mut Session<R>) -> Result<()> {
        let by = match self.read_field_choice::<R>("Sort by:")? {
            Some(by) => by,
            None => {
                writeln!(self.output, "Invalid sort option.")?;
                return Ok(());
            }
        };

        session.sort_view(by);
        writeln!(self.output, "Sorted by {}.", by.label())?;
        Ok(())
    }

    fn search<R: ConsoleRecord>(&mut self, session: &mut Session<R>) -> Result<()> {
        if session.store().is_empty() {
            writeln!(self.output, "No {}s to search.", R::KIND)?;
            return Ok(());
        }

        let by = match self.read_field_choice::<R>("Search by:")? {
            Some(by) => by,
            None => {
                writeln!(self.output, "Invalid search option.")?;
                return Ok(());
            }
        };

        let query = match by {
            SortBy::Key => match self.read_name("Enter name: ")? {
                Some(name) => Query::Key(name),
                None => return Ok(()),
            },
            SortBy::Field(field) => {
                match self.read_value(field.label(), field.kind(), None)? {
                    Some(value) => Query::Value(field, value),
                    None => return Ok(()),
                }
            }
        };

        match session.search(&query) {
            SearchOutcome::Found(positions) => {
                for pos in positions {
                    if let Some(record) = session.store().get(pos) {
                        writeln!(self.output, "Found: {}", record)?;
                    }
                }
            }
            SearchOutcome::NotFound => {
                writeln!(self.output, "No {}s with that {}.", R::KIND, by.label())?;
            }
            SearchOutcome::EmptyStore => {
                writeln!(self.output, "No {}s to search.", R::KIND)?;
            }
        }
        Ok(())
    }

    fn recent<R: ConsoleRecord>(&mut self, session: &mut Session<R>) -> Result<()> {
        writeln!(self.output, "\nRecent actions:")?;
        for action in session.recent_actions() {
            writeln!(self.output, "{}", action)?;
        }
        Ok(())
    }

    fn update<R: ConsoleRecord>(&mut self, session: &mut Session<R>) -> Result<()> {
        let name = match self.read_name("Enter name to update: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        let current = match session.store().get_by_key(&name) {
            Some(record) => record.values(),
            None => {
                writeln!(self.output, "Not found.")?;
                return Ok(());
            }
        };

        let mut values = Vec::with_capacity(current.len());
        for (field, old) in R::Field::ALL.iter().zip(current) {
            let label = format!("New {}", field.name());
            match self.read_value(&label, field.kind(), Some(old))? {
                Some(value) => values.push(value),
                None => return Ok(()),
            }
        }

        let replacement = match R::from_values(name.clone(), &values) {
            Ok(record) => record,
            Err(e) => {
                writeln!(self.output, "Invalid {}: {}", R::KIND, e)?;
                return Ok(());
            }
        };

        session.update(&name, replacement)?;
        writeln!(self.output, "Updated.")?;
        Ok(())
    }

    fn delete<R: ConsoleRecord>(&mut self, session: &mut Session<R>) -> Result<()> {
        let name = match self.read_name("Enter name to delete: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        match session.delete(&name) {
            Ok(_) => writeln!(self.output, "Deleted.")?,
            Err(VaultError::KeyNotFound(_)) => writeln!(self.output, "Not found.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Print `prompt` and read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a non-empty name; runs of whitespace collapse to one space
    fn read_name(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            let name = line.split_whitespace().collect::<Vec<_>>().join(" ");
            if !name.is_empty() {
                return Ok(Some(name));
            }
            writeln!(self.output, "Name cannot be empty.")?;
        }
    }

    /// Read a value of `kind`, re-prompting on bad input
    ///
    /// With `current` set, the prompt shows it and an empty answer keeps it.
    fn read_value(
        &mut self,
        label: &str,
        kind: ValueKind,
        current: Option<FieldValue>,
    ) -> Result<Option<FieldValue>> {
        let prompt = match current {
            Some(value) => format!("{} ({}): ", label, value),
            None => format!("{}: ", label),
        };

        loop {
            let line = match self.read_line(&prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            if line.trim().is_empty() {
                if let Some(value) = current {
                    return Ok(Some(value));
                }
            }

            match FieldValue::parse(kind, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Offer "Name" plus every field; `None` for an invalid choice or EOF
    fn read_field_choice<R: ConsoleRecord>(&mut self, heading: &str) -> Result<Option<SortBy<R::Field>>> {
        writeln!(self.output, "\n{}", heading)?;
        writeln!(self.output, "1) Name")?;
        for (idx, field) in R::Field::ALL.iter().enumerate() {
            writeln!(self.output, "{}) {}", idx + 2, field.label())?;
        }

        let line = match self.read_line("Choice: ")? {
            Some(line) => line,
            None => return Ok(None),
        };

        Ok(match line.trim().parse::<usize>() {
            Ok(1) => Some(SortBy::Key),
            Ok(n) if n >= 2 => R::Field::ALL.get(n - 2).map(|field| SortBy::Field(*field)),
            _ => None,
        })
    }
}

/// "deposit" → "Deposits"
fn title_of<R: Record>() -> String {
    let mut chars = R::KIND.chars();
    match chars.next() {
        Some(first) => format!("{}{}s", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
