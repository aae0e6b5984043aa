//! Interactive menu over a `ContactStore`
//!
//! The loop reads one menu choice per iteration, collects the fields that
//! choice needs, calls the store and prints the outcome. Only option 5 (or
//! the input stream closing) leaves the loop. Bad menu choices and
//! non-numeric ids are reported and the menu is shown again; storage errors
//! are returned to the caller.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use tracing::{debug, info};

use crate::Result;
use crate::contact::NewContact;
use crate::storage::ContactStore;
use crate::ui::{self, Theme};

const MENU_RULE_WIDTH: usize = 24;
const LIST_RULE_WIDTH: usize = 25;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Map a menu line to a choice. Only the exact strings `"1"`..`"5"`
    /// are accepted; padded input such as `" 1"` is not a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<S, R, W> {
    store: S,
    input: R,
    output: W,
    theme: Theme,
}

impl<S, R, W> Shell<S, R, W>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            theme: ui::theme().clone(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Ensure the schema, then run the menu until the user exits.
    pub fn run(&mut self) -> Result<()> {
        self.store.ensure_schema()?;
        info!("agenda shell started");

        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                self.say_goodbye()?;
                break;
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu input");

            let flow = match choice {
                Some(MenuChoice::Add) => self.add_contact()?,
                Some(MenuChoice::List) => self.list_contacts()?,
                Some(MenuChoice::Search) => self.search_contacts()?,
                Some(MenuChoice::Delete) => self.delete_contact()?,
                Some(MenuChoice::Exit) => {
                    self.say_goodbye()?;
                    Flow::Exit
                }
                None => {
                    ui::reject(
                        &mut self.output,
                        &self.theme,
                        "Invalid option! Please choose an option from 1 to 5.",
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "   --- Agenda Menu ---")?;
        writeln!(self.output, "1 - Add contact")?;
        writeln!(self.output, "2 - List contacts")?;
        writeln!(self.output, "3 - Search contact by name")?;
        writeln!(self.output, "4 - Remove contact by ID")?;
        writeln!(self.output, "5 - Exit")?;
        ui::rule(&mut self.output, &self.theme, MENU_RULE_WIDTH)?;
        Ok(())
    }

    /// Print `label` and read one line without its terminator.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn add_contact(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else {
            return self.input_closed();
        };
        let Some(phone) = self.prompt("Phone: ")? else {
            return self.input_closed();
        };
        let Some(national_id) = self.prompt("National ID (optional, e.g. 123.456.789-00): ")?
        else {
            return self.input_closed();
        };
        let Some(address) = self.prompt("Address (optional, e.g. 12 Main St, Springfield): ")?
        else {
            return self.input_closed();
        };

        let contact = NewContact {
            name,
            phone,
            national_id,
            address,
        };
        let id = self.store.add(&contact)?;
        debug!(id, "added contact from shell");
        ui::success(&mut self.output, &self.theme, "Contact added successfully!")?;
        Ok(Flow::Continue)
    }

    fn list_contacts(&mut self) -> Result<Flow> {
        let contacts = self.store.list_all()?;
        if contacts.is_empty() {
            ui::info(&mut self.output, &self.theme, "No contacts found.")?;
            return Ok(Flow::Continue);
        }

        ui::section(&mut self.output, &self.theme, "Contact List")?;
        for contact in &contacts {
            writeln!(self.output, "{}", contact)?;
        }
        ui::rule(&mut self.output, &self.theme, LIST_RULE_WIDTH)?;
        Ok(Flow::Continue)
    }

    fn search_contacts(&mut self) -> Result<Flow> {
        let Some(fragment) = self.prompt("Enter the name (or part of it) to search: ")? else {
            return self.input_closed();
        };

        let results = self.store.search_by_name(&fragment)?;
        if results.is_empty() {
            ui::info(
                &mut self.output,
                &self.theme,
                &format!("No contact found with the name '{}'.", fragment),
            )?;
            return Ok(Flow::Continue);
        }

        let title = format!("Search results for '{}'", fragment);
        ui::section(&mut self.output, &self.theme, &title)?;
        for contact in &results {
            writeln!(self.output, "{}", contact)?;
        }
        ui::rule(&mut self.output, &self.theme, title.chars().count() + 8)?;
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Enter the ID of the contact to remove: ")? else {
            return self.input_closed();
        };

        let id = match raw.trim().parse::<i64>() {
            Ok(id) => Some(id),
            // Out of i64 range: still an integer, but no row can carry it.
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                None
            }
            Err(_) => {
                ui::warn(
                    &mut self.output,
                    &self.theme,
                    "Invalid ID. Please enter an integer.",
                )?;
                return Ok(Flow::Continue);
            }
        };

        // The confirmation does not depend on whether a row matched.
        if let Some(id) = id {
            let removed = self.store.delete_by_id(id)?;
            debug!(id, removed, "delete from shell");
        } else {
            debug!(%raw, "delete id out of range, nothing to remove");
        }
        ui::success(&mut self.output, &self.theme, "Contact removed successfully!")?;
        Ok(Flow::Continue)
    }

    fn input_closed(&mut self) -> Result<Flow> {
        self.say_goodbye()?;
        Ok(Flow::Exit)
    }

    fn say_goodbye(&mut self) -> Result<()> {
        ui::farewell(&mut self.output, &self.theme, "Leaving the agenda. See you later!")?;
        Ok(())
    }
}
