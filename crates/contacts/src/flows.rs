use std::io::{BufRead, Write};

use anyhow::Result;
use contacts_output::{format_contacts_table, TableOptions};
use contacts_store::ContactStore;
use contacts_types::{Contact, ContactBook, Field, SortDirection};
use tracing::{debug, info};

use crate::terminal::Terminal;

const EXIT_WORD: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Contact),
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(Contact),
    NotFound(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Contact),
    NotFound(String),
    Cancelled,
}

/// Sort state of the view loop when it was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub field: Field,
    pub direction: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            field: Field::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl ViewState {
    /// Same field flips direction; a new field starts ascending.
    pub fn select(self, field: Field) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }
}

fn show_table<R: BufRead, W: Write>(
    book: &ContactBook,
    term: &mut Terminal<R, W>,
    state: ViewState,
    caption: bool,
) -> Result<()> {
    let options = TableOptions {
        field: state.field,
        direction: state.direction,
        caption,
        color: term.color(),
    };
    term.say(&format_contacts_table(book, &options))?;
    Ok(())
}

pub fn add_contact<R: BufRead, W: Write>(
    book: &mut ContactBook,
    store: &ContactStore,
    term: &mut Terminal<R, W>,
) -> Result<AddOutcome> {
    let name = term.ask_field(Field::Name)?;
    let phone = term.ask_field(Field::Phone)?;
    let email = term.ask_field(Field::Email)?;

    if book.contains_name(&name) {
        debug!("Refusing duplicate contact {}", name);
        term.say(&format!("\n{} already exists with that name\n", name))?;
        return Ok(AddOutcome::Duplicate(name));
    }

    let contact = Contact::new(name, phone, email);
    book.push(contact.clone());
    store.persist(book)?;
    info!("Added contact {}", contact.name);
    term.say(&format!("\n{} added successfully\n", contact.name))?;
    Ok(AddOutcome::Added(contact))
}

pub fn edit_contact<R: BufRead, W: Write>(
    book: &mut ContactBook,
    store: &ContactStore,
    term: &mut Terminal<R, W>,
) -> Result<EditOutcome> {
    show_table(book, term, ViewState::default(), false)?;

    let name = term.ask("Enter exact name of contact to edit: ")?;
    if name == EXIT_WORD {
        return Ok(EditOutcome::Cancelled);
    }

    let Some(contact) = book.find_mut(Field::Name, &name) else {
        debug!("No contact named {:?} to edit", name);
        term.say(&format!("\ncould not find {}\n", name))?;
        return Ok(EditOutcome::NotFound(name));
    };

    for field in Field::ALL {
        if let Some(value) = term.ask_replacement(field)? {
            contact.set(field, value);
        }
    }
    let updated = contact.clone();

    store.persist(book)?;
    info!("Updated contact {} (now {})", name, updated.name);
    term.say(&format!("\n{} updated\n", name))?;
    Ok(EditOutcome::Updated(updated))
}

pub fn delete_contact<R: BufRead, W: Write>(
    book: &mut ContactBook,
    store: &ContactStore,
    term: &mut Terminal<R, W>,
) -> Result<DeleteOutcome> {
    show_table(book, term, ViewState::default(), false)?;

    let name = term.ask("Enter exact name of contact to delete: ")?;
    if name == EXIT_WORD {
        return Ok(DeleteOutcome::Cancelled);
    }

    let Some(removed) = book.remove_by_name(&name) else {
        debug!("No contact named {:?} to delete", name);
        term.say(&format!("\ncould not find {}\n", name))?;
        return Ok(DeleteOutcome::NotFound(name));
    };

    store.persist(book)?;
    info!("Deleted contact {}", name);
    term.say(&format!("\n{} deleted successfully\n", name))?;
    Ok(DeleteOutcome::Deleted(removed))
}

pub fn view_contacts<R: BufRead, W: Write>(
    book: &ContactBook,
    term: &mut Terminal<R, W>,
) -> Result<ViewState> {
    let mut state = ViewState::default();
    loop {
        show_table(book, term, state, true)?;

        let field = loop {
            let choice = term.ask("Enter choice: ")?;
            if choice == EXIT_WORD {
                return Ok(state);
            }
            match choice.parse::<Field>() {
                Ok(field) => break field,
                Err(_) => term.say("Invalid choice")?,
            }
        };

        state = state.select(field);
        debug!(
            "Sorting view by {} {}",
            state.field,
            state.direction.as_str()
        );
    }
}
