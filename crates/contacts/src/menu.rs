use std::io::{BufRead, Write};

use anyhow::Result;
use contacts_output::MENU_TEXT;
use contacts_store::ContactStore;
use contacts_types::ContactBook;
use tracing::debug;

use crate::flows::{add_contact, delete_contact, edit_contact, view_contacts};
use crate::terminal::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    View,
    Exit,
}

impl MenuChoice {
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Edit),
            "3" => Some(MenuChoice::Delete),
            "4" => Some(MenuChoice::View),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs the main menu until the user picks Exit, handing the book back.
pub fn run<R: BufRead, W: Write>(
    mut book: ContactBook,
    store: &ContactStore,
    term: &mut Terminal<R, W>,
) -> Result<ContactBook> {
    loop {
        term.say(MENU_TEXT)?;
        let input = term.ask("Enter choice: ")?;

        match MenuChoice::from_input(&input) {
            Some(MenuChoice::Add) => {
                add_contact(&mut book, store, term)?;
            }
            Some(MenuChoice::Edit) => {
                edit_contact(&mut book, store, term)?;
            }
            Some(MenuChoice::Delete) => {
                delete_contact(&mut book, store, term)?;
            }
            Some(MenuChoice::View) => {
                view_contacts(&book, term)?;
            }
            Some(MenuChoice::Exit) => {
                term.say("Goodbye!")?;
                return Ok(book);
            }
            None => debug!("Ignoring menu input {:?}", input),
        }
    }
}
