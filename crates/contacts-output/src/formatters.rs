use colored::Colorize;
use contacts_types::*;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

pub const MENU_TEXT: &str = "1. Add contact
2. Edit contact
3. Delete contact
4. View contacts
5. Exit
";

pub fn format_title(field: Field, direction: SortDirection) -> String {
    format!(
        "Contacts List (Sorted by {} {})",
        field,
        direction.as_str()
    )
}

pub fn format_sort_caption() -> String {
    let fields: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
    format!(
        "Sort by: {} or type \"exit\" to return\n\
         To sort by a field, type the field name\n\
         repeat the field name to sort in descending order",
        fields.join(", ")
    )
}

#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub field: Field,
    pub direction: SortDirection,
    pub caption: bool,
    pub color: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            field: Field::Name,
            direction: SortDirection::Ascending,
            caption: false,
            color: true,
        }
    }
}

pub fn format_contacts_table(book: &ContactBook, options: &TableOptions) -> String {
    let mut builder = Builder::default();
    builder.push_record(Field::ALL.iter().map(|f| f.as_str().to_string()));
    for contact in book.sorted(options.field, options.direction) {
        builder.push_record(Field::ALL.iter().map(|f| contact.get(*f).to_string()));
    }

    let mut table = builder.build();
    table.with(Style::modern()).with(Alignment::center());

    let title = format_title(options.field, options.direction);
    let mut lines = vec![if options.color {
        title.bold().to_string()
    } else {
        title
    }];
    lines.push(table.to_string());

    if options.caption {
        let caption = format_sort_caption();
        lines.push(if options.color {
            caption.dimmed().to_string()
        } else {
            caption
        });
    }

    lines.join("\n")
}
