use std::sync::OnceLock;

use regex::Regex;

use crate::Field;

const NAME_PATTERN: &str = r"^[a-zA-Z ]+$";
const PHONE_PATTERN: &str = r"^[0-9]{11}$";
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";

fn pattern(field: Field) -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    static PHONE: OnceLock<Regex> = OnceLock::new();
    static EMAIL: OnceLock<Regex> = OnceLock::new();

    let (cell, source) = match field {
        Field::Name => (&NAME, NAME_PATTERN),
        Field::Phone => (&PHONE, PHONE_PATTERN),
        Field::Email => (&EMAIL, EMAIL_PATTERN),
    };
    // constant patterns, always compile
    cell.get_or_init(|| Regex::new(source).unwrap())
}

pub fn is_valid(field: Field, value: &str) -> bool {
    pattern(field).is_match(value)
}
