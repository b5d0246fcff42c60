mod book;
mod contact;
mod validate;

pub use book::*;
pub use contact::*;
pub use validate::*;

pub const DEFAULT_STORE_PATH: &str = "data.json";
