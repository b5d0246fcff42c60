use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contacts_config::{get_config_path, get_log_dir, get_log_path, Config};
use contacts_store::ContactStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod flows;
mod menu;
mod terminal;

use terminal::Terminal;

const MAIN_HELP: &str = r#"Keep a small address book of names, phone numbers and email addresses in a
JSON file.

Run without a subcommand to open the interactive menu. Contacts are saved
after every add, edit and delete."#;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, value_name = "FILE", help = "Contacts file (overrides the config)")]
    data: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print config file location and contents.")]
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config) = cli.command {
        return handle_config();
    }

    let config = Config::load()?;
    init_logging(&config)?;

    let store = ContactStore::new(cli.data.unwrap_or_else(|| config.store_path()));
    let book = store.load()?;
    info!(
        "Loaded {} contacts from {}",
        book.len(),
        store.path().display()
    );

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let mut term = Terminal::new(std::io::stdin().lock(), std::io::stdout()).with_color(color);
    menu::run(book, &store, &mut term)?;

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    std::fs::create_dir_all(get_log_dir())?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_path())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn handle_config() -> Result<()> {
    let config_path = get_config_path();
    println!("Config file: {}", config_path.display());
    println!();

    if config_path.exists() {
        println!("{}", std::fs::read_to_string(&config_path)?);
    } else {
        println!("(file does not exist, using defaults)");
    }
    Ok(())
}
