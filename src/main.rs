//! Shelfmark console front-end
//!
//! Reads one command per line from stdin and prints results as JSON.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfmark::{config::AppConfig, AppError, Library};

const HELP: &str = "\
commands:
  login <name> <password>
  logout
  search <topic...>
  borrow <item id>
  return <item id>
  loans
  add <title> | <author> | <genre>
  stock
  help
  quit";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfmark={}", config.logging.level).into());

    // Logs go to stderr so stdout stays machine-readable
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting Shelfmark v{}", env!("CARGO_PKG_VERSION"));

    let mut library = Library::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the Library Management System! Type 'help' for commands.");
    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = match line.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            _ => {
                let output = dispatch(&mut library, command, rest)
                    .unwrap_or_else(|e| to_json(&e.to_response()));
                println!("{output}");
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn dispatch(library: &mut Library, command: &str, args: &str) -> Result<String, AppError> {
    match command {
        "login" => {
            let mut parts = args.split_whitespace();
            let name = parts.next().unwrap_or_default();
            let password = parts.next().unwrap_or_default();
            library.authenticate(name, password).map(|p| to_json(&p))
        }
        "logout" => Ok(to_json(&library.logout())),
        "search" => library.search(args).map(|hits| to_json(&hits)),
        "borrow" => match parse_id(args) {
            Some(id) => library.borrow(id).map(|item| to_json(&item)),
            None => Ok("usage: borrow <item id>".to_string()),
        },
        "return" => match parse_id(args) {
            Some(id) => library.return_item(id).map(|item| to_json(&item)),
            None => Ok("usage: return <item id>".to_string()),
        },
        "loans" => library.list_loans().map(|loans| to_json(&loans)),
        "add" => {
            let fields: Vec<&str> = args.split('|').map(str::trim).collect();
            match fields.as_slice() {
                [title, author, genre] => library.add_item(title, author, genre).map(|item| to_json(&item)),
                _ => Err(AppError::InvalidItem("expected: add <title> | <author> | <genre>".to_string())),
            }
        }
        "stock" => library.list_stock().map(|stock| to_json(&stock)),
        other => Ok(format!("unknown command '{other}'\n{HELP}")),
    }
}

fn parse_id(arg: &str) -> Option<i32> {
    arg.trim().parse().ok()
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
