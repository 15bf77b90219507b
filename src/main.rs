use std::path::PathBuf;

use contactbook::source::SqliteSource;
use contactbook::{list_basic_contacts, list_full_contacts};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut basic = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--basic" => {
                basic = true;
            }
            "--help" | "-h" => {
                println!("contactbook - dump a SQLite contact store as JSON");
                println!();
                println!("Usage: contactbook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contact store path (default: .data/contacts.db)");
                println!("  --basic             Deduplicated (name, phone) listing instead of full aggregates");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or_else(|| PathBuf::from(".data").join("contacts.db"));

    let source = match SqliteSource::open(&db_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    let json = if basic {
        list_basic_contacts(&source).map(|contacts| serde_json::to_string_pretty(&contacts))
    } else {
        list_full_contacts(&source).map(|contacts| serde_json::to_string_pretty(&contacts))
    };

    match json {
        Ok(Ok(text)) => println!("{}", text),
        Ok(Err(e)) => {
            eprintln!("Error serializing contacts: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error listing contacts: {}", e);
            std::process::exit(1);
        }
    }
}
