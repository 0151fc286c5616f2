use ancestry::document::{self, describe, element_path};
use ancestry::locator::Locator;
use ancestry::{find_ancestor, Error};
use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ancestry")]
#[command(about = "Find the nearest ancestor of an element matching .class, #id or name criteria")]
struct Cli {
    /// XML or XHTML document to search
    #[arg(short, long)]
    file: PathBuf,

    /// Start element: FIELD=VALUE, .class or #id
    #[arg(short, long)]
    start: String,

    /// Whitespace-separated criteria, e.g. ".panel #main username"
    #[arg(short, long)]
    criteria: String,

    /// Maximum evaluation rounds; zero or negative uses the default of 10
    #[arg(short, long, allow_hyphen_values = true)]
    depth: Option<i64>,

    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<Option<String>, Error> {
    let locator = Locator::parse(&cli.start)?;
    let text = document::load(&cli.file)?;
    let doc = document::parse(&text)?;

    let start = locator
        .find_first(&doc)
        .ok_or_else(|| Error::StartNotFound(locator.to_string()))?;
    debug!(start = %element_path(start), "resolved start element");

    Ok(find_ancestor(Some(start), &cli.criteria, cli.depth).map(|node| {
        debug!(found = %element_path(node), "ancestor found");
        describe(node)
    }))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(&cli) {
        Ok(Some(tag)) => {
            println!("{}", tag);
            exit(0);
        }
        Ok(None) => {
            warn!(criteria = %cli.criteria, "no matching ancestor");
            exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(2);
        }
    }
}
