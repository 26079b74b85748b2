mod cli;
mod error;
mod output;

use std::path::Path;

use apps_config::{
    add_custom_endpoint, create, remove_custom_endpoint, resolve_env, Catalog, DefaultTranslator,
    FileStorage, GlobalEnv, MemoryStorage, Storage, Translate,
};
use clap::Parser;
use cli::{Command, ListArgs};
use error::CliError;
use tracing::info;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let result = match cli.command {
        Command::List(args) => {
            let stdout = std::io::stdout();
            run_list(&args, &cli.storage, &mut stdout.lock())
        }
        Command::Add(args) => run_add(&args.url, &cli.storage),
        Command::Remove(args) => run_remove(&args.url, &cli.storage),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "endpoint-list failed");
        std::process::exit(1);
    }
}

fn run_list<W: std::io::Write>(
    args: &ListArgs,
    storage_path: &Path,
    writer: &mut W,
) -> Result<(), CliError> {
    let translator: Box<dyn Translate> = match &args.locale {
        Some(path) => {
            info!(path = %path.display(), "loading translations");
            Box::new(Catalog::load(path)?)
        }
        None => Box::new(DefaultTranslator),
    };

    let env = resolve_env(args.ws_url.clone().map(GlobalEnv::with_ws_url));
    // unreadable storage only drops the saved endpoints
    let storage: Box<dyn Storage> = match FileStorage::open(storage_path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::error!(
                path = %storage_path.display(),
                error = %e,
                "ignoring unreadable storage file"
            );
            Box::new(MemoryStorage::new())
        }
    };

    let mut options = create(translator.as_ref(), &env, storage.as_ref());
    if args.selectable {
        options.retain(|o| o.is_selectable());
    }

    output::write_options(&options, args.json, writer)
}

fn run_add(url: &str, storage_path: &Path) -> Result<(), CliError> {
    let mut storage = FileStorage::open(storage_path)?;
    if !add_custom_endpoint(&mut storage, url)? {
        info!(url, "endpoint already saved");
    }
    Ok(())
}

fn run_remove(url: &str, storage_path: &Path) -> Result<(), CliError> {
    let mut storage = FileStorage::open(storage_path)?;
    if !remove_custom_endpoint(&mut storage, url)? {
        tracing::warn!(url, "endpoint was not saved");
    }
    Ok(())
}
