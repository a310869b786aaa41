use clap::Parser;
use quill::application::{
    export_quotes::export_quotes, import_quotes::import_quotes, init::init,
    manage_config::ConfigService, AddQuoteService, ListQuotesService, ShowQuoteService,
    SyncService,
};
use quill::cli::output;
use quill::cli::{Cli, Commands};
use quill::error::QuillError;
use quill::infrastructure::{CollectionRepository, FileSystemRepository, HttpRemoteClient};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), QuillError> {
    match cli.command {
        Some(Commands::Init { path, server_url }) => init(&path, &server_url),
        Some(Commands::Add {
            text,
            category,
            push,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = AddQuoteService::new(repo);

            let quote = service.execute(&text, &category)?;
            println!("Added quote in category '{}'", quote.category);

            if push {
                let remote = HttpRemoteClient::new(&config.server_url)?;
                match service.push(&remote, &quote) {
                    Ok(()) => println!("Quote submitted to the server."),
                    // The quote is already saved locally; a push failure
                    // is a notice, not a command failure.
                    Err(e) => eprintln!("Warning: {}", e),
                }
            }

            Ok(())
        }
        Some(Commands::Show { category }) => show(category.as_deref()),
        Some(Commands::List { category }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListQuotesService::new(repo);
            let quotes = service.list(category.as_deref())?;
            print!("{}", ensure_trailing_newline(output::format_quote_list(&quotes)));
            Ok(())
        }
        Some(Commands::Categories) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListQuotesService::new(repo);
            let categories = service.categories()?;
            print!(
                "{}",
                ensure_trailing_newline(output::format_category_list(&categories))
            );
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let repo = FileSystemRepository::discover()?;
            let report = import_quotes(&repo, &file)?;
            println!("{}", output::format_import_report(&report));
            Ok(())
        }
        Some(Commands::Export { file }) => {
            let repo = FileSystemRepository::discover()?;
            let count = export_quotes(&repo, &file)?;
            println!("Exported {} quote(s) to {}", count, file.display());
            Ok(())
        }
        Some(Commands::Sync) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let remote = HttpRemoteClient::new(&config.server_url)?;
            let service = SyncService::new(repo);

            let report = service.execute(&remote)?;
            if let Some(warning) = &report.fetch_warning {
                eprintln!("Warning: {}", warning);
            }
            println!("{}", output::format_sync_report(&report));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("server_url = {}", config.server_url);
                println!("sync_limit = {}", config.sync_limit);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: quill config [--list | <key> [<value>]]");
                println!("Valid keys: server_url, sync_limit");
                Ok(())
            }
        }
        // Bare `quill` shows a random quote.
        None => show(None),
    }
}

fn show(category: Option<&str>) -> Result<(), QuillError> {
    let repo = FileSystemRepository::discover()?;
    let service = ShowQuoteService::new(repo);
    let quote = service.execute(category)?;
    println!("{}", output::format_quote(&quote));
    Ok(())
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
