mod args;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feature_catalog::config::Config;
use feature_catalog::download::{load_into, Source, SAMPLE_ENVELOPE};
use feature_catalog::matcher::{available_types, suggest_ids, suggest_types, Query};
use feature_catalog::{file_ops, form, import, render};
use feature_catalog::{CatalogError, Envelope, Feature, FeatureStore};

use crate::args::Args;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn pick_source(args: &Args, config: &Config) -> Source {
    match args.source.clone().or_else(|| config.source_url.clone()) {
        Some(url) => Source::Remote(url),
        None => Source::Sample {
            delay: if args.no_delay {
                Duration::ZERO
            } else {
                config.fetch_delay
            },
        },
    }
}

/// Fetch failures are logged and swallowed; the store keeps what it had.
fn fetch(store: &mut FeatureStore, source: &Source) {
    println!("Loading features from {}...", source.name());
    if let Err(e) = load_into(store, source) {
        error!(kind = e.kind(), error = %e, "error fetching features");
    }
}

fn report_import(label: &str, outcome: std::result::Result<usize, CatalogError>) {
    match outcome {
        Ok(count) => {
            info!(count, label, "import applied");
            println!("Imported {} features from {}", count, label);
        }
        Err(e) => {
            warn!(kind = e.kind(), label, "import rejected");
            println!("Import from {} failed: {}", label, e);
        }
    }
}

fn submit(store: &mut FeatureStore, path: &Path, existing: bool) {
    let action = file_ops::read_json_from_file::<Feature>(path).and_then(|feature| {
        if existing {
            form::edit(store, feature)
        } else {
            form::create(feature)
        }
    });

    match action {
        Ok(action) => {
            store.dispatch(action);
            println!(
                "{} feature from {}",
                if existing { "Updated" } else { "Added" },
                path.display()
            );
        }
        Err(e) => {
            warn!(kind = e.kind(), path = %path.display(), "form submission rejected");
            println!("Could not save {}: {}", path.display(), e);
        }
    }
}

fn print_template() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&form::blank_feature())?);
    println!("Types: {}", form::FEATURE_TYPES.join(", "));
    println!("Statuses: {}", form::STATUS_OPTIONS.join(", "));
    println!("Platforms: {}", form::PLATFORM_OPTIONS.join(", "));
    Ok(())
}

fn main() -> Result<()> {
    let args: Args = Args::parse();

    // load environment variables from .env file
    let config: Config = Config::from_env();
    init_logging(&config);

    if args.example {
        print!("{}", SAMPLE_ENVELOPE);
        return Ok(());
    }

    if args.template {
        return print_template();
    }

    let mut store = FeatureStore::new();
    store.subscribe(|snapshot| debug!(count = snapshot.len(), "snapshot published"));

    let source = pick_source(&args, &config);
    fetch(&mut store, &source);
    if args.refresh {
        fetch(&mut store, &source);
    }

    for path in &args.import {
        if !file_ops::is_json_file(path) {
            warn!(path = %path.display(), "import file does not have a .json extension");
        }
        let label = path.display().to_string();
        report_import(&label, file_ops::import_file_into(&mut store, path));
    }

    if let Some(text) = &args.import_text {
        report_import("pasted text", import::import_into(&mut store, text));
    }

    if let Some(path) = &args.add {
        submit(&mut store, path, false);
    }

    if let Some(path) = &args.update {
        submit(&mut store, path, true);
    }

    for id in &args.delete {
        if !store.contains(id) {
            info!(id = %id, "nothing to delete");
        }
        store.delete(id);
    }

    if args.list_types {
        println!("Types: ");
        for feature_type in available_types(store.features()) {
            println!("{}", feature_type);
        }
    }

    if let Some(id) = &args.show {
        match store.get(id) {
            Some(feature) if args.export => {
                let envelope = Envelope::wrap(vec![feature.clone()]);
                println!("{}", serde_json::to_string_pretty(&envelope)?);
                return Ok(());
            }
            Some(feature) => {
                print!("{}", render::render_detail(feature));
                return Ok(());
            }
            None => {
                let e = CatalogError::NotFound(id.clone());
                warn!(kind = e.kind(), "{}, showing the list instead", e);
                println!("{}", e);
                let suggestions = suggest_ids(id, store.features());
                if !suggestions.is_empty() {
                    println!("Did you mean one of the following?");
                    for suggestion in suggestions {
                        println!("{}", suggestion);
                    }
                }
            }
        }
    }

    let query = Query::new(args.search, args.type_filter);
    let filtered = query.apply(store.features());

    if filtered.is_empty() {
        if let Some(wanted) = &query.type_filter {
            let suggestions = suggest_types(wanted, store.features());
            if !suggestions.is_empty() {
                println!("No type named {}. Did you mean: {}", wanted, suggestions.join(", "));
            }
        }
    }

    if args.export {
        let envelope = Envelope::wrap(filtered.into_iter().cloned().collect());
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print!("{}", render::render_list(store.len(), &filtered));
    }

    Ok(())
}
