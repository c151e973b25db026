use obligation_tree::commands::Commands;
use obligation_tree::config::{load_config, CliArgs};
use obligation_tree::picker::ElementPicker;
use obligation_tree::{outline, parser, tree};
use obligation_tree::{Node, ObligationDocument, ObligationForm, TextCodec};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    init_tracing(&config.log_level);

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let codec = config.codec();

    match args.command {
        None => CliArgs::command().print_help()?,
        Some(Commands::Normalize { path }) => {
            let forest = load_forest(path.as_deref(), &codec)?;
            println!("{}", codec.encode(&forest));
        }
        Some(Commands::Show { path, json, ids }) => {
            let forest = load_forest(path.as_deref(), &codec)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&forest)?);
            } else {
                print!("{}", outline::render_outline(&forest, ids));
            }
        }
        Some(Commands::Check { path, duplicate }) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let record = ObligationDocument::from_json(&raw)
                .with_context(|| format!("Invalid obligation record in {}", path.display()))?;

            let form = if duplicate {
                ObligationForm::duplicate(record, codec)
            } else {
                ObligationForm::edit(record, codec)
            };

            println!("{}", form.preview());
            form.submission()?;
            info!(nodes = tree::count(form.editor().tree()), "obligation ready to submit");
        }
        Some(Commands::Elements) => {
            for (index, element) in ElementPicker::default().elements().iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}",
                    index, element.language_element, element.action, element.object
                );
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    // RUST_LOG wins over the configured level.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_forest(path: Option<&Path>, codec: &TextCodec) -> Result<Vec<Node>> {
    match path {
        Some(path) => {
            let (forest, _) = parser::load_file(path, codec)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(forest)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(codec.decode(&text))
        }
    }
}
