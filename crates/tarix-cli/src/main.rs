use std::io::{self, BufRead, Write};

use clap::Parser;

use tarix_core::{AppConfig, Conversion, Fallback, Pipeline, TarixError};

/// Normalize colloquial Azerbaijani date expressions.
#[derive(Debug, Parser)]
#[command(name = "tarix", version, about)]
struct Cli {
    /// Date expression to convert; reads lines from stdin when omitted.
    text: Option<String>,

    /// Print the entity record as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), TarixError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarix=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let pipeline = Pipeline::new(config);

    if let Some(text) = &cli.text {
        report(&pipeline.run(text), cli.json);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("date> ");
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        report(&pipeline.run(text), cli.json);
    }

    Ok(())
}

fn report(conversion: &Conversion, json: bool) {
    println!("converted: {}", conversion.converted);

    if json {
        if let Ok(entities) = serde_json::to_string(&conversion.entities) {
            println!("entities: {entities}");
        }
    } else {
        let entities = &conversion.entities;
        println!(
            "entities: year={} month={} day={}",
            entities.year.as_deref().unwrap_or("-"),
            entities.month.as_deref().unwrap_or("-"),
            entities.day.as_deref().unwrap_or("-"),
        );
    }

    if let Some(formatted) = conversion.entities.format() {
        println!("date: {formatted}");
    }

    match &conversion.fallback {
        Fallback::Parsed(iso) => println!("parsed: {iso}"),
        Fallback::Unparseable => println!("date not recoverable"),
        Fallback::NotNeeded => {}
    }
}
