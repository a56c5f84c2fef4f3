use clap::Parser;
use linguist::config::Config;
use linguist_model::{
    EntityRef, Identifier, IdentifierValue, Locale, Record, Translatable, TranslationRecord,
    downcast_translation,
};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

/// Arguments to configure this runtime of the application before it is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, env, default_value = "INFO")]
    log_level: LevelFilter,
    /// Resolve for exactly this locale instead of the current one (without fallback).
    #[arg(long)]
    locale: Option<Locale>,
    /// The items to resolve, as `Type:id` (composite identifiers are separated by `,`).
    #[arg(required = true, value_parser = parse_item)]
    items: Vec<EntityRef>,
}

/// An item with its resolved translation, as printed to stdout.
#[derive(Serialize)]
struct Resolved<'a> {
    #[serde(flatten)]
    item: EntityRef,
    translation: Option<&'a TranslationRecord>,
}

fn parse_item(raw: &str) -> Result<EntityRef, String> {
    let Some((entity_type, identifier)) = raw.split_once(':') else {
        return Err(format!("expected 'Type:id', got '{raw}'"));
    };
    if entity_type.is_empty() || identifier.is_empty() {
        return Err(format!("expected 'Type:id', got '{raw}'"));
    }
    let identifier = Identifier::new(identifier.split(',').map(IdentifierValue::infer).collect());
    Ok(EntityRef::new(entity_type.to_string(), identifier))
}

/// Initializes the application and resolves the translations of the requested items.
///
/// This initializes the logging, aggregates configuration and starts the tokio runtime. This is only
/// a thin-wrapper around the linguist crate that supplies the necessary settings.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse the arguments and configuration
    let args = Args::parse();
    let config = Config::new()?;

    // initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_filter(args.log_level),
        )
        .init();

    let mut records: Vec<Record> = args
        .items
        .iter()
        .map(|item| Record::new(item.entity_type.clone(), item.identifier.clone()))
        .collect();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let repository = linguist::build(config).await?;
            let items = records
                .iter_mut()
                .map(|record| record as &mut dyn Translatable);
            match &args.locale {
                Some(locale) => {
                    repository
                        .find_and_set_translation_for_locale(items, locale)
                        .await?
                }
                None => {
                    repository
                        .find_and_set_translation_for_current_locale(items)
                        .await?
                }
            }
            Ok::<_, Box<dyn std::error::Error>>(())
        })?;

    let resolved: Vec<Resolved> = args
        .items
        .into_iter()
        .zip(&records)
        .map(|(item, record)| Resolved {
            item,
            translation: record
                .current_translation()
                .and_then(downcast_translation::<TranslationRecord>),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
