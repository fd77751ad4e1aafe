use clap::Parser;
use dubai_listings::aggregator::{Aggregator, ScopeOutcome};
use dubai_listings::config::Config;
use dubai_listings::domain::SearchIntent;
use dubai_listings::errors::AppError;
use dubai_listings::extractor::ParameterExtractor;
use dubai_listings::logger;
use dubai_listings::lookup::LookupTables;
use dubai_listings::presentation::{
    build_enrichment_payload, format_listing, group_thousands, handoff_message,
    summary_instruction, title_case,
};
use dubai_listings::provider::{BayutClient, ListingsAdapter};
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "dubai-listings",
    about = "Search Dubai property listings from a free-text query"
)]
struct Cli {
    /// e.g. "apartments for rent in Mirdif under 2M AED"
    #[arg(required = true)]
    query: Vec<String>,

    /// How many ranked listings to keep (overrides LISTINGS_TOP_N)
    #[arg(long)]
    top: Option<NonZeroUsize>,

    /// Also print the summariser instruction and JSON hand-off
    #[arg(long)]
    json: bool,

    /// Print the full search report as JSON instead of the listing lines
    #[arg(long, conflicts_with = "json")]
    report: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?;
    logger::init(&config.log_level)?;

    let tables = Arc::new(match &config.lookup_file {
        Some(path) => LookupTables::from_json_file(path)?,
        None => LookupTables::builtin(),
    });

    let query = cli.query.join(" ");
    let intent = ParameterExtractor::new(tables.clone()).extract(&query);
    print_banner(&intent);

    let client = BayutClient::new(&config.provider)?;
    let adapter = ListingsAdapter::new(client, tables.clone(), config.provider.hits_per_page);
    let top_n = cli.top.map_or(config.top_n, NonZeroUsize::get);
    let aggregator = Aggregator::new(adapter, tables.clone(), top_n);

    let report = aggregator.run(intent);

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for failed in report.failures() {
        if let ScopeOutcome::Failed(reason) = &failed.outcome {
            println!("⚠️ {} skipped: {reason}", title_case(&failed.neighborhood));
        }
    }

    if report.is_empty() {
        println!("😔 No properties found in any family-friendly area under those criteria.");
        println!("You may try increasing budget or specifying a different neighborhood.");
        return Ok(());
    }

    println!(
        "🔍 Top {} of {} listings gathered:",
        report.ranked.len(),
        report.total_found
    );
    for result in &report.ranked {
        println!("{}", format_listing(&result.listing, &result.neighborhood));
    }

    if cli.json {
        let payload = build_enrichment_payload(&report.ranked, &tables);
        println!();
        println!("{}", summary_instruction(&query));
        println!();
        println!("{}", handoff_message(&payload)?);
    }

    Ok(())
}

fn print_banner(intent: &SearchIntent) {
    match &intent.location {
        Some(nb) => println!("📍 Searching in specified neighborhood: {}", title_case(nb)),
        None => println!(
            "📍 No specific neighborhood mentioned; searching all family-friendly neighborhoods."
        ),
    }

    match intent.budget {
        Some(budget) => println!("💰 Budget: Under {} AED", group_thousands(budget, 0)),
        None => println!("💰 Budget: None"),
    }

    println!("🎯 Purpose: {}", title_case(intent.purpose.as_str()));
    if let Some(category) = intent.category {
        println!("🏠 Type: {}", title_case(&category.as_str().replace('-', " ")));
    }
    println!();
}
