use alpha_motors::application::data::{DatasetCache, ListingLoader, ListingTable};
use alpha_motors::application::ml::PredictionService;
use alpha_motors::config::{Config, DisplayEnvConfig};
use alpha_motors::domain::prediction::PredictionRequest;
use alpha_motors::infrastructure::FileArtifactSource;
use alpha_motors::interfaces::formatting::format_currency;
use alpha_motors::interfaces::view_models::{
    DashboardViewModel, LISTING_HEADERS, Page, PredictionOutcome,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

const PREVIEW_ROWS: usize = 5;

#[derive(Parser, Debug)]
#[command(author, version, about = "Text views of the Alpha Motors dashboard", long_about = None)]
struct Args {
    /// Override DATASET_PATH
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline metrics and the first listings
    Overview,
    /// Price distribution and average price per brand
    Pricing,
    /// Brands with the best price per kilometre
    Depreciation,
    /// Estimate a price with the trained model
    Predict {
        #[arg(long)]
        make: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        condition: String,
        #[arg(long)]
        mileage: f64,
        #[arg(long)]
        engine_size: f64,
        #[arg(long)]
        fuel: String,
        #[arg(long)]
        transmission: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = args.dataset {
        config.dataset.path = path;
    }

    match args.command {
        Command::Overview => {
            let table = load_table(&config)?;
            print_overview(&table, &config.display.currency_symbol);
        }
        Command::Pricing => {
            let table = load_table(&config)?;
            print_pricing(&table, &config.display);
        }
        Command::Depreciation => {
            let table = load_table(&config)?;
            print_depreciation(&table, &config.display);
        }
        Command::Predict {
            make,
            year,
            condition,
            mileage,
            engine_size,
            fuel,
            transmission,
        } => {
            let request = PredictionRequest {
                make,
                year_of_manufacture: year,
                condition,
                mileage,
                engine_size,
                fuel,
                transmission,
            };
            let service = PredictionService::new(Arc::new(FileArtifactSource::from_config(
                &config.artifacts,
            )));

            print_heading(Page::PredictPrice);
            let result = service.predict(&request);
            match PredictionOutcome::from_result(result, &config.display.currency_symbol) {
                PredictionOutcome::Estimate(text) => println!("{}", text),
                PredictionOutcome::Failure { headline, detail } => {
                    error!("Prediction failed: {}", detail);
                    anyhow::bail!("{}: {}", headline, detail);
                }
            }
        }
    }

    Ok(())
}

fn load_table(config: &Config) -> anyhow::Result<Arc<ListingTable>> {
    let loader = ListingLoader::from_config(&config.dataset, Arc::new(DatasetCache::new()));
    let table = loader.load_data().map_err(|e| {
        error!("Failed to load dataset: {}", e);
        anyhow::anyhow!("{}: {}", e.kind_label(), e)
    })?;
    info!("Loaded {} listings", table.len());
    Ok(table)
}

fn print_heading(page: Page) {
    println!("{}", page.heading());
    println!("{}", "=".repeat(page.heading().chars().count()));
}

fn print_overview(table: &ListingTable, currency_symbol: &str) {
    print_heading(Page::Overview);
    let metrics = DashboardViewModel::overview(table, currency_symbol);
    println!("Total Cars:        {}", metrics.total_cars);
    println!("Avg. Price:        {}", metrics.avg_price);
    println!("Most Common Brand: {}", metrics.most_common_make);
    println!("Avg. Car Age:      {}", metrics.avg_car_age);
    println!();

    println!("{}", LISTING_HEADERS.join(" | "));
    for listing in table.head(PREVIEW_ROWS) {
        println!(
            "{}",
            DashboardViewModel::listing_cells(listing, currency_symbol).join(" | ")
        );
    }
}

fn print_pricing(table: &ListingTable, display: &DisplayEnvConfig) {
    print_heading(Page::PricingAnalysis);
    println!("Price Distribution ({} bins)", display.histogram_bins);
    for bin in table.price_histogram(display.histogram_bins) {
        if bin.count == 0 {
            continue;
        }
        println!(
            "  {:>14} to {:>14}: {}",
            format_currency(bin.start, &display.currency_symbol),
            format_currency(bin.end, &display.currency_symbol),
            bin.count
        );
    }
    println!();

    println!("Average Price by Brand");
    for stat in table.mean_price_by_make() {
        println!(
            "  {:<20} {}",
            stat.make,
            format_currency(stat.value, &display.currency_symbol)
        );
    }
}

fn print_depreciation(table: &ListingTable, display: &DisplayEnvConfig) {
    print_heading(Page::DepreciationTrends);
    println!("Top {} Brands Retaining Value", display.top_brands);
    let retention = table.best_value_retention(display.top_brands);
    if retention.is_empty() {
        println!("  No listings with a non-zero mileage.");
        return;
    }
    for stat in retention {
        println!("  {:<20} {:.2} per km", stat.make, stat.value);
    }
}
