//! Command-line front end for the catalog API.

use std::process::ExitCode;

use catalog_api::client::{CatalogClient, DEFAULT_BASE_URL};
use catalog_api::telemetry;
use catalog_api::ui::{render_card, ChangeSignal, ProductForm, ProductListView};
use clap::{Parser, Subcommand};
use reqwest::Url;

#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Browse and add products in the catalog")]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_url: Url,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every product
    List,
    /// Show one product
    Get { id: i64 },
    /// Add a product, then show the refreshed list
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    telemetry::init();

    let cli = Cli::parse();
    let client = CatalogClient::new(cli.api_url.as_str());

    match cli.command {
        Command::List => {
            let mut view = ProductListView::new(client);
            print!("{}", view.render());
            view.load().await;
            print!("{}", view.render());
        }
        Command::Get { id } => match client.fetch_one(id).await {
            Ok(product) => print!("{}", render_card(&product)),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        Command::Create { name, price, description } => {
            let changes = ChangeSignal::new();
            let mut view = ProductListView::new(client.clone());
            let mut watcher = changes.subscribe();

            let mut form = ProductForm::new(client, changes);
            form.name = name;
            form.price = price;
            form.description = description;

            let Some(candidate) = form.begin_submit() else {
                eprint!("{}", form.render());
                return ExitCode::FAILURE;
            };
            print!("{}", form.render());
            let result = form.client().create(&candidate).await;
            if form.finish_submit(result).is_none() {
                eprint!("{}", form.render());
                return ExitCode::FAILURE;
            }

            if view.refresh_on_change(&mut watcher).await {
                print!("{}", view.render());
            }
        }
    }

    ExitCode::SUCCESS
}
