use clap::{Args, Parser, Subcommand};
use store_app::{
    database,
    domain::products::{ProductsService, StoreProductsService, models::ProductData},
};

mod products;

#[derive(Debug, Parser)]
#[command(name = "store-app", about = "Store CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => products::run(command).await,
        }
    }
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn products_service(&self) -> Result<impl ProductsService, String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(StoreProductsService::from_pool(pool))
    }
}

pub(crate) fn print_product(product: &ProductData) {
    println!(
        "product_uuid: {}",
        product
            .uuid
            .map_or_else(|| "unassigned".to_string(), |uuid| uuid.to_string())
    );
    println!("code: {}", product.code);
    println!("price: {}", product.price);
    println!("quantity: {}", product.quantity);
}
