use clap::Args;
use rust_decimal::Decimal;
use store_app::domain::products::{ProductsService, models::ProductData};

use crate::cli::{DatabaseArgs, print_product};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Unique product code
    #[arg(long)]
    code: String,

    /// Unit price
    #[arg(long)]
    price: Decimal,

    /// Units in stock
    #[arg(long)]
    quantity: u32,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let service = args.database.products_service().await?;

    let product = service
        .create_product(ProductData::new(args.code, args.price, args.quantity))
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    print_product(&product);

    Ok(())
}
