use clap::Args;
use rust_decimal::Decimal;
use store_app::domain::products::{ProductsService, models::ProductData};

use crate::cli::{DatabaseArgs, print_product};

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// Code of the product to update
    #[arg(long)]
    code: String,

    /// Replacement unit price
    #[arg(long)]
    price: Decimal,

    /// Replacement stock level
    #[arg(long)]
    quantity: u32,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: UpdateProductArgs) -> Result<(), String> {
    let service = args.database.products_service().await?;

    let product = service
        .update_product(ProductData::new(args.code, args.price, args.quantity))
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    print_product(&product);

    Ok(())
}
