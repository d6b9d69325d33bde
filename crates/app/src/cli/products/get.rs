use clap::Args;
use store_app::domain::products::ProductsService;

use crate::cli::{DatabaseArgs, print_product};

#[derive(Debug, Args)]
pub(crate) struct GetProductArgs {
    /// Product code
    #[arg(long)]
    code: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: GetProductArgs) -> Result<(), String> {
    let service = args.database.products_service().await?;

    let product = service
        .get_product(&args.code)
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    print_product(&product);

    Ok(())
}
