use clap::Args;
use store_app::{
    domain::products::{ProductsService, models::ProductFilter},
    pagination::{DEFAULT_PAGE_SIZE, PageRequest},
};

use crate::cli::{DatabaseArgs, print_product};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Products per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    size: u32,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let request = PageRequest::new(args.page, args.size).map_err(|error| error.to_string())?;
    let service = args.database.products_service().await?;

    let page = service
        .list_products(ProductFilter::default(), request)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if page.is_empty() {
        println!("no products found on page {} of {}", page.page, page.total_pages());
        return Ok(());
    }

    for product in &page.items {
        print_product(product);
        println!();
    }

    println!(
        "page {} of {} ({} products total)",
        page.page + 1,
        page.total_pages(),
        page.total
    );

    Ok(())
}
