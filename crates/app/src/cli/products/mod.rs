use clap::{Args, Subcommand};

mod create;
mod get;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    Create(create::CreateProductArgs),
    Update(update::UpdateProductArgs),
    Get(get::GetProductArgs),
    List(list::ListProductsArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::Create(args) => create::run(args).await,
        ProductsSubcommand::Update(args) => update::run(args).await,
        ProductsSubcommand::Get(args) => get::run(args).await,
        ProductsSubcommand::List(args) => list::run(args).await,
    }
}
