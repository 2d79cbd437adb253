use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shopping_list::cli::run().await
}
