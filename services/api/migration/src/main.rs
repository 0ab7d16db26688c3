use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(gymhub_api_migration::Migrator).await;
}
