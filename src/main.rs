use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trincashop::cli::{commands, AdminCommands, Cli, Commands, OrderCommands, ProductCommands};
use trincashop::config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trincashop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if matches!(cli.command, Commands::Init) {
        commands::init().await?;
        return Ok(());
    }

    let mut config = config::load_config()?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if cli.mock {
        config.api.use_mock = true;
    }

    let app = commands::App::new(config);

    match cli.command {
        Commands::Init => {}
        Commands::Products { page, size } => commands::products(&app, page, size).await?,
        Commands::Buy { product_id } => commands::buy(&app, product_id).await?,
        Commands::Order { id } => commands::order(&app, id).await?,
        Commands::Admin { action } => match action {
            AdminCommands::Login { email } => commands::admin_login(&app, email).await?,
            AdminCommands::Logout => commands::admin_logout(&app).await?,
            AdminCommands::Dashboard => commands::admin_dashboard(&app).await?,
            AdminCommands::Products { action } => match action {
                ProductCommands::List { page, size } => {
                    commands::admin_products(&app, page, size).await?
                }
                ProductCommands::Create {
                    name,
                    price,
                    stock,
                    inactive,
                } => commands::admin_create_product(&app, name, price, stock, !inactive).await?,
                ProductCommands::Update {
                    id,
                    name,
                    price,
                    stock,
                    inactive,
                } => {
                    commands::admin_update_product(&app, id, name, price, stock, !inactive).await?
                }
            },
            AdminCommands::Orders { action } => match action {
                OrderCommands::List { status, page, size } => {
                    commands::admin_orders(&app, status, page, size).await?
                }
                OrderCommands::SetStatus { id, status } => {
                    commands::admin_set_status(&app, id, status).await?
                }
            },
        },
    }

    Ok(())
}
