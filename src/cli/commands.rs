//! CLI command implementations

use std::fs;
use std::sync::Arc;

use crate::api::models::{NewProduct, OrderStatus, PageQuery};
use crate::api::ApiClient;
use crate::auth::{AuthManager, FileSessionStore, SessionStore};
use crate::cli::output::{self, TerminalUi};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::guard::{admin_guard, GuardDecision};
use crate::http;

/// Everything a command needs: configuration, the auth manager and the
/// typed API client, all sharing one pipeline and session store.
pub struct App {
    pub auth: AuthManager,
    pub api: ApiClient,
    ui: Arc<TerminalUi>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session.path.clone()));
        let ui = Arc::new(TerminalUi);
        let pipeline = Arc::new(http::build_pipeline(
            &config,
            store.clone(),
            ui.clone(),
            ui.clone(),
        ));
        let api = ApiClient::new(config.api.base_url.clone(), pipeline.clone());
        let auth = AuthManager::new(config.api.base_url, store, pipeline);
        Self { auth, api, ui }
    }

    fn require_admin(&self) -> Result<()> {
        match admin_guard(&self.auth, self.ui.as_ref()) {
            GuardDecision::Allow => Ok(()),
            GuardDecision::Deny => Err(Error::Unauthorized {
                message: "É necessário entrar como administrador".to_string(),
            }),
        }
    }
}

/// Initialize a new trincashop.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("trincashop.toml");

    if config_path.exists() {
        output::info("trincashop.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::default_config_content())?;
    output::success("Created trincashop.toml");
    Ok(())
}

/// Browse the public catalog
pub async fn products(app: &App, page: Option<u32>, size: Option<u32>) -> Result<()> {
    let spinner = output::spinner("Carregando produtos...");
    let result = app.api.products(PageQuery { page, size }).await;
    spinner.finish_and_clear();

    let page = result?;
    output::print_catalog(&page.content);
    Ok(())
}

/// Order a product and show the payment instructions
pub async fn buy(app: &App, product_id: i64) -> Result<()> {
    let spinner = output::spinner("Criando pedido...");
    let result = app.api.create_order(product_id).await;
    spinner.finish_and_clear();

    let order = result?;
    output::success(&format!("Pedido #{} criado", order.id));
    output::print_order_confirmation(&order);
    Ok(())
}

/// Look up an order confirmation
pub async fn order(app: &App, id: i64) -> Result<()> {
    let spinner = output::spinner("Buscando pedido...");
    let result = app.api.order(id).await;
    spinner.finish_and_clear();

    output::print_order_confirmation(&result?);
    Ok(())
}

/// Log in to the admin area, prompting for missing credentials
pub async fn admin_login(app: &App, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| Error::Other(e.to_string()))?,
    };
    let password = dialoguer::Password::new()
        .with_prompt("Senha")
        .interact()
        .map_err(|e| Error::Other(e.to_string()))?;

    let spinner = output::spinner("Entrando...");
    let result = app.auth.login(&email, &password).await;
    spinner.finish_and_clear();

    let login = result?;
    output::success(&format!("Bem-vindo(a), {}!", login.name));
    Ok(())
}

/// Clear the stored session (best-effort server notification included)
pub async fn admin_logout(app: &App) -> Result<()> {
    app.auth.logout().await;
    output::success("Sessão encerrada");
    Ok(())
}

/// Show the order statistics dashboard
pub async fn admin_dashboard(app: &App) -> Result<()> {
    app.require_admin()?;

    let spinner = output::spinner("Carregando estatísticas...");
    let result = app.api.order_stats().await;
    spinner.finish_and_clear();

    output::print_stats(&result?);
    Ok(())
}

/// List every product, including inactive ones
pub async fn admin_products(app: &App, page: Option<u32>, size: Option<u32>) -> Result<()> {
    app.require_admin()?;

    let spinner = output::spinner("Carregando produtos...");
    let result = app.api.admin_products(PageQuery { page, size }).await;
    spinner.finish_and_clear();

    output::print_admin_products(&result?.content);
    Ok(())
}

/// Create a product
pub async fn admin_create_product(
    app: &App,
    name: String,
    price: f64,
    stock: i32,
    active: bool,
) -> Result<()> {
    app.require_admin()?;

    let product = NewProduct {
        name,
        price,
        stock,
        active,
    };
    let spinner = output::spinner("Salvando produto...");
    let result = app.api.create_product(&product).await;
    spinner.finish_and_clear();

    let created = result?;
    output::success(&format!("Produto #{} criado: {}", created.id, created.name));
    Ok(())
}

/// Update a product
pub async fn admin_update_product(
    app: &App,
    id: i64,
    name: String,
    price: f64,
    stock: i32,
    active: bool,
) -> Result<()> {
    app.require_admin()?;

    let product = NewProduct {
        name,
        price,
        stock,
        active,
    };
    let spinner = output::spinner("Salvando produto...");
    let result = app.api.update_product(id, &product).await;
    spinner.finish_and_clear();

    let updated = result?;
    output::success(&format!("Produto #{} atualizado", updated.id));
    Ok(())
}

/// List orders, optionally filtered by status
pub async fn admin_orders(
    app: &App,
    status: Option<OrderStatus>,
    page: Option<u32>,
    size: Option<u32>,
) -> Result<()> {
    app.require_admin()?;

    let spinner = output::spinner("Carregando pedidos...");
    let result = app.api.admin_orders(status, PageQuery { page, size }).await;
    spinner.finish_and_clear();

    output::print_orders(&result?.content);
    Ok(())
}

/// Transition an order to a new status
pub async fn admin_set_status(app: &App, id: i64, status: OrderStatus) -> Result<()> {
    app.require_admin()?;

    let spinner = output::spinner("Atualizando pedido...");
    let result = app.api.update_order_status(id, status).await;
    spinner.finish_and_clear();

    let order = result?;
    output::success(&format!(
        "Pedido #{} agora está {}",
        order.id,
        output::status_label(order.status)
    ));
    Ok(())
}
