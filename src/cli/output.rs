//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::models::{Order, OrderStats, OrderStatus, Product};
use crate::guard::{Navigator, Route};
use crate::http::ThrottleNotifier;

/// Static PIX key shown on the confirmation screen (display text only,
/// no payment integration)
pub const PIX_KEY: &str = "trincashop@email.com";

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Spinner shown while a request is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Currency formatting, matching the storefront display
pub fn format_price(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Render an API timestamp for display; unparseable values pass through
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    // The live backend serializes LocalDateTime without an offset
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Emoji for a product: server-provided when present, otherwise the
/// storefront's name-based lookup
pub fn product_emoji(product: &Product) -> String {
    if let Some(emoji) = &product.emoji {
        return emoji.clone();
    }
    let lower = product.name.to_lowercase();
    let emoji = if lower.contains("coca") || lower.contains("guaraná") {
        "🥤"
    } else if lower.contains("água") {
        "💧"
    } else if lower.contains("suco") {
        "🧃"
    } else if lower.contains("chocolate") || lower.contains("bis") {
        "🍫"
    } else if lower.contains("energético") || lower.contains("monster") {
        "⚡"
    } else if lower.contains("iogurte") {
        "🥛"
    } else if lower.contains("barra") || lower.contains("cereal") {
        "🥜"
    } else {
        "🧊"
    };
    emoji.to_string()
}

/// Status label with the storefront's emoji badges
pub fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "⏳ Pendente",
        OrderStatus::Paid => "✅ Pago",
        OrderStatus::Released => "🔓 Liberado",
        OrderStatus::Cancelled => "❌ Cancelado",
    }
}

fn stock_label(stock: i32) -> String {
    if stock > 0 {
        format!("{} un.", stock)
    } else {
        "Esgotado".to_string()
    }
}

/// Print the public catalog
pub fn print_catalog(products: &[Product]) {
    if products.is_empty() {
        info("Nenhum produto disponível no momento.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("").fg(Color::Cyan),
            Cell::new("Produto").fg(Color::Cyan),
            Cell::new("Preço").fg(Color::Cyan),
            Cell::new("Estoque").fg(Color::Cyan),
        ]);

    for product in products {
        let stock_color = if product.stock > 3 {
            Color::Green
        } else if product.stock > 0 {
            Color::Yellow
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(product.id),
            Cell::new(product_emoji(product)),
            Cell::new(&product.name),
            Cell::new(format_price(product.price)),
            Cell::new(stock_label(product.stock)).fg(stock_color),
        ]);
    }

    println!("{table}");
    println!("{}", "Escolha seu produto e pague via PIX – rápido e seguro!".dimmed());
}

/// Print the admin product table (includes inactive products)
pub fn print_admin_products(products: &[Product]) {
    if products.is_empty() {
        info("Nenhum produto cadastrado.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Produto").fg(Color::Cyan),
            Cell::new("Preço").fg(Color::Cyan),
            Cell::new("Estoque").fg(Color::Cyan),
            Cell::new("Ativo").fg(Color::Cyan),
        ]);

    for product in products {
        let active = if product.active {
            Cell::new("sim").fg(Color::Green)
        } else {
            Cell::new("não").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(product.id),
            Cell::new(&product.name),
            Cell::new(format_price(product.price)),
            Cell::new(product.stock),
            active,
        ]);
    }

    println!("{table}");
}

/// Print the admin order table
pub fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        info("Nenhum pedido encontrado.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Produto").fg(Color::Cyan),
            Cell::new("Valor").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Criado em").fg(Color::Cyan),
        ]);

    for order in orders {
        table.add_row(vec![
            Cell::new(order.id),
            Cell::new(&order.product_name),
            Cell::new(format_price(order.product_price)),
            Cell::new(status_label(order.status)),
            Cell::new(order.created_at.as_deref().map(format_date).unwrap_or_default()),
        ]);
    }

    println!("{table}");
}

/// Order confirmation screen with the PIX payment instructions
pub fn print_order_confirmation(order: &Order) {
    println!();
    println!("{}", format!("Pedido #{}", order.id).bold());
    println!("  {} — {}", order.product_name, format_price(order.product_price));
    println!("  Status: {}", status_label(order.status));
    if let Some(created_at) = &order.created_at {
        println!("  Criado em: {}", format_date(created_at));
    }
    println!();
    println!("{}", "📱 Pague via PIX".bold());
    println!(
        "  Envie {} para a chave PIX abaixo:",
        format_price(order.product_price).bold()
    );
    println!("  {}", PIX_KEY.cyan().bold());
    println!("{}", "  Após o pagamento, um administrador confirmará seu pedido.".dimmed());
}

/// Dashboard statistics block
pub fn print_stats(stats: &OrderStats) {
    println!();
    println!("{}", "Painel TrincaShop".bold());
    println!("  📦 Total de pedidos:   {}", stats.total_orders);
    println!("  ⏳ Pedidos pendentes:  {}", stats.pending_orders);
    println!("  ✅ Pedidos pagos:      {}", stats.paid_orders);
    println!("  💰 Total arrecadado:   {}", format_price(stats.total_revenue));
}

/// Terminal rendition of the navigation layer: redirects and notices
/// become messages instead of page changes.
pub struct TerminalUi;

impl Navigator for TerminalUi {
    fn redirect(&self, route: Route) {
        match route {
            Route::AdminLogin => eprintln!(
                "{}",
                "Sessão encerrada. Entre novamente com 'trincashop admin login'.".yellow()
            ),
            other => eprintln!("{} {}", "→".dimmed(), other.path()),
        }
    }
}

impl ThrottleNotifier for TerminalUi {
    fn notify_rate_limited(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message.yellow());
    }
}
