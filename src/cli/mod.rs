//! CLI interface for the TrincaShop client

pub mod commands;
mod output;

pub use output::*;

use crate::api::models::OrderStatus;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trincashop")]
#[command(version = "1.0.0")]
#[command(about = "Terminal client for the TrincaShop PIX storefront", long_about = None)]
pub struct Cli {
    /// Override the API base URL
    #[arg(long, env = "TRINCASHOP_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Serve canned responses instead of calling the API
    #[arg(long, env = "TRINCASHOP_MOCK", global = true)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a trincashop.toml configuration file
    Init,

    /// Browse the product catalog
    Products {
        #[arg(short, long)]
        page: Option<u32>,

        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Order a product and show the PIX payment instructions
    Buy {
        /// Id of the product to order
        product_id: i64,
    },

    /// Show an order confirmation
    Order {
        /// Id of the order
        id: i64,
    },

    /// Admin area (requires login)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Log in to the admin area
    Login {
        /// Email to log in with (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show order statistics
    Dashboard,

    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: OrderCommands,
    },
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List all products, including inactive ones
    List {
        #[arg(short, long)]
        page: Option<u32>,

        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Create a product
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        stock: i32,

        /// Create the product as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a product
    Update {
        /// Id of the product to update
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        stock: i32,

        /// Deactivate the product
        #[arg(long)]
        inactive: bool,
    },
}

#[derive(Subcommand)]
pub enum OrderCommands {
    /// List orders, optionally filtered by status
    List {
        /// Filter by status (pending, paid, released, cancelled)
        #[arg(short = 't', long)]
        status: Option<OrderStatus>,

        #[arg(short, long)]
        page: Option<u32>,

        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Transition an order to a new status
    SetStatus {
        /// Id of the order
        id: i64,

        /// Target status (pending, paid, released, cancelled)
        status: OrderStatus,
    },
}
