//! Bazaar CLI - Cart snapshot inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Print cart lines and totals
//! bazaar show
//!
//! # Add one unit of a product
//! bazaar add --id prod-1 --name "Widget" --price 19.99 --stock 5
//!
//! # Set a line's quantity (clamped to [1, stock])
//! bazaar set-quantity --id prod-1 --quantity 3
//!
//! # Remove a line / clear everything
//! bazaar remove --id prod-1
//! bazaar clear
//! ```
//!
//! The snapshot file defaults to `cart.json` in the working directory; set
//! `BAZAAR_CART_PATH` to point elsewhere.

#![cfg_attr(not(test), forbid(unsafe_code))]
// CLI output goes to stdout on purpose
#![allow(clippy::print_stdout)]

use bazaar_cart::{CartStore, JsonFileStore};
use bazaar_core::ProductId;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "bazaar")]
#[command(author, version, about = "Bazaar cart management tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print cart lines and totals
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Product display name
        #[arg(long)]
        name: String,

        /// Unit price in currency units, e.g. 19.99
        #[arg(long)]
        price: Decimal,

        /// Sellable stock known at time of add
        #[arg(long)]
        stock: u32,

        /// Brand display name
        #[arg(long)]
        brand: Option<String>,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product identifier
        #[arg(long)]
        id: String,
    },
    /// Set a carted product's quantity, clamped to `[1, stock]`
    SetQuantity {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Desired quantity
        #[arg(long)]
        quantity: u32,
    },
    /// Remove all lines
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::CliConfig::from_env();
    let mut store = CartStore::hydrate(Box::new(JsonFileStore::new(config.cart_path)));

    match cli.command {
        Commands::Show => commands::cart::show(&store),
        Commands::Add {
            id,
            name,
            price,
            stock,
            brand,
        } => {
            if price.is_sign_negative() {
                return Err(format!("price must be non-negative, got {price}").into());
            }
            commands::cart::add(&mut store, &id, name, price, stock, brand);
        }
        Commands::Remove { id } => commands::cart::remove(&mut store, &ProductId::new(id)),
        Commands::SetQuantity { id, quantity } => {
            commands::cart::set_quantity(&mut store, &ProductId::new(id), quantity);
        }
        Commands::Clear => commands::cart::clear(&mut store),
    }
    Ok(())
}
