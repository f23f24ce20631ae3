//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BAZAAR_CART_PATH` - Cart snapshot file path (default: `cart.json`)

use std::path::PathBuf;

const DEFAULT_CART_PATH: &str = "cart.json";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Cart snapshot file path.
    pub cart_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cart_path = std::env::var("BAZAAR_CART_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);

        Self { cart_path }
    }
}
