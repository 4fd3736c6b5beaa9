//! ToyBasket CLI - Inspect and manage persisted shopper state.
//!
//! # Usage
//!
//! ```bash
//! # Show cart lines with derived totals
//! tb-cli cart show
//!
//! # Remove one cart line by product id
//! tb-cli cart remove -i 64f1c9a2
//!
//! # Empty the cart
//! tb-cli cart clear
//!
//! # Show the wishlist
//! tb-cli wishlist show
//!
//! # Remove one wishlist entry by product id
//! tb-cli wishlist remove -i 64f1c9a2
//! ```
//!
//! # Commands
//!
//! - `cart` - Inspect or modify the persisted cart
//! - `wishlist` - Inspect or modify the persisted wishlist

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tb-cli")]
#[command(author, version, about = "ToyBasket CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or modify the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect or modify the persisted wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines with derived totals
    Show,
    /// Remove one line by product id
    Remove {
        /// Product id of the line to remove
        #[arg(short, long)]
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlist entries
    Show,
    /// Remove one entry by product id
    Remove {
        /// Product id of the entry to remove
        #[arg(short, long)]
        id: String,
    },
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

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show()?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&id)?,
        },
    }
    Ok(())
}
