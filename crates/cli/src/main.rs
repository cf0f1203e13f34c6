//! Fresh Bowl CLI - terminal front end for the storefront widget.
//!
//! # Usage
//!
//! ```bash
//! # Browse the product grid and current cart
//! fb-cli shop
//!
//! # Mutate the persisted cart
//! fb-cli cart add ens-01
//! fb-cli cart add ens-02 --quantity 2
//! fb-cli cart minus ens-02
//! fb-cli cart remove ens-01
//! fb-cli cart show
//! fb-cli cart clear
//!
//! # Account session
//! fb-cli login -e ana@example.com -p secret
//! fb-cli whoami
//! fb-cli logout
//! ```
//!
//! Configuration comes from the `FRESH_BOWL_*` environment variables (see
//! `fresh_bowl_storefront::config`); the cart and session persist under the
//! configured data directory between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
// A terminal front end's output is stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use fresh_bowl_storefront::{AppState, StorefrontConfig};

mod commands;
mod view;

#[derive(Parser)]
#[command(name = "fb-cli")]
#[command(author, version, about = "Fresh Bowl storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product grid and the current cart
    Shop,
    /// Inspect and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in and persist the session
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the logged-in account, if any
    Whoami,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add units of a product to the cart
    Add {
        /// Product identifier, e.g. `ens-01`
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Raise an existing line's quantity by one
    Plus {
        /// Product identifier
        id: String,
    },
    /// Lower a line's quantity by one, dropping it at zero
    Minus {
        /// Product identifier
        id: String,
    },
    /// Remove a line outright
    Remove {
        /// Product identifier
        id: String,
    },
    /// Print the current cart
    Show,
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> fresh_bowl_storefront::Result<()> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Shop => commands::shop::run(&state).await?,
        Commands::Cart { action } => match action {
            CartAction::Add { id, quantity } => {
                commands::cart::add(&state, &id.into(), quantity).await?;
            }
            CartAction::Plus { id } => commands::cart::plus(&state, &id.into())?,
            CartAction::Minus { id } => commands::cart::minus(&state, &id.into())?,
            CartAction::Remove { id } => commands::cart::remove(&state, &id.into())?,
            CartAction::Show => commands::cart::show(&state)?,
            CartAction::Clear => commands::cart::clear(&state)?,
        },
        Commands::Login { email, password } => {
            commands::account::login(&state, &email, &password).await?;
        }
        Commands::Logout => commands::account::logout(&state)?,
        Commands::Whoami => commands::account::whoami(&state),
    }
    Ok(())
}
