use std::path::PathBuf;

use anyhow::Result;
use aurum_core::catalog::{Category, Gem, Metal, NewItem, Price};
use clap::{Parser, Subcommand};

mod app;
mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "aurum")]
#[command(about = "AURUM & STONE - browse, configure and curate the collection", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the collection
    Catalog,
    /// Customize a piece's metal and gem and see the live price
    Configure {
        /// Id of the piece to configure
        id: String,
        /// Metal to set (gold, rose-gold, platinum)
        #[arg(long)]
        metal: Option<Metal>,
        /// Gem to set (diamond, ruby, sapphire, emerald)
        #[arg(long)]
        gem: Option<Gem>,
        /// Add the configured piece to the bag
        #[arg(long)]
        add: bool,
    },
    /// Curate the collection
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Talk to Aurelia, the house concierge
    Chat {
        /// Messages to send; reads stdin when omitted
        messages: Vec<String>,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Price,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        metal: Metal,
        #[arg(long)]
        gem: Gem,
        #[arg(long, default_value = "")]
        description: String,
        /// URL of a .glb model for the 3D viewer
        #[arg(long)]
        model_url: Option<String>,
    },
    /// Remove a product by id
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let app = app::bootstrap(cli.config).await?;

    match cli.command {
        Commands::Catalog => commands::catalog::list(&app).await?,
        Commands::Configure {
            id,
            metal,
            gem,
            add,
        } => commands::configure::run(&app, &id, metal, gem, add).await?,
        Commands::Admin { action } => match action {
            AdminAction::Add {
                name,
                price,
                category,
                metal,
                gem,
                description,
                model_url,
            } => {
                let mut item =
                    NewItem::new(name, price, category, metal, gem).with_description(description);
                if let Some(url) = model_url {
                    item = item.with_model_url(url);
                }
                commands::admin::add(&app, item).await?
            }
            AdminAction::Remove { id } => commands::admin::remove(&app, &id).await?,
        },
        Commands::Chat { messages } => commands::chat::run(&app, messages).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_parses_materials_case_insensitively() {
        let cli = Cli::try_parse_from([
            "aurum", "configure", "3", "--metal", "rose-gold", "--gem", "EMERALD", "--add",
        ])
        .unwrap();

        match cli.command {
            Commands::Configure {
                id, metal, gem, add,
            } => {
                assert_eq!(id, "3");
                assert_eq!(metal, Some(Metal::RoseGold));
                assert_eq!(gem, Some(Gem::Emerald));
                assert!(add);
            }
            _ => panic!("expected configure"),
        }
    }

    #[test]
    fn test_admin_add_requires_materials() {
        assert!(Cli::try_parse_from(["aurum", "admin", "add", "--name", "Aurora", "--price", "1500"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["aurum", "catalog", "-vv", "--config", "/tmp/aurum.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/aurum.toml")));
    }
}
