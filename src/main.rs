use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use foodgram::cli;

/// foodgram - recipes, shopping carts and shopping lists
#[derive(Parser)]
#[command(name = "foodgram")]
#[command(about = "Recipe sharing backend tools", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage the ingredient catalog
    Ingredients {
        #[command(subcommand)]
        command: IngredientsCommands,
    },
    /// Print or save the aggregated shopping list of a user
    ShoppingList {
        /// User id
        #[arg(long)]
        user: String,

        /// Write the list to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Change the role of a user
    SetRole {
        #[arg(long)]
        email: String,

        #[arg(long, value_enum)]
        role: cli::Role,
    },
}

#[derive(Subcommand)]
enum IngredientsCommands {
    /// Import catalog entries from a JSON fixture
    Import {
        /// Path to a JSON array of {"name", "measurement_unit"} objects
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodgram::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodgram::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Migrate => cli::migrate(&config).await,
        Commands::Reset => cli::reset(&config).await,
        Commands::Ingredients {
            command: IngredientsCommands::Import { path },
        } => {
            let inserted = cli::import_ingredients(&config, &path).await?;
            println!("{inserted} ingredients imported");

            Ok(())
        }
        Commands::ShoppingList { user, output } => {
            let text = cli::shopping_list(&config, &user).await?;

            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    tracing::info!("shopping list written to {}", path.display());
                }
                None => println!("{text}"),
            }

            Ok(())
        }
        Commands::SetRole { email, role } => cli::set_role(&config, &email, role).await,
    }
}
