use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use recipe_catalog::config::{load_config, load_config_from};
use recipe_catalog::{Catalog, PrepTime, Recipe, RecipeFilter, Servings};

/// Browse the recipe catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "recipe-catalog", version, about)]
struct Cli {
    /// Config file to read instead of ./catalog.toml
    #[arg(long, global = true, env = "RECIPE_CATALOG_CONFIG")]
    config: Option<String>,

    /// JSON dataset to load instead of the configured one
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Seed for popular and related picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every recipe
    List,
    /// List cuisine tags
    Cuisines,
    /// Popular picks followed by a preview of each cuisine
    Home,
    /// Show one recipe, optionally scaled to a serving count
    Show {
        id: String,
        #[arg(long)]
        servings: Option<u32>,
    },
    /// Recipes of one cuisine, optionally narrowed down
    Cuisine {
        name: String,
        #[arg(long)]
        search: Option<String>,
        /// quick, medium or long
        #[arg(long, value_parser = parse_prep_time)]
        prep: Option<PrepTime>,
    },
    /// A random selection of recipes
    Popular {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Recipes whose name or ingredients contain a term
    Search { term: String },
    /// Add or remove a favorite
    Favorite { id: String },
    /// List favorites
    Favorites,
}

fn parse_prep_time(s: &str) -> Result<PrepTime, String> {
    s.parse()
}

fn print_summary(recipe: &Recipe) {
    println!(
        "{:<22} {:<28} {:<9} {:>4} min  {}",
        recipe.id, recipe.name, recipe.cuisine, recipe.prep_time, recipe.difficulty
    );
}

fn print_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
    }
    for recipe in recipes {
        print_summary(recipe);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(file) => load_config_from(file)?,
        None => load_config()?,
    };
    if cli.dataset.is_some() {
        config.dataset = cli.dataset.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    debug!("{:#?}", config);

    let mut catalog = Catalog::from_config(&config)?;

    match cli.command {
        Command::List => {
            let all: Vec<&Recipe> = catalog.all().iter().collect();
            print_list(&all);
        }
        Command::Cuisines => {
            for cuisine in catalog.cuisines() {
                println!("{} ({})", cuisine, catalog.by_cuisine(cuisine).len());
            }
        }
        Command::Home => {
            println!("Popular:");
            print_list(&catalog.popular(config.popular_limit));
            for group in catalog.grouped_by_cuisine(config.cuisine_preview_limit) {
                println!("\n{} Cuisine:", group.cuisine);
                print_list(&group.recipes);
            }
        }
        Command::Show { id, servings } => {
            let Some(recipe) = catalog.by_id(&id) else {
                return Err(format!("No recipe with id '{}'", id).into());
            };
            let servings = servings.map_or_else(|| Servings::for_recipe(recipe), Servings::new);

            println!("{} ({})", recipe.name, recipe.cuisine);
            println!("{}", recipe.description);
            println!(
                "Prep {} min, cook {} min, {} | {} servings{}",
                recipe.prep_time,
                recipe.cook_time,
                recipe.difficulty,
                servings.get(),
                if catalog.is_favorite(&recipe.id) { " | favorite" } else { "" }
            );
            println!("\nIngredients:");
            for line in recipe_catalog::scale_recipe(recipe, servings.get())? {
                println!("  - {}", line);
            }
            println!("\nInstructions:");
            for (step, text) in recipe.instructions.iter().enumerate() {
                println!("  {}. {}", step + 1, text);
            }
            let related = catalog.related_to(recipe, config.related_limit);
            if !related.is_empty() {
                println!("\nRelated:");
                for other in related {
                    println!("  {} ({})", other.name, other.id);
                }
            }
        }
        Command::Cuisine { name, search, prep } => {
            let filter = RecipeFilter {
                cuisine: Some(name),
                search,
                prep_time: prep,
            };
            print_list(&catalog.filter(&filter));
        }
        Command::Popular { limit } => {
            print_list(&catalog.popular(limit.unwrap_or(config.popular_limit)));
        }
        Command::Search { term } => {
            print_list(&catalog.search(&term));
        }
        Command::Favorite { id } => {
            if catalog.by_id(&id).is_none() {
                return Err(format!("No recipe with id '{}'", id).into());
            }
            if catalog.toggle_favorite(&id)? {
                println!("Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
        }
        Command::Favorites => {
            print_list(&catalog.favorites());
        }
    }

    Ok(())
}
