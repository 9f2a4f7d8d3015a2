use clap::Parser;
use colored::Colorize;
use cookie_bookie::api::{BookieApi, ConfigAction};
use cookie_bookie::config::BookieConfig;
use cookie_bookie::confirm::{AssumeYes, Confirm};
use cookie_bookie::error::{BookieError, Result};
use cookie_bookie::model::RecipePayload;
use cookie_bookie::store::fs_backend::FsBackend;
use cookie_bookie::store::{Persistence, RecipeStore};
use directories::ProjectDirs;
use log::{debug, warn, LevelFilter};
use std::path::PathBuf;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{
    print_config, print_full_recipes, print_messages, print_recipes, short_id,
};
use cli::prompt::StdinConfirm;

const DATA_DIR_ENV: &str = "COOKIE_BOOKIE_DATA";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type Api = BookieApi<FsBackend>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            image,
            ingredients,
            steps,
        }) => handle_add(&mut api, RecipePayload::new(title, image, ingredients, steps)),
        Some(Commands::List { search }) => handle_list(&mut api, search),
        Some(Commands::Show { id }) => handle_show(&api, &id),
        Some(Commands::Edit {
            id,
            title,
            image,
            ingredients,
            steps,
        }) => handle_edit(&mut api, &id, title, image, ingredients, steps),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut api, &id, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut api, yes),
        Some(Commands::Seed) => handle_seed(&mut api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&mut api, None),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "cookie-bookie", "cookie-bookie")
        .ok_or_else(|| BookieError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_api(cli: &Cli) -> Result<Api> {
    let data_dir = resolve_data_dir(cli)?;
    debug!("using data directory {}", data_dir.display());

    let config = BookieConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {}", e);
        BookieConfig::default()
    });

    let persistence = Persistence::new(FsBackend::new(data_dir.clone()))
        .with_key(config.storage_key.clone())
        .with_pretty(config.pretty_json);
    let store = RecipeStore::open(persistence);
    Ok(BookieApi::new(store, data_dir))
}

/// Accepts a full id or the short id printed by `list`.
fn resolve_id(api: &Api, input: &str) -> Option<String> {
    let input = input.trim();
    let recipes = api.store().recipes();
    if let Some(recipe) = recipes.iter().find(|r| r.id == input) {
        return Some(recipe.id.clone());
    }
    let mut matches = recipes.iter().filter(|r| short_id(&r.id) == input);
    match (matches.next(), matches.next()) {
        (Some(recipe), None) => Some(recipe.id.clone()),
        _ => None,
    }
}

fn not_found(input: &str) -> Result<()> {
    println!("{}", format!("No recipe matches {}", input).yellow());
    Ok(())
}

fn handle_add(api: &mut Api, payload: RecipePayload) -> Result<()> {
    let result = api.submit(&payload)?;
    print_full_recipes(&result.affected_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &mut Api, search: Option<String>) -> Result<()> {
    let result = api.search(search.as_deref().unwrap_or(""));
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &Api, input: &str) -> Result<()> {
    let Some(id) = resolve_id(api, input) else {
        return not_found(input);
    };
    let result = api.show(&id);
    print_full_recipes(&result.listed_recipes);
    Ok(())
}

fn handle_edit(
    api: &mut Api,
    input: &str,
    title: Option<String>,
    image: Option<String>,
    ingredients: Option<String>,
    steps: Option<String>,
) -> Result<()> {
    let Some(id) = resolve_id(api, input) else {
        return not_found(input);
    };
    let opened = api.begin_edit(&id);
    let Some(mut form) = opened.form else {
        return not_found(input);
    };
    if title.is_none() && image.is_none() && ingredients.is_none() && steps.is_none() {
        api.cancel_edit();
        return Err(BookieError::Api(
            "Nothing to change: pass --title, --image, --ingredients or --steps".into(),
        ));
    }

    if let Some(title) = title {
        form.title = title;
    }
    if let Some(image) = image {
        form.image = image;
    }
    if let Some(ingredients) = ingredients {
        form.ingredients = ingredients;
    }
    if let Some(steps) = steps {
        form.steps = steps;
    }

    let result = api.submit(&form)?;
    print_full_recipes(&result.affected_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

fn handle_delete(api: &mut Api, input: &str, yes: bool) -> Result<()> {
    let Some(id) = resolve_id(api, input) else {
        return not_found(input);
    };
    let mut confirm = confirmer(yes);
    let result = api.delete(&id, confirm.as_mut());
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut Api, yes: bool) -> Result<()> {
    let mut confirm = confirmer(yes);
    let result = api.clear_all(confirm.as_mut());
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(api: &mut Api) -> Result<()> {
    let result = api.seed();
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
