use chrono::{DateTime, Utc};
use colored::Colorize;
use cookie_bookie::api::{CmdMessage, MessageLevel};
use cookie_bookie::config::BookieConfig;
use cookie_bookie::model::Recipe;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const SHORT_ID_LEN: usize = 8;
const NO_IMAGE: &str = "🍪";
const IMAGE: &str = "🖼";

/// The tail of an id, which is its random part, so it stays distinct for recipes
/// created in the same instant.
pub fn short_id(id: &str) -> &str {
    let start = id.len().saturating_sub(SHORT_ID_LEN);
    id.get(start..).unwrap_or(id)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        if message.content.is_empty() {
            continue;
        }
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        let id = short_id(&recipe.id);
        let marker = if recipe.image.is_some() { IMAGE } else { NO_IMAGE };
        let time = format_time_ago(recipe.updated_at);
        let used = id.width() + marker.width() + 2 + TIME_WIDTH + 1;
        let title_room = LINE_WIDTH.saturating_sub(used);
        let title = truncate_to_width(&recipe.title, title_room);
        let padding = title_room.saturating_sub(title.width());

        println!(
            "{} {} {}{} {}",
            id.yellow(),
            marker,
            title.bold(),
            " ".repeat(padding),
            time.dimmed()
        );

        let ingredients = recipe.ingredients.lines().collect::<Vec<_>>().join(" · ");
        println!(
            "    {}",
            truncate_to_width(&ingredients, LINE_WIDTH - 4).dimmed()
        );
    }
}

pub fn print_full_recipes(recipes: &[Recipe]) {
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", short_id(&recipe.id).yellow(), recipe.title.bold());
        println!(
            "{}",
            format!(
                "id {} · updated {}",
                recipe.id,
                recipe.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
        if let Some(image) = &recipe.image {
            println!("{} {}", IMAGE, image.underline());
        }
        println!("--------------------------------");
        println!("{}", "Ingredients".bold());
        for line in recipe.ingredients.lines() {
            println!("  • {}", line);
        }
        println!("{}", "Steps".bold());
        for (n, line) in recipe.steps.lines().enumerate() {
            println!("  {}. {}", n + 1, line);
        }
    }
}

pub fn print_config(config: &BookieConfig) {
    for key in BookieConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
