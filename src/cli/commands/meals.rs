//! Meal browsing commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use super::Session;
use crate::cli::output::{format_meal_lines, print_formatted, MealSummary, OutputFormat};
use crate::meal::{Ingredient, Meal};

#[derive(Subcommand, Debug)]
pub enum MealsCommands {
    /// List meals, optionally searched and filtered
    List {
        /// Search meals by name
        #[arg(short, long)]
        search: Option<String>,

        /// Only show meals in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Number of pages to show
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },

    /// List the categories present in the catalogue
    Categories,

    /// Show a meal's details and ingredients
    Show {
        /// Meal ID
        id: String,
    },
}

#[derive(Serialize)]
struct ListResult {
    total: usize,
    shown: usize,
    has_more: bool,
    meals: Vec<MealSummary>,
}

#[derive(Serialize)]
struct DetailResult<'a> {
    #[serde(flatten)]
    summary: MealSummary,
    tags: Vec<&'a str>,
    instructions: Option<&'a str>,
    youtube: Option<&'a str>,
    source: Option<&'a str>,
    ingredients: Vec<Ingredient>,
}

pub async fn run(command: MealsCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    match command {
        MealsCommands::List {
            search,
            category,
            pages,
        } => list(search, category, pages, format).await,
        MealsCommands::Categories => categories(format).await,
        MealsCommands::Show { id } => show(&id, format).await,
    }
}

/// Load the catalogue or fail with the browser's message
async fn load_catalogue(session: &mut Session) -> Result<()> {
    session.browser.fetch_all(&session.client).await;
    if let Some(error) = session.browser.error() {
        anyhow::bail!("{}", error);
    }
    Ok(())
}

async fn list(
    search: Option<String>,
    category: Option<String>,
    pages: u32,
    format: OutputFormat,
) -> Result<()> {
    let mut session = Session::open()?;
    load_catalogue(&mut session).await?;

    let browser = &mut session.browser;
    if let Some(category) = &category {
        if !browser.categories().iter().any(|c| c == category) {
            tracing::warn!("Category {} is not in the catalogue", category);
        }
        browser.filter_by_category(category, &session.client).await;
    }
    if let Some(search) = search {
        browser.search_query = search;
        browser.search_meals(&session.client).await;
    }
    for _ in 1..pages {
        if !browser.has_more() {
            break;
        }
        browser.load_more();
    }

    let meals: Vec<MealSummary> = browser
        .current_displayed_meals()
        .iter()
        .map(|m| MealSummary::new(m, browser.is_favorite(&m.id)))
        .collect();
    let result = ListResult {
        total: browser.current_meals().len(),
        shown: meals.len(),
        has_more: browser.has_more(),
        meals,
    };

    print_formatted(&result, format, |r| {
        if r.meals.is_empty() {
            return "No meals found".to_string();
        }
        let mut lines = format_meal_lines(&r.meals);
        if r.has_more {
            lines.push(format!(
                "\nShowing {} of {} meals (use --pages to see more)",
                r.shown, r.total
            ));
        }
        lines.join("\n")
    });

    Ok(())
}

async fn categories(format: OutputFormat) -> Result<()> {
    let mut session = Session::open()?;
    load_catalogue(&mut session).await?;

    let categories = session.browser.categories().to_vec();
    print_formatted(&categories, format, |c| {
        if c.is_empty() {
            "No categories found".to_string()
        } else {
            c.join("\n")
        }
    });

    Ok(())
}

async fn show(id: &str, format: OutputFormat) -> Result<()> {
    let session = Session::open()?;
    let meal = session
        .client
        .lookup(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Meal not found: {}", id))?;

    let result = DetailResult {
        summary: MealSummary::new(&meal, session.browser.is_favorite(&meal.id)),
        tags: meal.tag_list(),
        instructions: meal.instructions.as_deref(),
        youtube: meal.youtube.as_deref(),
        source: meal.source.as_deref(),
        ingredients: meal.ingredients(),
    };

    print_formatted(&result, format, |r| format_detail(&meal, r));

    Ok(())
}

fn format_detail(meal: &Meal, detail: &DetailResult<'_>) -> String {
    let mut lines = Vec::new();
    let heart = if detail.summary.favorite { " ♥" } else { "" };
    lines.push(format!("{}{}", meal.name, heart));

    let origin: Vec<&str> = [meal.category.as_deref(), meal.area.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if !origin.is_empty() {
        lines.push(origin.join(" · "));
    }
    if !detail.tags.is_empty() {
        lines.push(format!("Tags: {}", detail.tags.join(", ")));
    }

    lines.push(String::new());
    lines.push("Ingredients:".to_string());
    for Ingredient { ingredient, measure } in &detail.ingredients {
        if measure.is_empty() {
            lines.push(format!("  - {}", ingredient));
        } else {
            lines.push(format!("  - {} {}", measure, ingredient));
        }
    }

    if let Some(instructions) = detail.instructions.filter(|s| !s.trim().is_empty()) {
        lines.push(String::new());
        lines.push("Instructions:".to_string());
        lines.push(instructions.trim().to_string());
    }
    if let Some(url) = detail.youtube.filter(|s| !s.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Video:  {}", url));
    }
    if let Some(url) = detail.source.filter(|s| !s.is_empty()) {
        lines.push(format!("Source: {}", url));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::meal;

    #[test]
    fn test_format_detail_lists_ingredients() {
        let mut m = meal("52771", "Spicy Arrabiata Penne", Some("Vegetarian"));
        m.area = Some("Italian".to_string());
        m.instructions = Some("Boil the pasta.\n".to_string());
        m.extra
            .insert("strIngredient1".to_string(), serde_json::json!("penne rigate"));
        m.extra
            .insert("strMeasure1".to_string(), serde_json::json!("1 pound"));
        m.extra
            .insert("strIngredient2".to_string(), serde_json::json!("olive oil"));

        let detail = DetailResult {
            summary: MealSummary::new(&m, true),
            tags: m.tag_list(),
            instructions: m.instructions.as_deref(),
            youtube: None,
            source: None,
            ingredients: m.ingredients(),
        };
        let text = format_detail(&m, &detail);

        assert!(text.starts_with("Spicy Arrabiata Penne ♥\nVegetarian · Italian"));
        assert!(text.contains("  - 1 pound penne rigate"));
        assert!(text.contains("  - olive oil"));
        assert!(text.ends_with("Instructions:\nBoil the pasta."));
    }
}
