//! Recipe command: rank cached recipes against current inventory.
//!
//! CHANGELOG:
//! - 10/15/2026 - Initial implementation

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use crate::db::{helpers, open_db};
use crate::matching::{rank_recipes, RankOptions, RecipeRanking};
use crate::output::OutputControls;

/// Load inventory and recipes, then rank.
pub fn suggest_recipes(conn: &Connection, options: &RankOptions) -> Result<RecipeRanking> {
    let inventory = helpers::load_inventory(conn)?;
    let recipes = helpers::load_recipes(conn, options.category.as_deref())?;
    info!(
        inventory = inventory.len(),
        recipes = recipes.len(),
        "Ranking recipes"
    );
    Ok(rank_recipes(&recipes, &inventory, options))
}

/// Print recipes the inventory can (nearly) cover.
pub fn run(db_path: &Path, options: RankOptions, out: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;
    let ranking = suggest_recipes(&conn, &options)?;

    if out.json {
        out.print(&ranking);
        return Ok(());
    }

    if ranking.recipes.is_empty() {
        println!(
            "No recipes reach {}% with at most {} missing ingredients.",
            ranking.filter.min_match_score, ranking.filter.max_missing
        );
        return Ok(());
    }

    println!(
        "Recipe Suggestions ({} inventory items):",
        ranking.total_inventory
    );
    println!("{:-<40}", "");
    for suggestion in &ranking.recipes {
        let marker = if suggestion.can_make_with_inventory { "*" } else { " " };
        println!(
            "{} {:>3}%  {}",
            marker, suggestion.match_score, suggestion.recipe.name
        );
        for ingredient in &suggestion.missing {
            println!("        missing: {}", ingredient.name);
        }
    }

    Ok(())
}
