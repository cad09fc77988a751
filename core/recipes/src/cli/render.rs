//! 表示用の文字列を組み立てる（出力は呼び出し側）

use crate::domain::{MealSummary, Recipe, SearchPhase, SearchSnapshot};
use std::fmt::Write;

const NO_IMAGE: &str = "No Image";
const DESSERTS_FAILED: &str = "Failed to load recipes or no recipes found.";

pub fn render_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "(no recipes)\n".to_string();
    }
    let mut out = String::new();
    for r in recipes {
        let _ = writeln!(out, "{:<15} {}", r.id, r.title);
        let _ = writeln!(out, "{:<15} {}", "", r.short_desc);
    }
    out
}

/// data URI は長いので種類と長さだけ出す
fn image_label(image: Option<&str>) -> String {
    match image {
        None | Some("") => NO_IMAGE.to_string(),
        Some(s) if s.starts_with("data:") => {
            let kind = s[5..].split(';').next().unwrap_or_default();
            format!("(embedded {}, {} bytes)", kind, s.len())
        }
        Some(s) => s.to_string(),
    }
}

pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "Image: {}", image_label(recipe.image.as_deref()));
    let _ = writeln!(out, "\"{}\"", recipe.short_desc);
    let _ = writeln!(out);

    let _ = writeln!(out, "Ingredients");
    let ingredients = recipe.ingredient_list();
    if ingredients.is_empty() {
        let _ = writeln!(out, "  (ingredients not filled in yet)");
    }
    for line in ingredients {
        let _ = writeln!(out, "  - {}", line);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Steps");
    let steps = recipe.step_list();
    if steps.is_empty() {
        let _ = writeln!(out, "  (steps not filled in yet)");
    }
    for line in steps {
        let _ = writeln!(out, "  {}", line);
    }
    out
}

pub fn render_meals(meals: &[MealSummary]) -> String {
    if meals.is_empty() {
        return "No recipes found.\n".to_string();
    }
    let mut out = String::new();
    for m in meals {
        let _ = writeln!(out, "{:<8} {}", m.id, m.name);
    }
    out
}

/// None（失敗・`meals: null`）だけが失敗表示。空リストは見出しだけ出す。
pub fn render_desserts(meals: Option<&[MealSummary]>) -> String {
    let Some(meals) = meals else {
        return format!("{}\n", DESSERTS_FAILED);
    };
    let mut out = "Dessert recipes from TheMealDB\n".to_string();
    for m in meals {
        let _ = writeln!(out, "{:<8} {}", m.id, m.name);
    }
    out
}

pub fn render_search_snapshot(snapshot: &SearchSnapshot) -> String {
    match (&snapshot.phase, &snapshot.results) {
        (SearchPhase::Debouncing { query, .. }, _) => format!("... {}\n", query),
        (SearchPhase::Loading { query, .. }, _) => format!("Searching for \"{}\"...\n", query),
        (SearchPhase::Idle, None) => "(search cleared)\n".to_string(),
        (SearchPhase::Idle, Some(meals)) => render_meals(meals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeId;
    use crate::tests::support::meal;

    fn recipe(ingredients: &str, steps: &str, image: Option<&str>) -> Recipe {
        Recipe {
            id: RecipeId::new(7),
            title: "Klepon".to_string(),
            short_desc: "Sweet rice balls".to_string(),
            ingredients: ingredients.to_string(),
            steps: steps.to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_detail_lists_lines() {
        let out = render_detail(&recipe("A\nB", "1. step", Some("/klepon.png")));
        assert!(out.contains("Image: /klepon.png"));
        assert!(out.contains("\"Sweet rice balls\""));
        assert!(out.contains("  - A\n  - B\n"));
        assert!(out.contains("  1. step\n"));
    }

    #[test]
    fn test_detail_empty_sections_and_no_image() {
        let out = render_detail(&recipe("", "", None));
        assert!(out.contains("Image: No Image"));
        assert!(out.contains("(ingredients not filled in yet)"));
        assert!(out.contains("(steps not filled in yet)"));
    }

    #[test]
    fn test_detail_shortens_data_uri() {
        let out = render_detail(&recipe("A", "B", Some("data:image/png;base64,iVBORw==")));
        assert!(out.contains("(embedded image/png, 30 bytes)"));
    }

    #[test]
    fn test_desserts_failure_message() {
        assert_eq!(render_desserts(None), "Failed to load recipes or no recipes found.\n");
        assert!(render_desserts(Some(&[meal("1", "Pavlova")])).contains("Pavlova"));
    }

    #[test]
    fn test_desserts_empty_list_keeps_heading() {
        assert_eq!(render_desserts(Some(&[])), "Dessert recipes from TheMealDB\n");
    }

    #[test]
    fn test_search_snapshot_states() {
        let idle = SearchSnapshot {
            phase: SearchPhase::Idle,
            results: Some(vec![]),
        };
        assert_eq!(render_search_snapshot(&idle), "No recipes found.\n");
        let cleared = SearchSnapshot {
            phase: SearchPhase::Idle,
            results: None,
        };
        assert_eq!(render_search_snapshot(&cleared), "(search cleared)\n");
    }
}
