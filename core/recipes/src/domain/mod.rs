//! recipes 固有のドメイン型（型と不変条件）

pub mod command;
pub mod defaults;
pub mod meal;
pub mod recipe;
pub mod search;

pub use command::RecipesCommand;
pub use defaults::{default_recipes, DEFAULT_IMAGE};
pub use meal::{MealList, MealSummary, DESSERT_CATEGORY};
pub use recipe::{NewRecipe, Recipe, RecipeId, RecipeValidationError};
pub use search::{ResponseOrdering, SearchPhase, SearchRequest, SearchSettings, SearchSnapshot};
