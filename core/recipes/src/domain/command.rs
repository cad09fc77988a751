//! CLI から usecase へ渡すコマンド

use super::recipe::{NewRecipe, RecipeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipesCommand {
    Help,
    /// 一覧表示（初回はここで既定レシピが投入される）
    List,
    /// 追加。`image_path` はローカルファイルなら data URI に変換して保存する
    Add {
        recipe: NewRecipe,
        image_path: Option<String>,
    },
    Remove { id: RecipeId },
    Show { id: RecipeId },
    /// query が None なら stdin から 1 行ずつクエリを読むデバウンス検索
    Search { query: Option<String> },
    Desserts,
}
