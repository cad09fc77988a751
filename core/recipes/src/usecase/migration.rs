//! 保存形式のバージョン管理と移行
//!
//! - v1: ブラウザ版そのままの素の JSON 配列（バージョン情報なし）
//! - v2: `{"version": 2, "recipes": [...]}`（現行）
//!
//! v1 → v2 の移行で、先頭レコードに材料が無い配列は「材料導入前の古いデータ」とみなし、
//! 既定レシピで丸ごと置き換える。移行結果は呼び出し側が即座に書き戻すので一度しか走らない。

use crate::domain::{Recipe, RecipeId};
use common::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;
const LEGACY_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredCollectionRef<'a> {
    version: u32,
    recipes: &'a [Recipe],
}

#[derive(Deserialize)]
struct StoredCollection {
    version: u32,
    #[serde(default)]
    recipes: Value,
}

/// v1 のレコード（テキスト項目が欠けていることがある）
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRecipe {
    id: RecipeId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    short_desc: Option<String>,
    #[serde(default)]
    ingredients: Option<String>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

impl From<LegacyRecipe> for Recipe {
    fn from(r: LegacyRecipe) -> Self {
        Recipe {
            id: r.id,
            title: r.title.unwrap_or_default(),
            short_desc: r.short_desc.unwrap_or_default(),
            ingredients: r.ingredients.unwrap_or_default(),
            steps: r.desc.unwrap_or_default(),
            image: r.image,
        }
    }
}

/// 読み込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// 現行形式。書き戻し不要
    Current(Vec<Recipe>),
    /// 旧形式から変換した。書き戻しが必要
    Upgraded { from_version: u32, recipes: Vec<Recipe> },
    /// 旧形式のデータを破棄して既定レシピに置き換える。書き戻しが必要
    ResetToDefaults { from_version: u32 },
}

/// 保存された文字列を解釈する。想定外の形は致命的エラー（復旧しない）。
pub fn decode(raw: &str) -> Result<Decoded, Error> {
    let doc: Value = serde_json::from_str(raw)
        .map_err(|e| Error::json(format!("Stored recipes are not valid JSON: {}", e)))?;

    match doc {
        Value::Array(items) => migrate_v1_to_v2(items),
        Value::Object(_) => {
            let stored: StoredCollection = serde_json::from_value(doc)
                .map_err(|e| Error::json(format!("Stored recipes document is malformed: {}", e)))?;
            match stored.version {
                CURRENT_SCHEMA_VERSION => {
                    let recipes: Vec<Recipe> = serde_json::from_value(stored.recipes)
                        .map_err(|e| Error::json(format!("Stored recipe is malformed: {}", e)))?;
                    Ok(Decoded::Current(recipes))
                }
                LEGACY_SCHEMA_VERSION => match stored.recipes {
                    Value::Array(items) => migrate_v1_to_v2(items),
                    _ => Err(Error::json("Stored v1 recipes are not an array")),
                },
                v => Err(Error::json(format!(
                    "Unsupported recipes schema version {} (supported: {}..={})",
                    v, LEGACY_SCHEMA_VERSION, CURRENT_SCHEMA_VERSION
                ))),
            }
        }
        _ => Err(Error::json("Stored recipes must be an array or a versioned object")),
    }
}

/// 現行形式で直列化する
pub fn encode(recipes: &[Recipe]) -> Result<String, Error> {
    serde_json::to_string(&StoredCollectionRef {
        version: CURRENT_SCHEMA_VERSION,
        recipes,
    })
    .map_err(|e| Error::json(e.to_string()))
}

fn migrate_v1_to_v2(items: Vec<Value>) -> Result<Decoded, Error> {
    if items
        .first()
        .is_some_and(|first| is_falsy(first.get("ingredients")))
    {
        return Ok(Decoded::ResetToDefaults {
            from_version: LEGACY_SCHEMA_VERSION,
        });
    }

    let recipes = items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<LegacyRecipe>(item)
                .map(Recipe::from)
                .map_err(|e| Error::json(format!("Stored v1 recipe is malformed: {}", e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Decoded::Upgraded {
        from_version: LEGACY_SCHEMA_VERSION,
        recipes,
    })
}

/// ブラウザ版の `!record.ingredients` と同じ判定
fn is_falsy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
