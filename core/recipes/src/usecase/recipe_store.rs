//! ローカルレシピストア
//!
//! コレクションの唯一の書き手。`my-recipes` キー 1 つに全件を保存し、
//! 変更のたびに丸ごと書き直す（部分更新・ロック・マージはしない）。

use crate::domain::{default_recipes, NewRecipe, Recipe, RecipeId};
use crate::ports::outbound::KeyValueStore;
use crate::usecase::migration::{self, Decoded};
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// コレクションを保存するキー（ブラウザ版と同じ名前）
pub const STORAGE_KEY: &str = "my-recipes";

pub struct RecipeStore {
    kv: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl RecipeStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, log: Arc<dyn Log>) -> Self {
        Self { kv, clock, log }
    }

    /// 保存済みコレクションを返す。
    ///
    /// 未保存なら既定レシピを書き込んで返す。旧形式なら移行して書き戻す。
    /// 壊れた JSON はそのままエラーで返す。
    pub fn load(&self) -> Result<Vec<Recipe>, Error> {
        let Some(raw) = self.kv.get(STORAGE_KEY)? else {
            let recipes = default_recipes();
            self.save(&recipes)?;
            self.log(
                LogRecord::new(LogLevel::Info, "seeded default recipes")
                    .kind("store")
                    .field("count", recipes.len()),
            );
            return Ok(recipes);
        };

        match migration::decode(&raw)? {
            Decoded::Current(recipes) => Ok(recipes),
            Decoded::Upgraded {
                from_version,
                recipes,
            } => {
                self.save(&recipes)?;
                self.log(
                    LogRecord::new(LogLevel::Info, "upgraded stored recipes")
                        .kind("migration")
                        .field("from_version", from_version)
                        .field("to_version", migration::CURRENT_SCHEMA_VERSION)
                        .field("count", recipes.len()),
                );
                Ok(recipes)
            }
            Decoded::ResetToDefaults { from_version } => {
                let recipes = default_recipes();
                self.save(&recipes)?;
                self.log(
                    LogRecord::new(
                        LogLevel::Warn,
                        "stored recipes predate ingredients; replaced with defaults",
                    )
                    .kind("migration")
                    .field("from_version", from_version)
                    .field("to_version", migration::CURRENT_SCHEMA_VERSION),
                );
                Ok(recipes)
            }
        }
    }

    /// レシピを追加して更新後のコレクションを返す。必須項目が空なら何も変えずにエラー。
    pub fn add(&self, new_recipe: NewRecipe) -> Result<Vec<Recipe>, Error> {
        new_recipe.validate()?;

        let mut recipes = self.load()?;
        let id = self.next_id(&recipes)?;
        recipes.push(new_recipe.into_recipe(id));
        self.save(&recipes)?;
        self.log(
            LogRecord::new(LogLevel::Info, "recipe added")
                .kind("store")
                .field("id", id.value())
                .field("count", recipes.len()),
        );
        Ok(recipes)
    }

    /// 該当 ID を除いて保存し直す。無い ID でもエラーにしない。
    pub fn remove(&self, id: RecipeId) -> Result<Vec<Recipe>, Error> {
        let mut recipes = self.load()?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        self.save(&recipes)?;
        self.log(
            LogRecord::new(LogLevel::Info, "recipe removed")
                .kind("store")
                .field("id", id.value())
                .field("removed", before - recipes.len()),
        );
        Ok(recipes)
    }

    /// 保存済みコレクションから ID が一致する最初のレコードを返す
    pub fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, Error> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    fn save(&self, recipes: &[Recipe]) -> Result<(), Error> {
        let raw = migration::encode(recipes)?;
        self.kv.set(STORAGE_KEY, &raw)
    }

    /// 現在時刻ミリ秒を ID にする。既存 ID 以下なら最大値 + 1 にずらして一意性を保つ。
    /// 最大値が u64::MAX なら採番できないのでエラー。
    fn next_id(&self, existing: &[Recipe]) -> Result<RecipeId, Error> {
        let now = self.clock.now_ms();
        match existing.iter().map(|r| r.id.value()).max() {
            Some(max) if max >= now => max
                .checked_add(1)
                .map(RecipeId::new)
                .ok_or_else(|| Error::json("recipe id space exhausted")),
            _ => Ok(RecipeId::new(now)),
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("usecase"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryKeyValueStore;
    use crate::tests::support::FixedClock;
    use common::adapter::NoopLog;

    fn store_with(kv: Arc<MemoryKeyValueStore>, now_ms: u64) -> RecipeStore {
        RecipeStore::new(kv, Arc::new(FixedClock::new(now_ms)), Arc::new(NoopLog))
    }

    #[test]
    fn test_next_id_is_bumped_past_existing() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_with(kv.clone(), 2);
        let recipes = store
            .add(NewRecipe {
                title: "t".into(),
                short_desc: "s".into(),
                ingredients: "i".into(),
                steps: "d".into(),
                image: None,
            })
            .unwrap();
        // 既定レシピの ID は 1..=3 なので時刻 2 は衝突する
        assert_eq!(recipes.last().unwrap().id, RecipeId::new(4));
    }

    #[test]
    fn test_upgrade_writes_current_format_back() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set(
            STORAGE_KEY,
            r#"[{"id":9,"title":"T","shortDesc":"S","ingredients":"a","desc":"b"}]"#,
        )
        .unwrap();
        let store = store_with(kv.clone(), 100);

        let recipes = store.load().unwrap();
        assert_eq!(recipes.len(), 1);
        let raw = kv.get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            migration::decode(&raw).unwrap(),
            Decoded::Current(recipes)
        );
    }
}
