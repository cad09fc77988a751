use crate::domain::{MealSummary, NewRecipe, Recipe, RecipeId, SearchSettings, SearchSnapshot};
use crate::ports::outbound::{ImageSource, MealSearch, SearchView};
use crate::usecase::meals::MealCatalog;
use crate::usecase::recipe_store::RecipeStore;
use crate::usecase::search_loop::{SearchEvent, SearchLoop};
use crate::usecase::search_session::SearchSession;
use common::error::Error;
use common::ports::outbound::{Clock, Log};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct RecipesDeps {
    pub store: RecipeStore,
    pub images: Arc<dyn ImageSource>,
    pub search: SearchDeps,
    pub obs: ObsDeps,
}

pub struct SearchDeps {
    pub searcher: Arc<dyn MealSearch>,
    pub clock: Arc<dyn Clock>,
    pub settings: SearchSettings,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// recipes のユースケース（アダプター経由で I/O を行う）
///
/// 表示は CLI の責務のため、ここではデータのみ返す。
pub struct RecipesUseCase {
    deps: RecipesDeps,
    catalog: MealCatalog,
}

impl RecipesUseCase {
    pub fn new(deps: RecipesDeps) -> Self {
        let catalog = MealCatalog::new(Arc::clone(&deps.search.searcher), Arc::clone(&deps.obs.log));
        Self { deps, catalog }
    }

    pub fn list(&self) -> Result<Vec<Recipe>, Error> {
        self.deps.store.load()
    }

    /// 追加したレコードを返す。検証は画像の読み込みより先に行う。
    pub fn add(&self, mut recipe: NewRecipe, image: Option<&str>) -> Result<Recipe, Error> {
        recipe.validate()?;
        if let Some(reference) = image {
            recipe.image = Some(self.deps.images.resolve(reference)?);
        }
        let recipes = self.deps.store.add(recipe)?;
        recipes
            .into_iter()
            .last()
            .ok_or_else(|| Error::system("recipe store returned an empty collection after add"))
    }

    pub fn remove(&self, id: RecipeId) -> Result<Vec<Recipe>, Error> {
        self.deps.store.remove(id)
    }

    pub fn show(&self, id: RecipeId) -> Result<Option<Recipe>, Error> {
        self.deps.store.get_by_id(id)
    }

    pub fn search_once(&self, query: &str) -> Option<Vec<MealSummary>> {
        self.catalog.search_once(query)
    }

    pub fn desserts(&self) -> Option<Vec<MealSummary>> {
        self.catalog.desserts()
    }

    /// デバウンス検索のイベントループを回す（入力は `tx` 側から流し込まれる）
    pub fn search_interactive(
        &self,
        tx: Sender<SearchEvent>,
        rx: Receiver<SearchEvent>,
        view: &dyn SearchView,
    ) -> SearchSnapshot {
        let session = SearchSession::new(
            Arc::clone(&self.deps.search.clock),
            Arc::clone(&self.deps.obs.log),
            &self.deps.search.settings,
        );
        SearchLoop::new(session, Arc::clone(&self.deps.search.searcher)).run(tx, rx, view)
    }
}
