//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StderrLog, TeeLog,
};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{DataUriImageSource, FileKeyValueStore, FileSettingsLoader, TheMealDbClient};
use crate::ports::outbound::{KeyValueStore, SettingsLoader};
use crate::usecase::app::{ObsDeps, RecipesDeps, RecipesUseCase, SearchDeps};
use crate::usecase::recipe_store::RecipeStore;

/// ログファイル名（state_dir/logs 配下）
const LOG_FILE_NAME: &str = "recipes.jsonl";

/// 配線で組み立てたアプリ（main の Command ディスパッチで利用）
pub struct App {
    pub use_case: RecipesUseCase,
    /// 構造化ログ（ファイルへ JSONL、-v なら stderr にも）
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_recipes(verbose: bool, data_dir: Option<&str>) -> Result<App, Error> {
    wire_recipes_with(Arc::new(StdEnvResolver), verbose, data_dir)
}

/// 環境変数の解決だけ差し替えて組み立てる（テストからも使う）
pub fn wire_recipes_with(
    env: Arc<dyn EnvResolver>,
    verbose: bool,
    data_dir: Option<&str>,
) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let dirs = env.resolve_dirs()?;

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        dirs.logs_dir().join(LOG_FILE_NAME),
    ));
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    };

    let settings = FileSettingsLoader::new(
        Arc::clone(&fs),
        Arc::clone(&env),
        Arc::clone(&logger),
        dirs.config_file(),
    )
    .load();

    let store_dir = data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs.data_dir.clone());
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(Arc::clone(&fs), store_dir));
    let store = RecipeStore::new(kv, Arc::clone(&clock), Arc::clone(&logger));

    let use_case = RecipesUseCase::new(RecipesDeps {
        store,
        images: Arc::new(DataUriImageSource::new(Arc::clone(&fs))),
        search: SearchDeps {
            searcher: Arc::new(TheMealDbClient::new(settings.base_url.clone())),
            clock,
            settings,
        },
        obs: ObsDeps {
            log: Arc::clone(&logger),
        },
    });

    Ok(App { use_case, logger })
}

