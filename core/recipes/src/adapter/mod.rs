//! Outbound ポートの実装（ストレージ・外部 API・画像・設定・表示）

pub(crate) mod data_uri_image;
pub(crate) mod file_key_value_store;
#[cfg(test)]
pub(crate) mod memory_key_value_store;
pub(crate) mod settings;
pub(crate) mod stdin_queries;
pub(crate) mod terminal_search_view;
pub(crate) mod themealdb;

pub(crate) use data_uri_image::DataUriImageSource;
pub(crate) use file_key_value_store::FileKeyValueStore;
#[cfg(test)]
pub(crate) use memory_key_value_store::MemoryKeyValueStore;
pub(crate) use settings::FileSettingsLoader;
pub(crate) use stdin_queries::spawn_stdin_queries;
pub(crate) use terminal_search_view::TerminalSearchView;
pub(crate) use themealdb::TheMealDbClient;
