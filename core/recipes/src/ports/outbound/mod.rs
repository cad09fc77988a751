//! Outbound ポート: アプリが外界（ストレージ・外部 API・画像・表示）を使うための trait

pub mod image_source;
pub mod key_value_store;
pub mod meal_search;
pub mod search_view;
pub mod settings_loader;

pub use image_source::ImageSource;
pub use key_value_store::KeyValueStore;
pub use meal_search::MealSearch;
pub use search_view::SearchView;
pub use settings_loader::SettingsLoader;
