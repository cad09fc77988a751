//! ユースケース層（ports::outbound の trait 経由でのみ I/O を行う）

pub mod app;
pub mod meals;
pub mod migration;
pub mod recipe_store;
pub mod search_loop;
pub mod search_session;
