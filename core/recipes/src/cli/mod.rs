//! CLI 境界: 引数解析と表示用の整形

pub mod args;
pub mod render;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
