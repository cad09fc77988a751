//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "recipes";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|s| !s.is_empty())
    }

    fn home_dir(&self) -> Option<HomeDir> {
        self.var("RECIPES_HOME").map(PathBuf::from).map(HomeDir::new)
    }

    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = self.home_dir() {
            return Ok(Dirs::under_home(home.as_path()));
        }

        let home = self.var("HOME").map(PathBuf::from);
        let xdg = |key: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
            let base = self
                .var(key)
                .map(PathBuf::from)
                .or_else(|| {
                    home.as_ref().map(|h| {
                        let mut p = h.clone();
                        for seg in fallback {
                            p.push(seg);
                        }
                        p
                    })
                })
                .ok_or_else(|| Error::env(format!("neither {} nor HOME is set", key)))?;
            Ok(base.join(APP_DIR_NAME))
        };

        Ok(Dirs {
            config_dir: xdg("XDG_CONFIG_HOME", &[".config"])?,
            data_dir: xdg("XDG_DATA_HOME", &[".local", "share"])?,
            state_dir: xdg("XDG_STATE_HOME", &[".local", "state"])?,
        })
    }
}
