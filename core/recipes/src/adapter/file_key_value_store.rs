//! キー・値ストレージをディレクトリ内の `<key>.json` で実現するアダプタ
//!
//! 書き込みは一時ファイル + rename で置き換える。ロックはしないので、
//! 複数プロセスが同時に書くと最後に rename した側が勝つ。

use crate::ports::outbound::KeyValueStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    fn path(&self, key: &str) -> Result<PathBuf, Error> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::invalid_argument(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key)?;
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key)?;
        self.fs.create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        self.fs.write(&tmp, value)?;
        self.fs.rename(&tmp, &path).map_err(|e| {
            // 置き換えに失敗した一時ファイルは残さない
            let _ = self.fs.remove_file(&tmp);
            e
        })
    }
}
