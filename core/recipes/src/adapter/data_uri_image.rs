//! 画像ファイルを data URI に変換して取り込む ImageSource 実装
//!
//! URL・data URI と、ローカルに存在しない `/` 始まりのパス（Web の静的パス）はそのまま保存する。
//! それ以外はローカルファイルとして読み、
//! `data:<mime>;base64,<payload>` に変換する（圧縮・縮小はしない）。

use crate::ports::outbound::ImageSource;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

pub struct DataUriImageSource {
    fs: Arc<dyn FileSystem>,
}

impl DataUriImageSource {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ImageSource for DataUriImageSource {
    fn resolve(&self, reference: &str) -> Result<String, Error> {
        let path = Path::new(reference);
        if is_url_like(reference) || (reference.starts_with('/') && !self.fs.exists(path)) {
            return Ok(reference.to_string());
        }
        if !self.fs.metadata(path)?.is_file() {
            return Err(Error::invalid_argument(format!(
                "Image is not a file: '{}'",
                path.display()
            )));
        }
        let bytes = self.fs.read(path)?;
        Ok(format!(
            "data:{};base64,{}",
            mime_for(path),
            STANDARD.encode(bytes)
        ))
    }
}

fn is_url_like(reference: &str) -> bool {
    reference.starts_with("data:")
        || reference.starts_with("http://")
        || reference.starts_with("https://")
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    fn source() -> DataUriImageSource {
        DataUriImageSource::new(Arc::new(StdFileSystem))
    }

    #[test]
    fn test_local_file_becomes_data_uri() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cake.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = source().resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_urls_and_web_paths_are_kept() {
        let s = source();
        assert_eq!(s.resolve("https://x/y.jpg").unwrap(), "https://x/y.jpg");
        assert_eq!(
            s.resolve("/bolustrawberry-not-on-disk.png").unwrap(),
            "/bolustrawberry-not-on-disk.png"
        );
        assert_eq!(s.resolve("data:image/gif;base64,R0").unwrap(), "data:image/gif;base64,R0");
    }

    #[test]
    fn test_missing_relative_file_is_error() {
        let err = source().resolve("no-such-dir/nope.jpg").unwrap_err();
        assert!(err.to_string().contains("nope.jpg"));
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(mime_for(Path::new("a.heic")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
    }
}
