use crate::error::{BuildError, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use tar::Builder;

/// ビルドコンテキスト内のDockerfile名
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// イメージに含めるツール一覧ファイル名
pub const MANIFEST_NAME: &str = "tools.txt";

pub struct ContextBuilder;

impl ContextBuilder {
    /// Dockerfileとツール一覧からビルドコンテキスト(tar.gz)を作成
    ///
    /// `manifest` が空の場合は tools.txt を含めません。
    pub fn create_context(dockerfile: &str, manifest: Option<&str>) -> Result<Vec<u8>> {
        let mut archive_data = Vec::new();
        {
            let encoder = GzEncoder::new(&mut archive_data, Compression::default());
            let mut tar = Builder::new(encoder);

            Self::append_file(&mut tar, DOCKERFILE_NAME, dockerfile.as_bytes())?;

            if let Some(manifest) = manifest.filter(|m| !m.is_empty()) {
                Self::append_file(&mut tar, MANIFEST_NAME, manifest.as_bytes())?;
            }

            tar.into_inner()?.finish()?;
        }

        tracing::debug!("Build context created: {} bytes", archive_data.len());
        Ok(archive_data)
    }

    fn append_file<W: std::io::Write>(
        tar: &mut Builder<W>,
        name: &str,
        content: &[u8],
    ) -> Result<()> {
        let mut header = tar::Header::new_gnu();
        header.set_path(name).map_err(|e| {
            BuildError::InvalidConfig(format!("Failed to set {} path: {}", name, e))
        })?;
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append(&header, content).map_err(BuildError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn unpack(archive: Vec<u8>) -> tempfile::TempDir {
        let extract_dir = tempdir().unwrap();
        let decoder = flate2::read::GzDecoder::new(std::io::Cursor::new(archive));
        let mut tar = tar::Archive::new(decoder);
        tar.unpack(extract_dir.path()).unwrap();
        extract_dir
    }

    #[test]
    fn test_create_context_with_manifest() {
        let archive =
            ContextBuilder::create_context("FROM alpine\nCOPY tools.txt .", Some("nmap\n"))
                .unwrap();
        assert!(!archive.is_empty());

        let extract_dir = unpack(archive);
        assert_eq!(
            fs::read_to_string(extract_dir.path().join(DOCKERFILE_NAME)).unwrap(),
            "FROM alpine\nCOPY tools.txt ."
        );
        assert_eq!(
            fs::read_to_string(extract_dir.path().join(MANIFEST_NAME)).unwrap(),
            "nmap\n"
        );
    }

    #[test]
    fn test_create_context_without_manifest() {
        let archive = ContextBuilder::create_context("FROM alpine", None).unwrap();

        let extract_dir = unpack(archive);
        assert!(extract_dir.path().join(DOCKERFILE_NAME).exists());
        assert!(!extract_dir.path().join(MANIFEST_NAME).exists());
    }

    #[test]
    fn test_create_context_empty_manifest_is_skipped() {
        let archive = ContextBuilder::create_context("FROM alpine", Some("")).unwrap();

        let extract_dir = unpack(archive);
        assert!(!extract_dir.path().join(MANIFEST_NAME).exists());
    }
}
