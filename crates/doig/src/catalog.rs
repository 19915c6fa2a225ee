use colored::Colorize;
use doig_config::{AppPaths, TOOLS_DIR_NAME};
use doig_core::Catalog;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use std::time::Duration;
use zip::ZipArchive;

/// カタログを読み込む。未取得の場合は先にダウンロードする
///
/// 進捗メッセージは stderr に出力し、stdout はコマンドの出力だけにする。
pub async fn load_or_bootstrap(paths: &AppPaths) -> anyhow::Result<Catalog> {
    if !paths.is_initialized() {
        eprintln!(
            "{}",
            format!(
                "[*] ツールカタログが見つかりません（{}）",
                paths.tools_dir().display()
            )
            .yellow()
        );
        update_catalog(&doig_config::tools_url(), paths).await?;
    }

    Ok(doig_core::load_catalog(&paths.tools_dir())?)
}

/// リモートのアーカイブからツールカタログを更新
pub async fn update_catalog(url: &str, paths: &AppPaths) -> anyhow::Result<usize> {
    eprintln!("{}", "[*] Updating tools ...".green());
    tracing::debug!(url, dest = %paths.root().display(), "Updating tool catalog");

    paths.ensure_root()?;

    let archive = download(url).await.map_err(|e| {
        eprintln!("{}", "[X] Error downloading tools ...".red());
        e
    })?;

    let written = unpack_catalog(&archive, paths.root()).map_err(|e| {
        eprintln!("{}", "[X] Error unzipping tools ...".red());
        e
    })?;

    tracing::info!(files = written, "Tool catalog updated");
    Ok(written)
}

async fn download(url: &str) -> anyhow::Result<Vec<u8>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    spinner.set_message(format!("Downloading {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fetch(url).await;
    spinner.finish_and_clear();
    result
}

async fn fetch(url: &str) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .user_agent("doig")
        .timeout(Duration::from_secs(120))
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "カタログを取得できませんでした: {} ({})",
            response.status(),
            url
        ));
    }

    Ok(response.bytes().await?.to_vec())
}

/// zipアーカイブを展開し、書き込んだファイル数を返す
///
/// GitHubのアーカイブのように全エントリが1つのディレクトリ
/// （例: `doig-tools-master/`）に入っている場合、そのディレクトリは取り除きます。
pub fn unpack_catalog(bytes: &[u8], dest: &Path) -> anyhow::Result<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let wrapper = wrapper_dir(&archive);
    if let Some(dir) = &wrapper {
        tracing::debug!(wrapper = %dir.display(), "Stripping archive root directory");
    }

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let relative = entry.enclosed_name().map(Path::to_path_buf).ok_or_else(|| {
            anyhow::anyhow!("不正なパスを含むアーカイブです: {}", entry.name())
        })?;

        let relative = match &wrapper {
            Some(dir) => relative
                .strip_prefix(dir)
                .map(Path::to_path_buf)
                .unwrap_or(relative),
            None => relative,
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = dest.join(&relative);
        if entry.is_dir() {
            std::fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        std::io::copy(&mut entry, &mut out)?;
        tracing::debug!(file = %relative.display(), "Extracted");
        written += 1;
    }

    Ok(written)
}

/// 全エントリに共通する最上位ディレクトリ（tools/ 自体は除く）
fn wrapper_dir<R: Read + Seek>(archive: &ZipArchive<R>) -> Option<PathBuf> {
    let mut root: Option<PathBuf> = None;

    for name in archive.file_names() {
        let mut components = Path::new(name).components();
        let first = PathBuf::from(components.next()?.as_os_str());

        // 最上位に直接ファイルがある
        if components.next().is_none() && !name.ends_with('/') {
            return None;
        }

        match &root {
            Some(existing) if *existing != first => return None,
            Some(_) => {}
            None => root = Some(first),
        }
    }

    root.filter(|dir| dir.as_path() != Path::new(TOOLS_DIR_NAME))
}
