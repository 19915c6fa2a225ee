use crate::catalog;
use colored::Colorize;
use doig_config::AppPaths;

/// ツールカタログを更新
pub async fn handle(paths: &AppPaths, url: Option<String>) -> anyhow::Result<()> {
    let url = url.unwrap_or_else(doig_config::tools_url);
    let written = catalog::update_catalog(&url, paths).await?;

    let catalog = doig_core::load_catalog(&paths.tools_dir())?;
    println!(
        "{}",
        format!(
            "[*] {} files extracted, {} tools available",
            written,
            catalog.len()
        )
        .green()
    );
    println!("  {}", paths.root().display().to_string().cyan());
    Ok(())
}
