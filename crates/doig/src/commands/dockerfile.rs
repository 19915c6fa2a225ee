use crate::catalog;
use doig_config::AppPaths;
use doig_core::{DockerfileRenderer, resolve_toolset};

/// 生成したDockerfileを表示（ビルドはしない）
pub async fn handle(paths: &AppPaths, tools: &[String], categories: &[String]) -> anyhow::Result<()> {
    let catalog = catalog::load_or_bootstrap(paths).await?;
    let toolset = resolve_toolset(&catalog, tools, categories)?;

    let renderer = DockerfileRenderer::load(&paths.template_path())?;
    let dockerfile = renderer.render(&toolset)?;

    println!("\n{}", dockerfile);
    Ok(())
}
