use crate::catalog;
use crate::utils;
use colored::Colorize;
use doig_build::{ContextBuilder, ImageBuilder, normalize_tag};
use doig_config::AppPaths;
use doig_core::{DockerfileRenderer, resolve_toolset};

/// 選択したツールを含むイメージをビルド
pub async fn handle(
    paths: &AppPaths,
    image: &str,
    tools: &[String],
    categories: &[String],
    no_cache: bool,
) -> anyhow::Result<()> {
    let tag = normalize_tag(image)?;

    let catalog = catalog::load_or_bootstrap(paths).await?;
    let toolset = resolve_toolset(&catalog, tools, categories)?;

    let renderer = DockerfileRenderer::load(&paths.template_path())?;
    let dockerfile = renderer.render_for_build(&toolset)?;
    tracing::debug!("Generated Dockerfile:\n{}", dockerfile);

    let manifest = toolset.manifest();
    let context = ContextBuilder::create_context(&dockerfile, Some(&manifest))?;

    println!("{}", format!("[*] Building image {} ...", tag).green());
    let builder = ImageBuilder::connect().await?;
    builder.build_image(context, &tag, no_cache).await?;

    println!("{}", "\nTools added to the image:".green());
    for tool in toolset.tools() {
        if tool.comment.is_some() {
            println!("{}", format!("  [-] {}", tool.label()).yellow());
        } else {
            println!("{}", format!("  [-] {}", tool.label()).green());
        }
    }
    if toolset.is_empty() {
        utils::print_note("(none)");
    }

    Ok(())
}
