mod catalog;
mod commands;
mod utils;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use doig_config::AppPaths;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doig")]
#[command(
    about = "必要なツールだけを入れたDockerイメージを作成します",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// アプリケーションディレクトリ（デフォルト: $DOIG_PATH または ~/.doig）
    #[arg(long, global = true, value_name = "DIR")]
    app_dir: Option<PathBuf>,

    /// 詳細なログを出力
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// ツールの選択（ツール名とカテゴリ）
#[derive(Args, Debug, Default)]
struct Selection {
    /// ツール名（スペース区切りで複数指定可）
    #[arg(short = 't', long = "tools", value_name = "TOOL", num_args = 1..)]
    tools: Vec<String>,

    /// カテゴリ名（スペース区切りで複数指定可、all で全ツール）
    #[arg(short = 'c', long = "category", value_name = "CATEGORY", num_args = 1..)]
    categories: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成されるDockerfileを表示
    Dockerfile {
        #[command(flatten)]
        selection: Selection,
    },
    /// Dockerイメージをビルド
    Build {
        /// イメージ名（小文字に変換されます）
        #[arg(short, long)]
        image: String,
        #[command(flatten)]
        selection: Selection,
        /// キャッシュを使用しない
        #[arg(long)]
        no_cache: bool,
    },
    /// 利用可能なツールとカテゴリを表示
    List,
    /// ツールカタログを更新
    Update {
        /// カタログアーカイブのURL（デフォルト: $DOIG_TOOLS_URL または公式カタログ）
        #[arg(long)]
        url: Option<String>,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), error_message(&e));
        std::process::exit(1);
    }
}

/// ログはstderrに出力（RUST_LOG が優先）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn error_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<doig_build::BuildError>() {
        Some(build_error) => build_error.user_message(),
        None => format!("{:#}", e),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Versionコマンドはカタログ不要
    if matches!(cli.command, Commands::Version) {
        println!("doig {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let paths = match cli.app_dir {
        Some(dir) => AppPaths::new(dir),
        None => AppPaths::discover()?,
    };
    tracing::debug!(app_dir = %paths.root().display(), "Using application directory");

    match cli.command {
        Commands::Dockerfile { selection } => {
            commands::dockerfile::handle(&paths, &selection.tools, &selection.categories).await?;
        }
        Commands::Build {
            image,
            selection,
            no_cache,
        } => {
            commands::build::handle(
                &paths,
                &image,
                &selection.tools,
                &selection.categories,
                no_cache,
            )
            .await?;
        }
        Commands::List => {
            let catalog = catalog::load_or_bootstrap(&paths).await?;
            commands::list::handle(&catalog);
        }
        Commands::Update { url } => {
            commands::update::handle(&paths, url).await?;
        }
        Commands::Version => {
            unreachable!("Version is handled before catalog loading");
        }
    }

    Ok(())
}
