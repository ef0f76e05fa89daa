use anyhow::Context;
use clap::Parser;
use flashcard_index::{builder, cli, config, output};
use builder::{BuildOptions, MalformedPolicy};
use cli::{Cli, Commands, GenerateArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG優先、--verboseでdebug、それ以外はwarn
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "flashcard_index=debug"
        } else {
            "flashcard_index=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        None => generate(cli.generate)?,
        Some(Commands::Generate(args)) => generate(args)?,

        Some(Commands::Check { base_dir, order }) => {
            let config = load_config()?;
            let options = BuildOptions {
                owner: config.resolve_owner(None),
                site: config.resolve_site(None),
                order: order.unwrap_or(config.order),
                ids: config.ids,
                on_malformed: MalformedPolicy::Skip,
            };
            let outcome = builder::build_document(&base_dir, &options)?;

            for category in &outcome.document.categories {
                println!("{}: {} items", category.path, category.items.len());
            }
            for entry in &outcome.skipped {
                println!("✘ {}: {}", entry.path.display(), entry.reason);
            }

            if !outcome.skipped.is_empty() {
                anyhow::bail!("不正な名前が{}件あります", outcome.skipped.len());
            }
            println!("✔ 問題なし");
        }

        Some(Commands::Config { set_owner, set_site, show }) => {
            let mut config = load_config()?;

            if let Some(owner) = set_owner {
                config.set_owner(owner)?;
                println!("✔ 所有者を設定しました");
            }

            if let Some(site) = set_site {
                config.set_site(site)?;
                println!("✔ サイト名を設定しました");
            }

            if show {
                println!("設定:");
                println!("  所有者: {}", config.resolve_owner(None));
                println!("  サイト名: {}", config.resolve_site(None));
                println!("  並び順: {}", config.order);
                println!("  ID方式: {}", config.ids);
            }
        }
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    Config::load().context("設定ファイルの読み込みに失敗")
}

/// 生成中のエラーはすべて1行表示してから返す
fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let result = run_generate(&args);
    if let Err(e) = &result {
        println!("Error generating JSON: {:#}", e);
    }
    result
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let base_dir = args
        .base_dir
        .canonicalize()
        .with_context(|| {
            format!("フォルダが見つかりません: {}", args.base_dir.display())
        })?;

    let options = BuildOptions {
        owner: config.resolve_owner(args.owner.as_deref()),
        site: config.resolve_site(args.site.as_deref()),
        order: args.order.unwrap_or(config.order),
        ids: args.ids.unwrap_or(config.ids),
        on_malformed: if args.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        },
    };

    let outcome = builder::build_document(&base_dir, &options)?;
    if !outcome.skipped.is_empty() {
        eprintln!("⚠ {}件の不正な名前をスキップしました", outcome.skipped.len());
    }

    let output_path = base_dir.join(&args.output);
    output::write_document(&outcome.document, &output_path, args.create_dirs)?;

    println!("{}", output::Summary::of(&outcome.document, &output_path));
    Ok(())
}
