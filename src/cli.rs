use clap::{Args, Parser, Subcommand};
use flashcard_index_common::IdStrategy;
use crate::scanner::EntryOrder;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashcard-index")]
#[command(about = "フラッシュカード画像フォルダからJSONインデックスを生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// サブコマンド省略時は generate として扱う
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カテゴリフォルダを走査して flashcards.json を生成
    Generate(GenerateArgs),

    /// 走査だけ行い、不正な名前を報告（ファイルは書かない）
    Check {
        /// カテゴリフォルダを含むフォルダ
        #[arg(default_value = ".")]
        base_dir: PathBuf,

        /// 並び順 (name/filesystem)
        #[arg(long)]
        order: Option<EntryOrder>,
    },

    /// 設定を表示/編集
    Config {
        /// リポジトリ所有者を設定
        #[arg(long)]
        set_owner: Option<String>,

        /// Pagesサイト名を設定
        #[arg(long)]
        set_site: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// カテゴリフォルダを含むフォルダ
    #[arg(default_value = ".")]
    pub base_dir: PathBuf,

    /// 出力JSONファイル（相対パスはベースフォルダ基準）
    #[arg(short, long, default_value = crate::output::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 画像URLのGitHub所有者（省略時: $GITHUB_REPOSITORY_OWNER → 設定 → sb2chun）
    #[arg(long)]
    pub owner: Option<String>,

    /// 画像URLのPagesサイト名
    #[arg(long)]
    pub site: Option<String>,

    /// 並び順 (name/filesystem)
    #[arg(long)]
    pub order: Option<EntryOrder>,

    /// ID生成方式 (positional/content)
    #[arg(long)]
    pub ids: Option<IdStrategy>,

    /// 不正な名前をスキップして続行
    #[arg(long)]
    pub skip_malformed: bool,

    /// 出力先フォルダがなければ作成
    #[arg(long)]
    pub create_dirs: bool,
}
