use clap::{Args, Parser, Subcommand};
use pop_maker_common::PopParameters;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pop-maker")]
#[command(about = "読書感想CSVからPOPコピー・POP画像を生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 感想CSVからキャッチコピー案を生成
    Copy {
        /// 感想CSVファイル（Shift_JIS）
        #[arg(required = true)]
        csv: PathBuf,

        /// コピー作成ルール（省略時は既定のルール）
        #[arg(long, conflicts_with = "rules_file")]
        rules: Option<String>,

        /// コピー作成ルールを記述したテキストファイル
        #[arg(long)]
        rules_file: Option<PathBuf>,
    },

    /// POP画像を生成
    Pop {
        /// 感想CSVファイル（Shift_JIS）
        #[arg(long, conflicts_with = "thoughts_file")]
        csv: Option<PathBuf>,

        /// 感想テキストファイル（UTF-8）
        #[arg(long)]
        thoughts_file: Option<PathBuf>,

        #[command(flatten)]
        params: PopArgs,

        /// 各項目を対話的に入力
        #[arg(short, long)]
        interactive: bool,

        /// 送信せずにプロンプトだけを表示
        #[arg(long)]
        dry_run: bool,
    },

    /// CSVファイルをそのままアップロードして画像を生成
    Upload {
        /// 感想CSVファイル
        #[arg(required = true)]
        csv: PathBuf,
    },

    /// 投票ランキングを表示
    Ranking {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 投票する
    Vote {
        /// 投票する項目名（画像名）
        #[arg(required = true)]
        item: String,
    },

    /// 投票画像をダウンロード
    Image {
        /// 画像名
        #[arg(required = true)]
        name: String,

        /// 保存先（省略時は画像名）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// Cloud FunctionsのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// POP仕様（省略した項目は既定値）
#[derive(Args, Clone, Debug, Default)]
pub struct PopArgs {
    /// 目的
    #[arg(long)]
    pub purpose: Option<String>,

    /// 幅 (px)
    #[arg(long)]
    pub width: Option<u32>,

    /// 高さ (px)
    #[arg(long)]
    pub height: Option<u32>,

    /// 最小文字数
    #[arg(long)]
    pub min_chars: Option<u32>,

    /// 最大文字数
    #[arg(long)]
    pub max_chars: Option<u32>,

    /// 文字の追加情報
    #[arg(long)]
    pub extra_text: Option<String>,

    /// 色づかい
    #[arg(long)]
    pub color_scheme: Option<String>,

    /// イラストテイスト
    #[arg(long)]
    pub illustration_style: Option<String>,

    /// 構図
    #[arg(long)]
    pub composition: Option<String>,

    /// デザイン作成ルール
    #[arg(long)]
    pub design_info: Option<String>,

    /// 利用する固定のキャッチコピー
    #[arg(long)]
    pub catch_copy: Option<String>,
}

impl PopArgs {
    /// 既定値に指定項目を上書きしたパラメータ
    pub fn into_parameters(self) -> PopParameters {
        let mut params = PopParameters::default();
        let set = |target: &mut String, value: Option<String>| {
            if let Some(value) = value {
                *target = value;
            }
        };

        set(&mut params.purpose, self.purpose);
        set(&mut params.width, self.width.map(|v| v.to_string()));
        set(&mut params.height, self.height.map(|v| v.to_string()));
        set(&mut params.min_chars, self.min_chars.map(|v| v.to_string()));
        set(&mut params.max_chars, self.max_chars.map(|v| v.to_string()));
        set(&mut params.extra_text, self.extra_text);
        set(&mut params.color_scheme, self.color_scheme);
        set(&mut params.illustration_style, self.illustration_style);
        set(&mut params.composition, self.composition);
        set(&mut params.design_info, self.design_info);
        set(&mut params.catch_copy, self.catch_copy);
        params
    }
}
