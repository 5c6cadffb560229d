use clap::Parser;
use pop_maker::{cli, client, config, error, form, intake, logging, progress, ranking};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::{PopMakerError, Result};
use logging::info;
use pop_maker_common::{
    build_copy_prompt, build_pop_prompt, ApiResult, CopyRules, RankingView, RequestState,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose);
    let config = Config::load()?;
    info!("base url: {}", config.base_url);

    let mut state = RequestState::new();

    match cli.command {
        Commands::Copy { csv, rules, rules_file } => {
            println!("💡 pop-maker - キャッチコピー生成\n");

            let (file, thoughts) = intake::load_csv(&csv)?;
            println!("✔ 選択されたファイル: {} ({})", file.name, file.size_kb_label());
            println!("\n【みんなの感想】\n{}\n", thoughts);

            let rules = match (rules, rules_file) {
                (Some(text), _) => CopyRules(text),
                (None, Some(path)) => CopyRules(std::fs::read_to_string(path)?),
                (None, None) => CopyRules::default(),
            };
            if rules.is_empty() {
                return Err(PopMakerError::Config("コピー作成ルールが空です".into()));
            }

            let client = ApiClient::from_config(&config)?;
            let prompt = build_copy_prompt(&rules, &thoughts);
            let result = progress::with_loading(&mut state, "キャッチコピー案作成中...", client.chat(&prompt)).await;

            report(&result, "【コピーの生成案】")?;
        }

        Commands::Pop { csv, thoughts_file, params, interactive, dry_run } => {
            println!("🎨 pop-maker - POP作成\n");

            let thoughts = match (csv, thoughts_file) {
                (Some(path), _) => intake::load_csv(&path)?.1,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => String::new(),
            };

            let mut params = params.into_parameters();
            if interactive {
                params = form::edit_parameters(params)?;
            }
            let prompt = build_pop_prompt(&params, &thoughts);

            if dry_run {
                println!("{}", prompt);
                println!("size={}", params.size_param());
                return Ok(());
            }

            let client = ApiClient::from_config(&config)?;
            let result = progress::with_loading(
                &mut state,
                "POP を作成中...",
                client.generate_pop(&prompt, &params.size_param()),
            )
            .await;

            report(&result, "")?;
        }

        Commands::Upload { csv } => {
            println!("📤 pop-maker - CSVファイルアップロード\n");

            let (file, prompt) = intake::load_csv(&csv)?;
            println!("✔ 選択されたファイル: {} ({})", file.name, file.size_kb_label());

            let client = ApiClient::from_config(&config)?;
            let result = progress::with_loading(&mut state, "アップロード中...", client.upload_csv(&file, &prompt)).await;

            report(&result, "")?;
        }

        Commands::Ranking { json } => {
            let client = ApiClient::from_config(&config)?;
            let view = RankingView::from_fetch(client.vote_counts().await.inspect_err(|e| {
                logging::error!("フェッチエラー: {}", e);
            }));

            match (&view, json) {
                (RankingView::Loaded(ranking), true) => {
                    println!("{}", serde_json::to_string_pretty(ranking.entries())?);
                }
                _ => print!("{}", ranking::render(&view, client.endpoints())),
            }
        }

        Commands::Vote { item } => {
            let client = ApiClient::from_config(&config)?;
            let result = progress::with_loading(&mut state, "投票中...", client.vote(&item)).await;
            report(&result, "")?;
        }

        Commands::Image { name, output } => {
            let client = ApiClient::from_config(&config)?;
            let bytes = client.fetch_image(&name).await?;
            let output = output.unwrap_or_else(|| std::path::PathBuf::from(&name));
            std::fs::write(&output, &bytes)?;
            println!("✔ 画像を保存: {} ({} bytes)", output.display(), bytes.len());
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

/// 結果を表示する。失敗はエラーとして返し、表示は main に任せる
fn report(result: &ApiResult, heading: &str) -> Result<()> {
    if !result.success {
        return Err(PopMakerError::Api(result.clone()));
    }

    if !heading.is_empty() {
        println!("{}", heading);
    }
    println!("{}", result.message);
    println!("\n✅ 完了");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_failure_is_returned_not_printed() {
        let err = report(&ApiResult::error("HTTP Error! status: 500"), "").unwrap_err();
        assert!(matches!(err, PopMakerError::Api(_)));
        assert_eq!(err.to_string(), "API呼び出しエラー: HTTP Error! status: 500");
    }

    #[test]
    fn test_report_success() {
        assert!(report(&ApiResult::ok("POP creation successful!"), "").is_ok());
    }
}
