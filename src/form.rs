//! POP仕様の対話入力

use crate::error::{PopMakerError, Result};
use dialoguer::Input;
use pop_maker_common::PopParameters;

/// 各項目を現在値を初期値として順に入力させる
pub fn edit_parameters(params: PopParameters) -> Result<PopParameters> {
    println!("【POP仕様】 Enterでそのまま採用します\n");

    Ok(PopParameters {
        purpose: ask("目的", &params.purpose)?,
        width: ask_number("幅 (px)", &params.width)?,
        height: ask_number("高さ (px)", &params.height)?,
        min_chars: ask_number("最小文字数", &params.min_chars)?,
        max_chars: ask_number("最大文字数", &params.max_chars)?,
        extra_text: ask("文字の追加情報", &params.extra_text)?,
        color_scheme: ask("色づかい", &params.color_scheme)?,
        illustration_style: ask("イラストテイスト", &params.illustration_style)?,
        composition: ask("構図", &params.composition)?,
        design_info: ask("デザイン作成ルール", &params.design_info)?,
        catch_copy: ask("キャッチコピー", &params.catch_copy)?,
        output_format: params.output_format,
    })
}

fn ask(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PopMakerError::Input(e.to_string()))
}

fn ask_number(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err("数値を入力してください")
            }
        })
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(|e| PopMakerError::Input(e.to_string()))
}
