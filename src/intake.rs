//! ローカルのCSVファイル取り込み

use crate::error::{PopMakerError, Result};
use crate::logging::debug;
use pop_maker_common::{
    intake::guess_mime_type, FileIntake, IntakeError, IntakeOutcome, UploadedFile,
};
use std::path::Path;

/// パスからファイルを読み込む（CSVかどうかはまだ判定しない）
pub fn read_file(path: &Path) -> Result<UploadedFile> {
    if !path.is_file() {
        return Err(PopMakerError::FileNotFound(path.display().to_string()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;
    let mime_type = guess_mime_type(&name);

    Ok(UploadedFile::new(name, mime_type, bytes))
}

/// CSVを読み込み、Shift_JISとしてデコードした感想テキストを返す
///
/// CSV以外はデコードせずに [`IntakeError::NotCsv`] を返す。
pub fn load_csv(path: &Path) -> Result<(UploadedFile, String)> {
    let file = read_file(path)?;
    let name = file.name.clone();

    let mut intake = FileIntake::new();
    let mut thoughts = String::new();
    if intake.accept(vec![file], |text| thoughts = text.to_string()) != IntakeOutcome::Accepted {
        return Err(IntakeError::NotCsv { name }.into());
    }

    let file = intake
        .selected()
        .cloned()
        .ok_or_else(|| PopMakerError::FileNotFound(path.display().to_string()))?;
    debug!("{} を読み込みました ({})", file.name, file.size_kb_label());
    Ok((file, thoughts))
}
