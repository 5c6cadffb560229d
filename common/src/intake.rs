//! CSVファイル取り込み
//!
//! ドロップ/選択されたファイルを検証し、Shift_JISとしてデコードする。
//! 複数ファイルの場合は先頭の1つだけを扱う。

use encoding_rs::SHIFT_JIS;
use thiserror::Error;

/// CSV以外が選択されたときの表示メッセージ
pub const NOT_CSV_MESSAGE: &str = "CSVファイルのみアップロード可能です。";

/// アップロード時にファイルが未選択のときの表示メッセージ
pub const NO_FILE_MESSAGE: &str = "ファイルが選択されていません。";

const CSV_MIME_TYPE: &str = "text/csv";

/// 取り込み検証エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeError {
    #[error("CSVファイルではありません: {name}")]
    NotCsv { name: String },
}

/// 選択されたファイル
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// "12.34 KB" 形式のサイズ表示
    pub fn size_kb_label(&self) -> String {
        format!("{:.2} KB", self.size() as f64 / 1024.0)
    }

    pub fn is_csv(&self) -> bool {
        is_csv(&self.name, &self.mime_type)
    }
}

/// 宣言されたMIMEタイプかファイル名でCSVか判定
pub fn is_csv(name: &str, mime_type: &str) -> bool {
    mime_type == CSV_MIME_TYPE || name.ends_with(".csv")
}

/// 拡張子からMIMEタイプを推定（.csv以外は汎用タイプ）
pub fn guess_mime_type(name: &str) -> &'static str {
    if name.ends_with(".csv") {
        CSV_MIME_TYPE
    } else {
        "application/octet-stream"
    }
}

/// バイト列をShift_JISとしてデコード
///
/// 先頭にBOMがあればBOMのエンコーディングを優先する。
/// 不正なバイト列は U+FFFD に置き換えられ、失敗はしない。
pub fn decode_shift_jis(bytes: &[u8]) -> String {
    let (text, _, _) = SHIFT_JIS.decode(bytes);
    text.into_owned()
}

/// 取り込み結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// ファイルなし（何もしない）
    Ignored,
    /// CSV以外のため拒否
    Rejected,
    /// デコードしてコールバックへ渡した
    Accepted,
}

/// ファイル取り込みの状態
#[derive(Debug, Clone, Default)]
pub struct FileIntake {
    selected: Option<UploadedFile>,
    decoded: String,
    error: Option<String>,
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// ドロップ/選択イベントを処理する
    ///
    /// CSVのときだけ `on_decoded` を呼ぶ。CSV以外はエラーメッセージを保持し、
    /// 以前に選択したファイルとテキストはそのまま残す。
    pub fn accept<F>(&mut self, files: Vec<UploadedFile>, on_decoded: F) -> IntakeOutcome
    where
        F: FnOnce(&str),
    {
        let Some(file) = files.into_iter().next() else {
            return IntakeOutcome::Ignored;
        };

        if Self::validate(&file).is_err() {
            self.error = Some(NOT_CSV_MESSAGE.to_string());
            return IntakeOutcome::Rejected;
        }

        self.error = None;
        self.decoded = decode_shift_jis(&file.bytes);
        self.selected = Some(file);
        on_decoded(&self.decoded);
        IntakeOutcome::Accepted
    }

    pub fn validate(file: &UploadedFile) -> Result<(), IntakeError> {
        if file.is_csv() {
            Ok(())
        } else {
            Err(IntakeError::NotCsv {
                name: file.name.clone(),
            })
        }
    }

    pub fn selected(&self) -> Option<&UploadedFile> {
        self.selected.as_ref()
    }

    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
