//! Cloud Functions API定義
//!
//! エンドポイントURLの組み立てと、レスポンスの成功/失敗判定。
//! HTTP送信そのものはCLI(reqwest)とWeb(fetch)がそれぞれ行う。

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// デフォルトのCloud FunctionsベースURL
pub const DEFAULT_BASE_URL: &str = "https://us-central1-ai-image-creater.cloudfunctions.net";

const UNEXPECTED_ERROR_MESSAGE: &str = "予期せぬエラーが発生しました。";
const NETWORK_ERROR_MESSAGE: &str = "ネットワークエラーまたはサーバーへの接続に失敗しました。";

/// 呼び出すエンドポイント
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    /// キャッチコピー生成
    Chat { prompt: &'a str },
    /// POP画像生成（CSVアップロードも同じ関数）
    GenerateImage { prompt: &'a str, size: Option<&'a str> },
    /// 投票数一覧
    VoteCounts,
    /// 投票画像の取得
    Image { name: &'a str },
    /// 投票
    Vote { item: &'a str },
}

impl Endpoint<'_> {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Chat { .. } => "chat_with_openai",
            Endpoint::GenerateImage { .. } => "generate_and_save_image",
            Endpoint::VoteCounts => "get_vote_counts",
            Endpoint::Image { .. } => "get_image",
            Endpoint::Vote { .. } => "vote_counter",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::GenerateImage { .. } => "POST",
            _ => "GET",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::Chat { prompt } => vec![("prompt", *prompt)],
            Endpoint::GenerateImage { prompt, size } => {
                let mut query = vec![("prompt", *prompt)];
                if let Some(size) = size {
                    query.push(("size", *size));
                }
                query
            }
            Endpoint::VoteCounts => Vec::new(),
            Endpoint::Image { name } => vec![("image_name", *name)],
            Endpoint::Vote { item } => vec![("item", *item)],
        }
    }
}

/// エンドポイントURLの組み立て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// クエリ値をエンコード済みの完全なURL
    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        let mut url = format!("{}/{}", self.base_url, endpoint.path());
        for (i, (key, value)) in endpoint.query().into_iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&encode_query_component(value));
        }
        url
    }

    /// ランキングのアバター画像URL
    pub fn image_url(&self, name: &str) -> String {
        self.url(&Endpoint::Image { name })
    }
}

/// encodeURIComponent がエンコードしない記号を除いた集合
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// encodeURIComponent と同じ規則でパーセントエンコード
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// 呼び出し種別（メッセージの既定値が画面ごとに異なる）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Chat,
    GeneratePop,
    UploadCsv,
    Vote,
}

impl CallKind {
    fn success_message(&self, server: Option<&str>) -> String {
        match self {
            CallKind::Chat => server.unwrap_or_default().to_string(),
            CallKind::GeneratePop => server.unwrap_or("POP creation successful!").to_string(),
            CallKind::UploadCsv => format!(
                "アップロード成功: {}",
                server.unwrap_or("データが正常に処理されました。")
            ),
            CallKind::Vote => server.unwrap_or("投票しました。").to_string(),
        }
    }

    fn error_message(&self, status: u16, server: Option<&str>) -> String {
        match self {
            CallKind::Chat => server
                .map(str::to_string)
                .unwrap_or_else(|| format!("API request failed with status: {}", status)),
            CallKind::GeneratePop => server
                .unwrap_or("Something went wrong on the server.")
                .to_string(),
            CallKind::UploadCsv => format!(
                "APIエラー: {}",
                server.unwrap_or("不明なエラーが発生しました。")
            ),
            CallKind::Vote => server
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP Error! status: {}", status)),
        }
    }

    fn failure_message(&self, failure: CallFailure) -> String {
        match (self, failure) {
            (CallKind::UploadCsv, _) => NETWORK_ERROR_MESSAGE.to_string(),
            (_, CallFailure::Known(message)) => message,
            (_, CallFailure::Unknown) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

/// 送信またはパースの失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// メッセージを持つ失敗（通信エラー、JSON不正など）
    Known(String),
    /// 内容を取り出せない失敗
    Unknown,
}

impl CallFailure {
    pub fn known(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            CallFailure::Unknown
        } else {
            CallFailure::Known(message)
        }
    }
}

/// 1回の呼び出し結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    pub message: String,
}

impl ApiResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// レスポンスを成功/失敗に分類
///
/// - 2xx かつボディがパースできれば成功（`message` → `reply` の順に採用）
/// - ただし 2xx でも `success: false`、または `error` のみのボディは失敗扱い
/// - 2xx 以外は失敗（`error` → `message` の順に採用）
/// - 送信/パース失敗はその内容をメッセージにする
pub fn classify(kind: CallKind, status: u16, body: Result<Value, CallFailure>) -> ApiResult {
    let is_ok = (200..300).contains(&status);

    let body = match body {
        Ok(body) => body,
        Err(failure) if is_ok => return ApiResult::error(kind.failure_message(failure)),
        Err(_) => return ApiResult::error(kind.error_message(status, None)),
    };

    let message = non_empty_str(&body, "message").or_else(|| non_empty_str(&body, "reply"));
    let error = non_empty_str(&body, "error");

    if !is_ok {
        return ApiResult::error(kind.error_message(status, error.or(message)));
    }

    let reported_failure = body.get("success").and_then(Value::as_bool) == Some(false);
    if reported_failure || (error.is_some() && message.is_none()) {
        let server = error.or(message);
        return ApiResult::error(kind.error_message(status, server));
    }

    ApiResult::ok(kind.success_message(message))
}

/// 送信前に失敗したとき（通信エラー）の分類
pub fn classify_failure(kind: CallKind, failure: CallFailure) -> ApiResult {
    ApiResult::error(kind.failure_message(failure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_message() {
        let result = classify(CallKind::GeneratePop, 200, Ok(json!({"message": "ok"})));
        assert_eq!(result, ApiResult::ok("ok"));
    }

    #[test]
    fn test_server_error_with_error_field() {
        let result = classify(CallKind::GeneratePop, 500, Ok(json!({"error": "bad"})));
        assert_eq!(result, ApiResult::error("bad"));
    }

    #[test]
    fn test_transport_failure_message() {
        let result = classify_failure(CallKind::GeneratePop, CallFailure::known("timeout"));
        assert_eq!(result, ApiResult::error("timeout"));
    }

    #[test]
    fn test_unknown_failure_fallback() {
        let result = classify_failure(CallKind::Chat, CallFailure::Unknown);
        assert_eq!(result, ApiResult::error(UNEXPECTED_ERROR_MESSAGE));
        assert_eq!(CallFailure::known(""), CallFailure::Unknown);
    }

    #[test]
    fn test_success_fallback_when_message_missing() {
        let result = classify(CallKind::GeneratePop, 200, Ok(json!({})));
        assert_eq!(result, ApiResult::ok("POP creation successful!"));
    }

    #[test]
    fn test_error_fallback_when_body_unparsable() {
        let result = classify(CallKind::GeneratePop, 502, Err(CallFailure::known("EOF")));
        assert_eq!(result, ApiResult::error("Something went wrong on the server."));
    }

    #[test]
    fn test_parse_failure_on_ok_status() {
        let result = classify(CallKind::GeneratePop, 200, Err(CallFailure::known("expected value")));
        assert_eq!(result, ApiResult::error("expected value"));
    }

    #[test]
    fn test_chat_reply() {
        let body = json!({"success": true, "reply": "1. ひらけ！まほうの本"});
        let result = classify(CallKind::Chat, 200, Ok(body));
        assert_eq!(result, ApiResult::ok("1. ひらけ！まほうの本"));
    }

    #[test]
    fn test_chat_error_in_ok_body() {
        let result = classify(CallKind::Chat, 200, Ok(json!({"error": "Prompt is missing."})));
        assert_eq!(result, ApiResult::error("Prompt is missing."));
    }

    #[test]
    fn test_chat_status_fallback() {
        let result = classify(CallKind::Chat, 503, Ok(json!({})));
        assert_eq!(result, ApiResult::error("API request failed with status: 503"));
    }

    #[test]
    fn test_error_field_preferred_over_message() {
        let body = json!({"error": "quota", "message": "ignored"});
        let result = classify(CallKind::GeneratePop, 429, Ok(body));
        assert_eq!(result.message, "quota");
    }

    #[test]
    fn test_upload_messages() {
        let ok = classify(CallKind::UploadCsv, 200, Ok(json!({"message": "成功しました！"})));
        assert_eq!(ok, ApiResult::ok("アップロード成功: 成功しました！"));

        let ng = classify(CallKind::UploadCsv, 400, Ok(json!({})));
        assert_eq!(ng, ApiResult::error("APIエラー: 不明なエラーが発生しました。"));

        let net = classify_failure(CallKind::UploadCsv, CallFailure::known("refused"));
        assert_eq!(net, ApiResult::error(NETWORK_ERROR_MESSAGE));
    }

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_query_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_query_component("感"), "%E6%84%9F");
        assert_eq!(encode_query_component("a\nb"), "a%0Ab");
        assert_eq!(encode_query_component("100%/?#"), "100%25%2F%3F%23");
    }

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new("https://example.com/fn/");
        assert_eq!(
            endpoints.url(&Endpoint::Chat { prompt: "hi there" }),
            "https://example.com/fn/chat_with_openai?prompt=hi%20there"
        );
        assert_eq!(
            endpoints.url(&Endpoint::GenerateImage { prompt: "p", size: Some("1536x1024") }),
            "https://example.com/fn/generate_and_save_image?prompt=p&size=1536x1024"
        );
        assert_eq!(
            endpoints.url(&Endpoint::VoteCounts),
            "https://example.com/fn/get_vote_counts"
        );
        assert_eq!(
            endpoints.image_url("ねこ.png"),
            "https://example.com/fn/get_image?image_name=%E3%81%AD%E3%81%93.png"
        );
        assert_eq!(
            endpoints.url(&Endpoint::Vote { item: "a" }),
            "https://example.com/fn/vote_counter?item=a"
        );
    }

    #[test]
    fn test_endpoint_methods() {
        assert_eq!(Endpoint::GenerateImage { prompt: "", size: None }.method(), "POST");
        assert_eq!(Endpoint::Chat { prompt: "" }.method(), "GET");
        assert_eq!(Endpoints::default().base_url(), DEFAULT_BASE_URL);
    }
}
