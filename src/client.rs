//! Cloud Functions クライアント
//!
//! 1回の呼び出しごとに [`ApiResult`] を返す。通信エラーもHTTPエラーも
//! ここで表示用メッセージに正規化し、リトライはしない。

use crate::config::Config;
use crate::error::{PopMakerError, Result};
use crate::logging::{debug, warn};
use pop_maker_common::{
    classify, classify_failure, ApiResult, CallFailure, CallKind, Endpoint, Endpoints,
    UploadedFile, VoteCounts, VoteRanking,
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;

/// CSVを送るマルチパートのフィールド名
pub const CSV_FIELD_NAME: &str = "csvFile";

/// HTTPステータスとボディ（パース失敗を含む）
struct RawResponse {
    status: u16,
    body: std::result::Result<Value, CallFailure>,
}

pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoints })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoints(), config.timeout())
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn send(
        &self,
        endpoint: &Endpoint<'_>,
        form: Option<Form>,
    ) -> std::result::Result<RawResponse, CallFailure> {
        let url = self.endpoints.url(endpoint);
        debug!("{} {} ({} bytes)", endpoint.method(), endpoint.path(), url.len());

        let request = match endpoint.method() {
            "POST" => self.http.post(&url),
            _ => self.http.get(&url),
        };
        let request = match form {
            Some(form) => request.multipart(form),
            None if endpoint.method() == "POST" => {
                request.header(reqwest::header::CONTENT_TYPE, "application/json")
            }
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!("{} への送信に失敗: {}", endpoint.path(), e);
            CallFailure::known(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
                .map_err(|e| CallFailure::known(e.to_string())),
            Err(e) => Err(CallFailure::known(e.to_string())),
        };
        debug!("{} -> {} (body ok: {})", endpoint.path(), status, body.is_ok());

        Ok(RawResponse { status, body })
    }

    async fn call(&self, kind: CallKind, endpoint: Endpoint<'_>, form: Option<Form>) -> ApiResult {
        let result = match self.send(&endpoint, form).await {
            Ok(raw) => classify(kind, raw.status, raw.body),
            Err(failure) => classify_failure(kind, failure),
        };
        if !result.success {
            warn!("{} failed: {}", endpoint.path(), result.message);
        }
        result
    }

    /// キャッチコピー案生成（chat_with_openai）
    pub async fn chat(&self, prompt: &str) -> ApiResult {
        self.call(CallKind::Chat, Endpoint::Chat { prompt }, None).await
    }

    /// POP画像生成（generate_and_save_image, size付き）
    pub async fn generate_pop(&self, prompt: &str, size: &str) -> ApiResult {
        let endpoint = Endpoint::GenerateImage {
            prompt,
            size: Some(size),
        };
        self.call(CallKind::GeneratePop, endpoint, None).await
    }

    /// CSVファイルをマルチパートで送信
    pub async fn upload_csv(&self, file: &UploadedFile, prompt: &str) -> ApiResult {
        let part = match Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
        {
            Ok(part) => part,
            Err(e) => return classify_failure(CallKind::UploadCsv, CallFailure::known(e.to_string())),
        };
        let form = Form::new().part(CSV_FIELD_NAME, part);
        let endpoint = Endpoint::GenerateImage { prompt, size: None };
        self.call(CallKind::UploadCsv, endpoint, Some(form)).await
    }

    /// 投票（vote_counter）
    pub async fn vote(&self, item: &str) -> ApiResult {
        self.call(CallKind::Vote, Endpoint::Vote { item }, None).await
    }

    /// 投票数を取得してランキングにする
    pub async fn vote_counts(&self) -> Result<VoteRanking> {
        let raw = self
            .send(&Endpoint::VoteCounts, None)
            .await
            .map_err(|f| PopMakerError::Ranking(failure_text(f)))?;

        if !(200..300).contains(&raw.status) {
            return Err(PopMakerError::Ranking(format!(
                "HTTP Error! status: {}",
                raw.status
            )));
        }
        let body = raw.body.map_err(|f| PopMakerError::Ranking(failure_text(f)))?;
        let counts: VoteCounts = serde_json::from_value(body)?;
        Ok(VoteRanking::from_counts(counts))
    }

    /// 投票画像のバイト列を取得
    pub async fn fetch_image(&self, name: &str) -> Result<Vec<u8>> {
        let url = self.endpoints.image_url(name);
        debug!("GET get_image ({})", name);

        let response = self.http.get(&url).send().await?.error_for_status()?;

        // 見つからない場合も 200 + JSON で返ってくる
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        let bytes = response.bytes().await?;
        if is_json {
            let body: Value = serde_json::from_slice(&bytes)?;
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("画像を取得できませんでした")
                .to_string();
            return Err(PopMakerError::Api(ApiResult::error(message)));
        }
        Ok(bytes.to_vec())
    }
}

fn failure_text(failure: CallFailure) -> String {
    match failure {
        CallFailure::Known(message) => message,
        CallFailure::Unknown => "unknown error".to_string(),
    }
}
