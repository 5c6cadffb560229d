//! Cloud Functions 呼び出し（fetch）
//!
//! 送信・分類の規則はCLIと共通（pop_maker_common::classify）。

use js_sys::{Array, Uint8Array};
use pop_maker_common::{
    classify, classify_failure, ApiResult, CallFailure, CallKind, Endpoint, Endpoints,
    UploadedFile, VoteCounts, VoteRanking,
};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// CSVを送るマルチパートのフィールド名
const CSV_FIELD_NAME: &str = "csvFile";

/// 投げられた値を Known/Unknown に正規化
fn to_failure(value: JsValue) -> CallFailure {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return CallFailure::known(String::from(error.message()));
    }
    match value.as_string() {
        Some(message) => CallFailure::known(message),
        None => CallFailure::Unknown,
    }
}

/// リクエストを送り、ステータスとJSONボディを返す
async fn send(
    endpoints: &Endpoints,
    endpoint: &Endpoint<'_>,
    form: Option<&FormData>,
) -> Result<(u16, Result<Value, CallFailure>), CallFailure> {
    let url = endpoints.url(endpoint);

    let opts = RequestInit::new();
    opts.set_method(endpoint.method());
    opts.set_mode(RequestMode::Cors);
    if let Some(form) = form {
        opts.set_body(form.as_ref());
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(to_failure)?;
    if form.is_none() && endpoint.method() == "POST" {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(to_failure)?;
    }

    let window = web_sys::window().ok_or(CallFailure::Unknown)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(to_failure)?;
    let resp: Response = resp_value.dyn_into().map_err(to_failure)?;
    let status = resp.status();

    let body = match resp.text() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(text) => serde_json::from_str::<Value>(&text.as_string().unwrap_or_default())
                .map_err(|e| CallFailure::known(e.to_string())),
            Err(e) => Err(to_failure(e)),
        },
        Err(e) => Err(to_failure(e)),
    };

    Ok((status, body))
}

async fn call(
    endpoints: &Endpoints,
    kind: CallKind,
    endpoint: Endpoint<'_>,
    form: Option<&FormData>,
) -> ApiResult {
    match send(endpoints, &endpoint, form).await {
        Ok((status, body)) => classify(kind, status, body),
        Err(failure) => {
            gloo::console::error!(format!("API call failed: {:?}", failure));
            classify_failure(kind, failure)
        }
    }
}

/// キャッチコピー案生成
pub async fn chat(endpoints: &Endpoints, prompt: &str) -> ApiResult {
    call(endpoints, CallKind::Chat, Endpoint::Chat { prompt }, None).await
}

/// POP画像生成
pub async fn generate_pop(endpoints: &Endpoints, prompt: &str, size: &str) -> ApiResult {
    let endpoint = Endpoint::GenerateImage {
        prompt,
        size: Some(size),
    };
    call(endpoints, CallKind::GeneratePop, endpoint, None).await
}

fn csv_form(file: &UploadedFile) -> Result<FormData, JsValue> {
    let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()).into());
    let bag = BlobPropertyBag::new();
    bag.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(CSV_FIELD_NAME, &blob, &file.name)?;
    Ok(form)
}

/// CSVファイルをマルチパートで送信
pub async fn upload_csv(endpoints: &Endpoints, file: &UploadedFile, prompt: &str) -> ApiResult {
    let form = match csv_form(file) {
        Ok(form) => form,
        Err(e) => return classify_failure(CallKind::UploadCsv, to_failure(e)),
    };
    let endpoint = Endpoint::GenerateImage { prompt, size: None };
    call(endpoints, CallKind::UploadCsv, endpoint, Some(&form)).await
}

/// 投票
pub async fn vote(endpoints: &Endpoints, item: &str) -> ApiResult {
    call(endpoints, CallKind::Vote, Endpoint::Vote { item }, None).await
}

/// 投票数を取得してランキングにする
pub async fn vote_counts(endpoints: &Endpoints) -> Result<VoteRanking, CallFailure> {
    let (status, body) = send(endpoints, &Endpoint::VoteCounts, None).await?;
    if !(200..300).contains(&status) {
        return Err(CallFailure::known(format!("HTTP Error! status: {}", status)));
    }
    let counts: VoteCounts =
        serde_json::from_value(body?).map_err(|e| CallFailure::known(e.to_string()))?;
    Ok(VoteRanking::from_counts(counts))
}
