//! キャッチコピー生成コーナー
//!
//! 感想CSVを取り込み、コピー作成ルールと合わせてキャッチコピー案を生成する。
//! 取り込んだ感想は `on_change` で親へ渡す。

use leptos::prelude::*;
use leptos::task::spawn_local;
use pop_maker_common::{
    build_copy_prompt, intake::NOT_CSV_MESSAGE, CopyRules, Endpoints, FileIntake, IntakeOutcome,
    RequestState, Severity, UploadedFile,
};
use crate::api::cloud_functions;
use crate::components::{
    csv_drop_zone::CsvDropZone,
    snackbar::{Notifier, Snackbar},
};

#[component]
pub fn CopyChat<F>(on_change: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let endpoints = StoredValue::new(use_context::<Endpoints>().unwrap_or_default());
    let rules = RwSignal::new(CopyRules::default());
    let intake = RwSignal::new(FileIntake::new());
    let request = RwSignal::new(RequestState::new());
    let notifier = Notifier::new();

    let on_files = move |files: Vec<UploadedFile>| {
        let on_change = on_change.clone();
        let mut outcome = IntakeOutcome::Ignored;
        intake.update(|i| {
            outcome = i.accept(files, |text| on_change(text.to_string()));
        });

        match outcome {
            IntakeOutcome::Accepted => notifier.show(Severity::Success, "ファイルをロードました。"),
            IntakeOutcome::Rejected => notifier.show(Severity::Error, NOT_CSV_MESSAGE),
            IntakeOutcome::Ignored => {}
        }
    };

    let on_send = move |_| {
        let Some(ticket) = request.try_update(|r| r.begin()) else {
            return;
        };
        let prompt = build_copy_prompt(&rules.get_untracked(), &intake.with_untracked(|i| i.decoded().to_string()));

        spawn_local(async move {
            let result = cloud_functions::chat(&endpoints.get_value(), &prompt).await;
            let applied = request.try_update(|r| r.finish(ticket, result));
            if applied == Some(false) {
                gloo::console::log!("古い応答を破棄しました");
            }
        });
    };

    let is_loading = move || request.with(|r| r.is_loading());

    view! {
        <section class="panel">
            <h2>"キャッチコピー生成コーナー"</h2>

            <div class="form-group">
                <label for="copy-rules">"コピー作成ルール"</label>
                <textarea
                    id="copy-rules"
                    rows="4"
                    prop:value=move || rules.with(|r| r.as_str().to_string())
                    on:input=move |ev| rules.set(CopyRules(event_target_value(&ev)))
                />
            </div>

            <h3>"アンケート結果アップロード"</h3>
            <p class="text-muted">"アンケート結果のCSVファイルをアップロードしてAPIに送信します。"</p>

            <CsvDropZone on_files=on_files />

            {move || intake.with(|i| i.selected().map(|file| view! {
                <div class="selected-file">
                    "選択されたファイル: "<strong>{file.name.clone()}</strong>
                    {format!(" ({})", file.size_kb_label())}
                </div>
            }))}

            <div class="paper">
                <span>"【みんなの感想】"</span>
                <br />
                {move || intake.with(|i| i.decoded().to_string())}
            </div>

            <Snackbar notifier=notifier />

            <button
                class="btn btn-primary"
                disabled=move || is_loading() || rules.with(|r| r.is_empty())
                on:click=on_send
            >
                {move || if is_loading() { "送信中..." } else { "キャッチコピー案作成" }}
            </button>

            <div class="paper">
                <Show when=is_loading>
                    <div class="spinner" />
                </Show>
                {move || request.with(|r| r.result().cloned()).map(|result| {
                    if result.success {
                        view! {
                            <p>"【コピーの生成案】"<br />{result.message}</p>
                        }.into_any()
                    } else {
                        view! {
                            <p class="text-error">"エラー: "{result.message}</p>
                        }.into_any()
                    }
                })}
            </div>
        </section>
    }
}
