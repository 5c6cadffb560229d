//! CSVアップロードページ
//!
//! 選択したCSVをそのまま送り、サーバー側で画像を生成させる。
//! デコードした本文はプロンプトとしてクエリにも載せる。

use leptos::prelude::*;
use leptos::task::spawn_local;
use pop_maker_common::{
    intake::{NOT_CSV_MESSAGE, NO_FILE_MESSAGE},
    Endpoints, FileIntake, IntakeOutcome, RequestState, Severity, UploadedFile,
};
use crate::api::cloud_functions;
use crate::components::{
    csv_drop_zone::CsvDropZone,
    snackbar::{Notifier, Snackbar},
};

#[component]
pub fn CsvUpload() -> impl IntoView {
    let endpoints = StoredValue::new(use_context::<Endpoints>().unwrap_or_default());
    let intake = RwSignal::new(FileIntake::new());
    let request = RwSignal::new(RequestState::new());
    let notifier = Notifier::new();

    let on_files = move |files: Vec<UploadedFile>| {
        let mut outcome = IntakeOutcome::Ignored;
        intake.update(|i| outcome = i.accept(files, |_| {}));
        match outcome {
            IntakeOutcome::Rejected => notifier.show(Severity::Error, NOT_CSV_MESSAGE),
            IntakeOutcome::Accepted | IntakeOutcome::Ignored => {}
        }
    };

    let on_upload = move |_| {
        let Some((file, prompt)) = intake.with_untracked(|i| {
            i.selected().map(|file| (file.clone(), i.decoded().to_string()))
        }) else {
            notifier.show(Severity::Error, NO_FILE_MESSAGE);
            return;
        };
        let Some(ticket) = request.try_update(|r| r.begin()) else {
            return;
        };

        spawn_local(async move {
            let result =
                cloud_functions::upload_csv(&endpoints.get_value(), &file, &prompt).await;
            let severity = if result.success { Severity::Success } else { Severity::Error };
            let message = result.message.clone();
            if request.try_update(|r| r.finish(ticket, result)) == Some(true) {
                notifier.show(severity, message);
            }
        });
    };

    let is_loading = move || request.with(|r| r.is_loading());

    view! {
        <section class="panel">
            <h2>"CSVファイルアップロード"</h2>
            <p class="text-muted">"CSVファイルを選択してAPIに送信します。"</p>

            <CsvDropZone on_files=on_files />

            {move || intake.with(|i| i.selected().map(|file| view! {
                <div class="selected-file">
                    "選択されたファイル: "<strong>{file.name.clone()}</strong>
                    {format!(" ({})", file.size_kb_label())}
                </div>
            }))}

            <button class="btn btn-primary" disabled=is_loading on:click=on_upload>
                {move || if is_loading() { "アップロード中..." } else { "アップロード" }}
            </button>

            <Snackbar notifier=notifier />
        </section>
    }
}
