//! CSVドロップゾーンコンポーネント
//!
//! ドロップまたはクリックで選択されたファイルのうち先頭の1つだけを読み込む。
//! CSVでないファイルは中身を読まずに渡し、判定は FileIntake に任せる。

use gloo::file::futures::read_as_bytes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pop_maker_common::{is_csv, UploadedFile};
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn CsvDropZone<F>(on_files: F) -> impl IntoView
where
    F: Fn(Vec<UploadedFile>) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let first = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = first {
                read_first(file, on_files.clone());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        let on_files = on_files.clone();
        open_file_dialog(move |file| read_first(file, on_files.clone()));
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📄"</div>
            <Show
                when=move || is_dragover.get()
                fallback=|| view! { <p>"ファイルをドラッグ＆ドロップするか、クリックして選択"</p> }
            >
                <p>"ここにファイルをドロップしてください..."</p>
            </Show>
            <p class="text-muted">"（.csv 形式のみ）"</p>
        </div>
    }
}

/// ファイル選択ダイアログを開く
fn open_file_dialog<F>(on_pick: F)
where
    F: Fn(File) + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(input) = document
        .create_element("input")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().map_err(JsValue::from))
    else {
        return;
    };
    input.set_type("file");
    input.set_accept(".csv,text/csv");

    let picker = input.clone();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Some(file) = picker.files().and_then(|files| files.get(0)) {
            on_pick(file);
        }
    });
    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    input.click();
}

fn read_first<F>(file: File, on_files: F)
where
    F: Fn(Vec<UploadedFile>) + 'static,
{
    let name = file.name();
    let mime_type = file.type_();

    if !is_csv(&name, &mime_type) {
        on_files(vec![UploadedFile::new(name, mime_type, Vec::new())]);
        return;
    }

    spawn_local(async move {
        let blob = gloo::file::File::from(file);
        match read_as_bytes(&blob).await {
            Ok(bytes) => on_files(vec![UploadedFile::new(name, mime_type, bytes)]),
            Err(e) => gloo::console::error!(format!("ファイル読み込みエラー: {}", e)),
        }
    });
}
