//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use pop_maker_common::Endpoints;
use crate::components::{
    copy_chat::CopyChat,
    csv_upload::CsvUpload,
    header::Header,
    pop_create::PopCreate,
    ranking::Ranking,
};

/// メインアプリケーションコンポーネント
///
/// キャッチコピー生成で取り込んだ感想を、POP作成ページへ渡す。
#[component]
pub fn App() -> impl IntoView {
    provide_context(Endpoints::default());

    // 取り込んだ感想（CopyChatが書き込み、PopCreateが読む）
    let (thoughts, set_thoughts) = signal(String::new());

    let on_thoughts_loaded = move |text: String| {
        set_thoughts.set(text);
    };

    view! {
        <div class="container">
            <Header />

            <CopyChat on_change=on_thoughts_loaded />

            <PopCreate thoughts=thoughts />

            <CsvUpload />

            <Ranking />
        </div>
    }
}
