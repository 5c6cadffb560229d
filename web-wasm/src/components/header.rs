//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"POP Maker - 読書感想からPOPをつくる"</h1>
        </header>
    }
}
