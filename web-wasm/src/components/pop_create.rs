//! POP作成ページ

use leptos::prelude::*;
use leptos::task::spawn_local;
use pop_maker_common::{build_pop_prompt, Endpoints, PopParameters, RequestState};
use crate::api::cloud_functions;

type Getter = fn(&PopParameters) -> String;
type Setter = fn(&mut PopParameters, String);

/// パラメータ1項目分の入力欄
fn text_field(
    label: &'static str,
    params: RwSignal<PopParameters>,
    get: Getter,
    set: Setter,
    multiline: bool,
) -> AnyView {
    let value = move || params.with(get);
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        params.update(|p| set(p, text));
    };

    if multiline {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <textarea rows="4" prop:value=value on:input=on_input />
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input type="text" prop:value=value on:input=on_input />
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn PopCreate(#[prop(into)] thoughts: Signal<String>) -> impl IntoView {
    let endpoints = StoredValue::new(use_context::<Endpoints>().unwrap_or_default());
    let params = RwSignal::new(PopParameters::default());
    let request = RwSignal::new(RequestState::new());

    let is_loading = move || request.with(|r| r.is_loading());

    let on_create = move |_| {
        let Some(ticket) = request.try_update(|r| r.begin()) else {
            return;
        };
        let (prompt, size) = params.with_untracked(|p| {
            (build_pop_prompt(p, &thoughts.get_untracked()), p.size_param())
        });

        spawn_local(async move {
            let result = cloud_functions::generate_pop(&endpoints.get_value(), &prompt, &size).await;
            if request.try_update(|r| r.finish(ticket, result)) == Some(false) {
                gloo::console::log!("古い応答を破棄しました");
            }
        });
    };

    view! {
        <section class="panel">
            <h2>"POP作成"</h2>

            {text_field("目的", params, |p| p.purpose.clone(), |p, v| p.purpose = v, true)}

            <h3>"POP仕様"</h3>
            <div class="form-row">
                {text_field("幅 (px)", params, |p| p.width.clone(), |p, v| p.width = v, false)}
                {text_field("高さ (px)", params, |p| p.height.clone(), |p, v| p.height = v, false)}
            </div>
            <div class="form-row">
                {text_field("最小文字数", params, |p| p.min_chars.clone(), |p, v| p.min_chars = v, false)}
                {text_field("最大文字数", params, |p| p.max_chars.clone(), |p, v| p.max_chars = v, false)}
            </div>
            {text_field("文字の追加情報", params, |p| p.extra_text.clone(), |p, v| p.extra_text = v, false)}
            {text_field("色づかい", params, |p| p.color_scheme.clone(), |p, v| p.color_scheme = v, false)}
            {text_field("イラストテイスト", params, |p| p.illustration_style.clone(), |p, v| p.illustration_style = v, false)}
            {text_field("構図", params, |p| p.composition.clone(), |p, v| p.composition = v, false)}
            {text_field("デザイン作成ルール", params, |p| p.design_info.clone(), |p, v| p.design_info = v, true)}
            {text_field("利用する固定のキャッチコピー文言", params, |p| p.catch_copy.clone(), |p, v| p.catch_copy = v, false)}

            <div class="form-group">
                <label>"出力形式"</label>
                <input type="text" disabled=true prop:value=move || params.with(|p| p.output_format.clone()) />
            </div>

            <div class="form-group">
                <label>"参考データ（感想の文字起こし）"</label>
                <textarea rows="6" disabled=true prop:value=move || thoughts.get() />
            </div>

            <button class="btn btn-primary" disabled=is_loading on:click=on_create>
                {move || if is_loading() { "作成中..." } else { "POP作成" }}
            </button>

            {move || request.with(|r| r.result().cloned()).map(|result| {
                let class = if result.success { "alert alert-success" } else { "alert alert-error" };
                view! { <div class=class>{result.message}</div> }
            })}
        </section>
    }
}
