//! 投票ランキング
//!
//! マウント時に投票数を取得する。投票ボタンを押すと投票後に再取得する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use pop_maker_common::{Endpoints, RankingEntry, RankingView};
use crate::api::cloud_functions;

#[component]
pub fn Ranking() -> impl IntoView {
    let endpoints = StoredValue::new(use_context::<Endpoints>().unwrap_or_default());
    let view_state = RwSignal::new(RankingView::Loading);
    let vote_message = RwSignal::new(None::<String>);

    let load = move || {
        spawn_local(async move {
            let result = cloud_functions::vote_counts(&endpoints.get_value()).await;
            if let Err(e) = &result {
                gloo::console::error!(format!("フェッチエラー: {:?}", e));
            }
            view_state.try_set(RankingView::from_fetch(result));
        });
    };
    load();

    let on_vote = move |name: String| {
        spawn_local(async move {
            let result = cloud_functions::vote(&endpoints.get_value(), &name).await;
            vote_message.try_set(Some(result.message));
            load();
        });
    };

    let row = move |entry: RankingEntry, is_last: bool| {
        let avatar = endpoints.with_value(|e| e.image_url(&entry.name));
        let name = entry.name.clone();
        view! {
            <li class="ranking-item">
                <img class="avatar" src=avatar alt=entry.name.clone() />
                <span class="ranking-name">{entry.label()}</span>
                <span class="ranking-count">{entry.count_label()}</span>
                <button class="btn btn-secondary" on:click=move |_| on_vote(name.clone())>
                    "投票"
                </button>
            </li>
            {(!is_last).then(|| view! { <hr class="ranking-divider" /> })}
        }
    };

    view! {
        <section class="panel">
            {move || view_state.with(|state| match state {
                RankingView::Loading => view! {
                    <h2>"ランキング"</h2>
                    <p class="text-center">"データを読み込み中..."</p>
                }.into_any(),
                RankingView::Failed(message) => view! {
                    <h2>"ランキング"</h2>
                    <p class="text-error text-center">{message.clone()}</p>
                }.into_any(),
                RankingView::Loaded(ranking) => {
                    let last = ranking.len().saturating_sub(1);
                    let rows = ranking
                        .entries()
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| row(entry.clone(), i == last))
                        .collect_view();
                    view! {
                        <h2>"✨ ランキング ✨"</h2>
                        <ul class="ranking-list">{rows}</ul>
                    }.into_any()
                }
            })}

            {move || vote_message.get().map(|message| view! {
                <p class="text-muted">{message}</p>
            })}
        </section>
    }
}
