//! スナックバー（一時通知）コンポーネント

use gloo::timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use pop_maker_common::{CloseReason, Notification, Severity};

/// 通知の状態と自動クローズのタイマー
///
/// 表示するたびに世代を進め、古いタイマーは何もしない。
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<Notification>,
    generation: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Notification::default()),
            generation: RwSignal::new(0),
        }
    }

    pub fn show(&self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        self.state.update(|n| n.show(severity, message));

        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);

        let notifier = *self;
        let auto_hide = self.state.with_untracked(|n| n.auto_hide());
        Timeout::new(auto_hide.as_millis() as u32, move || {
            if notifier.generation.try_get_untracked() == Some(generation) {
                notifier.state.try_update(|n| n.advance(auto_hide));
            }
        })
        .forget();
    }

    pub fn close(&self, reason: CloseReason) {
        self.state.update(|n| {
            n.close(reason);
        });
    }
}

#[component]
pub fn Snackbar(notifier: Notifier) -> impl IntoView {
    // Escキーで閉じる。画面外クリックは無視される
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            notifier.close(CloseReason::EscapeKeyDown);
        }
    });
    let _ = window_event_listener(ev::click, move |_| {
        notifier.close(CloseReason::Clickaway);
    });

    view! {
        <Show when=move || notifier.state.with(|n| n.is_open())>
            <div class=move || {
                format!("snackbar alert alert-{}", notifier.state.with(|n| n.severity().as_str()))
            }>
                <span class="snackbar-message">{move || notifier.state.with(|n| n.message().to_string())}</span>
                <button
                    class="snackbar-close"
                    aria-label="close"
                    on:click=move |_| notifier.close(CloseReason::CloseButton)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
