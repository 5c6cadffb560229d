//! 呼び出し中のスピナー表示

use indicatif::{ProgressBar, ProgressStyle};
use pop_maker_common::{ApiResult, RequestState};
use std::future::Future;
use std::time::Duration;

/// ローディング中はスピナーを出し、結果を `state` に反映して返す
pub async fn with_loading<F>(state: &mut RequestState, message: &str, call: F) -> ApiResult
where
    F: Future<Output = ApiResult>,
{
    let ticket = state.begin();

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = call.await;
    spinner.finish_and_clear();

    state.finish(ticket, result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_loading_updates_state() {
        let mut state = RequestState::new();
        let result = with_loading(&mut state, "送信中...", async { ApiResult::ok("done") }).await;

        assert_eq!(result, ApiResult::ok("done"));
        assert!(!state.is_loading());
        assert_eq!(state.result(), Some(&ApiResult::ok("done")));
    }
}
