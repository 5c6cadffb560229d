//! 呼び出し中フラグと結果の管理
//!
//! 呼び出しごとにチケットを発行し、最後に発行したチケットの結果だけを反映する。
//! 先行リクエストは中断しないが、遅れて届いた古い応答は捨てる。

use crate::api::ApiResult;

/// 呼び出しを識別するチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// ローディングフラグと直近の結果
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    generation: u64,
    loading: bool,
    result: Option<ApiResult>,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 呼び出し開始（前回の結果は消える）
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.result = None;
        Ticket(self.generation)
    }

    /// 呼び出し完了
    ///
    /// 古いチケットなら何もせず `false` を返す。
    pub fn finish(&mut self, ticket: Ticket, result: ApiResult) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.result = Some(result);
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&ApiResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_loading_and_clears_result() {
        let mut state = RequestState::new();
        let first = state.begin();
        assert!(state.finish(first, ApiResult::ok("one")));
        assert_eq!(state.result().map(|r| r.message.as_str()), Some("one"));

        state.begin();
        assert!(state.is_loading());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_finish_clears_loading() {
        let mut state = RequestState::new();
        let ticket = state.begin();
        state.finish(ticket, ApiResult::error("bad"));
        assert!(!state.is_loading());
        assert_eq!(state.result(), Some(&ApiResult::error("bad")));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = RequestState::new();
        let old = state.begin();
        let new = state.begin();

        // 古い応答が先に届いても反映されず、ローディングも継続
        assert!(!state.finish(old, ApiResult::ok("old")));
        assert!(state.is_loading());
        assert!(state.result().is_none());

        assert!(state.finish(new, ApiResult::ok("new")));
        assert_eq!(state.result(), Some(&ApiResult::ok("new")));

        // 最新の応答の後に届いた古い応答も無視
        assert!(!state.finish(old, ApiResult::ok("old")));
        assert_eq!(state.result(), Some(&ApiResult::ok("new")));
    }
}
