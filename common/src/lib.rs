//! POP Maker Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod api;
pub mod error;
pub mod intake;
pub mod notify;
pub mod prompt;
pub mod ranking;
pub mod request;

pub use api::{
    classify, classify_failure, encode_query_component, ApiResult, CallFailure, CallKind, Endpoint, Endpoints,
    DEFAULT_BASE_URL,
};
pub use error::{Error, Result};
pub use intake::{decode_shift_jis, is_csv, FileIntake, IntakeError, IntakeOutcome, UploadedFile};
pub use notify::{CloseReason, Notification, Severity, AUTO_HIDE_DURATION};
pub use prompt::{build_copy_prompt, build_pop_prompt, CopyRules, PopParameters};
pub use ranking::{RankingEntry, RankingView, VoteCounts, VoteRanking, RANKING_FETCH_ERROR};
pub use request::{RequestState, Ticket};
