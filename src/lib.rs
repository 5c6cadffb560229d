//! POP Maker
//!
//! 読書感想CSVを取り込み、Cloud Functions経由でキャッチコピー案とPOP画像を生成する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod intake;
pub mod logging;
pub mod progress;
pub mod ranking;
