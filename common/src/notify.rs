//! 通知（スナックバー）の状態
//!
//! 一定時間で自動的に閉じる。画面外クリック（clickaway）では閉じない。
//! 時間は呼び出し側から渡すので、WASMのタイマーでもテストでも同じコードで動く。

use std::time::Duration;

/// 自動で閉じるまでの時間
pub const AUTO_HIDE_DURATION: Duration = Duration::from_secs(6);

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// 閉じる操作の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Clickaway,
    EscapeKeyDown,
    Timeout,
    CloseButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    open: bool,
    severity: Severity,
    message: String,
    auto_hide: Duration,
    elapsed: Duration,
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(AUTO_HIDE_DURATION)
    }
}

impl Notification {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            open: false,
            severity: Severity::default(),
            message: String::new(),
            auto_hide,
            elapsed: Duration::ZERO,
        }
    }

    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.open = true;
        self.severity = severity;
        self.message = message.into();
        self.elapsed = Duration::ZERO;
    }

    /// 閉じる操作。clickaway は無視する。閉じたら `true`
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if reason == CloseReason::Clickaway || !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// 時間経過を反映する。自動で閉じたら `true`
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.open {
            return false;
        }
        self.elapsed += elapsed;
        if self.elapsed >= self.auto_hide {
            return self.close(CloseReason::Timeout);
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn auto_hide(&self) -> Duration {
        self.auto_hide
    }
}
