//! Global Application State
//!
//! Reactive wrapper around [`DashboardState`]. Components read it through
//! signals and change it only through the core transitions.

use chrono::{DateTime, Local};
use leptos::*;
use tokenscope_core::{DashboardState, Notice, NoticeLevel};

use super::theme;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Token inputs, results, loading and theme
    pub dashboard: RwSignal<DashboardState>,
    /// Notice currently shown, tagged with its sequence number
    pub notice: RwSignal<Option<(u64, Notice)>>,
    /// When the current result set was applied
    pub last_updated: RwSignal<Option<DateTime<Local>>>,
    notice_seq: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        dashboard: create_rw_signal(DashboardState::new(theme::load_dark_mode())),
        notice: create_rw_signal(None),
        last_updated: create_rw_signal(None),
        notice_seq: store_value(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notice (auto-clears after timeout)
    pub fn show_notice(&self, notice: Notice) {
        let seq = self.notice_seq.get_value() + 1;
        self.notice_seq.set_value(seq);
        let timeout = notice_timeout_ms(notice.level());
        self.notice.set(Some((seq, notice)));

        // A newer notice keeps its own timer
        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(timeout, move || {
            notice_signal.update(|current| {
                if matches!(current, Some((shown, _)) if *shown == seq) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    /// Clear the notice
    pub fn clear_notice(&self) {
        self.notice.set(None);
    }

    pub fn loading(&self) -> bool {
        self.dashboard.with(|d| d.loading)
    }

    pub fn dark_mode(&self) -> bool {
        self.dashboard.with(|d| d.dark_mode)
    }
}

fn notice_timeout_ms(level: NoticeLevel) -> u32 {
    match level {
        NoticeLevel::Info => 3000,
        NoticeLevel::Warning | NoticeLevel::Error => 5000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_stay_longer() {
        assert!(notice_timeout_ms(NoticeLevel::Warning) > notice_timeout_ms(NoticeLevel::Info));
        assert_eq!(
            notice_timeout_ms(NoticeLevel::Error),
            notice_timeout_ms(NoticeLevel::Warning)
        );
    }
}
