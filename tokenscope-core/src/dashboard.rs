//! Dashboard State
//!
//! Explicit state of the dashboard view with one pure transition per user
//! action. The view wraps a [`DashboardState`] in a signal and only ever
//! mutates it through these methods.

use crate::batch::{normalize_tokens, BatchReport, Notice};
use crate::types::TokenInfo;

/// Ordered token identifier inputs, one per input field. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenList {
    entries: Vec<String>,
}

impl Default for TokenList {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }
}

impl TokenList {
    /// Build from existing entries; an empty list gets one blank field
    pub fn new(entries: Vec<String>) -> Self {
        if entries.is_empty() {
            Self::default()
        } else {
            Self { entries }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of input fields, always at least 1
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether a field may be removed
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Replace the entry at `index`. Returns false if out of range.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = value.into();
                true
            }
            None => false,
        }
    }

    /// Append one blank field
    pub fn add(&mut self) {
        self.entries.push(String::new());
    }

    /// Remove the field at `index`. The sole remaining field is never removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Non-blank entries, trimmed and lower-cased, in field order
    pub fn tokens(&self) -> Vec<String> {
        normalize_tokens(&self.entries)
    }
}

/// A submission that has been started and must be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBatch {
    pub generation: u64,
    pub tokens: Vec<String>,
}

/// What happened when a batch was handed back to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Results replaced the current set; carries the warning to show
    Applied(Option<Notice>),
    /// A newer submission started meanwhile; nothing changed
    Stale,
}

/// Complete state of the dashboard view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub tokens: TokenList,
    pub results: Vec<TokenInfo>,
    pub loading: bool,
    pub dark_mode: bool,
    generation: u64,
}

impl DashboardState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }

    /// Generation of the most recent submission
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn edit_token(&mut self, index: usize, value: impl Into<String>) -> bool {
        self.tokens.edit(index, value)
    }

    pub fn add_token(&mut self) {
        self.tokens.add();
    }

    pub fn remove_token(&mut self, index: usize) -> bool {
        self.tokens.remove(index)
    }

    /// Start a submission: clear results and take a new generation.
    ///
    /// With no usable token the submission ends immediately with
    /// [`Notice::NoValidToken`] and nothing must be fetched.
    pub fn begin_submission(&mut self) -> Result<PendingBatch, Notice> {
        self.generation += 1;
        self.results.clear();

        let tokens = self.tokens.tokens();
        if tokens.is_empty() {
            self.loading = false;
            return Err(Notice::NoValidToken);
        }

        self.loading = true;
        Ok(PendingBatch {
            generation: self.generation,
            tokens,
        })
    }

    /// Hand a settled batch back. Reports from older generations are ignored.
    pub fn finish_submission(&mut self, report: BatchReport) -> Completion {
        if report.generation != self.generation {
            return Completion::Stale;
        }

        let notice = report.notice();
        self.results = report.results;
        self.loading = false;
        Completion::Applied(notice)
    }

    /// End a submission that could not run at all
    pub fn abort_submission(&mut self, generation: u64) -> Completion {
        if generation != self.generation {
            return Completion::Stale;
        }

        self.results.clear();
        self.loading = false;
        Completion::Applied(Some(Notice::Unexpected))
    }

    /// Flip the theme and return the new value
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
