use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::history::{History, HistoryItem};
use crate::{evaluate_expression, ERROR_RESULT};

/// Headless interaction loop around the evaluation pipeline.
///
/// Owns the expression buffer, the last good live-preview result and the
/// history log — all the mutable state the evaluator itself refuses to
/// carry. Input arrives as the text a key or button emits (`"7"`, `"+"`,
/// `"sin("`), mirroring the surface the shell exposes.
#[derive(Debug)]
pub struct Session {
    expression: String,
    result: String,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            result: "0".to_string(),
            history: History::new(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The last good result: a live preview, or the value of the most
    /// recent commit.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Appends key/button text and refreshes the live preview. While the
    /// expression is mid-edit and invalid, the previous good preview is
    /// kept on display.
    pub fn push_input(&mut self, text: &str) {
        self.expression.push_str(text);

        let preview = evaluate_expression(&self.expression);
        if !preview.is_empty() && preview != ERROR_RESULT {
            self.result = preview;
        } else {
            debug!("preview suppressed for {:?}", self.expression);
        }
    }

    /// Backspace. The preview refreshes on the next keystroke.
    pub fn delete_last(&mut self) {
        self.expression.pop();
    }

    /// AC: empty expression, result back to "0". History is untouched.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.result = "0".to_string();
    }

    /// The "=" action. On success the formatted result replaces the current
    /// expression, becomes the displayed result, and the pair is recorded in
    /// history; an invalid or empty expression changes nothing and returns
    /// `false`.
    pub fn commit(&mut self) -> bool {
        let value = evaluate_expression(&self.expression);
        if value.is_empty() || value == ERROR_RESULT {
            debug!("commit refused for {:?}", self.expression);
            return false;
        }

        self.history.push(&self.expression, &value, now_millis());
        self.expression = value.clone();
        self.result = value;
        true
    }

    /// Restores a history entry as the current expression and result.
    pub fn recall(&mut self, item: &HistoryItem) {
        self.expression = item.expression.clone();
        self.result = item.result.clone();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
