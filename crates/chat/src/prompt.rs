//! Bounded prompt assembly.

use crate::Turn;

/// Default length budget for the preamble plus history portion of an
/// assembled prompt, in bytes.
pub const MAX_CONTEXT_LENGTH: usize = 1_000_000;

/// Separator between the system preamble and the transcript body.
const PREAMBLE_SEPARATOR: &str = "\n\n";
/// Trailing cue that positions the model to produce the next turn.
const TRAILING_CUE: &str = "Model: ";

/// Renders a system preamble plus a history snapshot into a single
/// prompt string under a fixed length budget.
///
/// The budget covers the preamble and each included turn's
/// `prefix + text` payload. When history outgrows it, whole turns are
/// dropped oldest first; the preamble itself is never truncated.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    preamble: String,
    limit: usize,
}

impl PromptAssembler {
    /// Create an assembler with the default [`MAX_CONTEXT_LENGTH`] budget.
    pub fn new(preamble: impl Into<String>) -> Self {
        Self::with_limit(preamble, MAX_CONTEXT_LENGTH)
    }

    /// Create an assembler with an explicit budget.
    pub fn with_limit(preamble: impl Into<String>, limit: usize) -> Self {
        Self {
            preamble: preamble.into(),
            limit,
        }
    }

    /// The configured system preamble.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The configured length budget.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Render `turns` into a prompt.
    ///
    /// Turns are considered newest first, and the first turn whose
    /// `prefix + text` would push the running total past the budget stops
    /// the scan outright: older turns are not packed around it, and no
    /// turn is ever partially included. A newest turn larger than the
    /// whole remaining budget therefore excludes all history. The
    /// included window renders oldest first as `Speaker: text` lines
    /// between the preamble and the trailing cue. With nothing included
    /// the result degrades to the preamble and cue alone; callers must
    /// treat that as normal output, not a fault.
    pub fn render(&self, turns: &[Turn]) -> String {
        let mut used = self.preamble.len();
        let mut start = turns.len();

        for (idx, turn) in turns.iter().enumerate().rev() {
            let cost = turn.speaker().prefix().len() + turn.text().len();
            if used + cost > self.limit {
                break;
            }
            used += cost;
            start = idx;
        }

        // Separator, per-line newlines, and the cue ride outside the
        // budget accounting above.
        let mut prompt = String::with_capacity(
            used + PREAMBLE_SEPARATOR.len() + (turns.len() - start) + TRAILING_CUE.len(),
        );
        prompt.push_str(&self.preamble);
        prompt.push_str(PREAMBLE_SEPARATOR);
        for turn in &turns[start..] {
            prompt.push_str(turn.speaker().prefix());
            prompt.push_str(turn.text());
            prompt.push('\n');
        }
        prompt.push_str(TRAILING_CUE);
        prompt
    }
}
