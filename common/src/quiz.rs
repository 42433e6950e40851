//! Quiz progress for a single session.
//!
//! A session moves `NotStarted -> InProgress -> Complete` as photos are answered.
//! Completion requires at least one photo to exist, so an empty store never
//! reports a finished quiz.

/// Where a session stands with respect to the current set of photos.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress,
    Complete,
}

/// What the quiz index should do next.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuizStep {
    /// Show this unanswered photo.
    Show(u32),
    /// Every existing photo has been answered.
    Complete,
    /// There are no photos at all; send the user to the upload form.
    Upload,
}

/// True when nothing is left to answer and there was something to answer.
pub fn is_complete(remaining_unanswered: u64, photos_exist: bool) -> bool {
    remaining_unanswered == 0 && photos_exist
}

impl QuizState {
    pub fn evaluate(answered_count: usize, remaining_unanswered: u64, photos_exist: bool) -> Self {
        if is_complete(remaining_unanswered, photos_exist) {
            QuizState::Complete
        } else if answered_count == 0 {
            QuizState::NotStarted
        } else {
            QuizState::InProgress
        }
    }
}

/// Decide the next step from a randomly drawn unanswered photo (if any).
pub fn next_step(candidate: Option<u32>, photos_exist: bool) -> QuizStep {
    match candidate {
        Some(photo_id) => QuizStep::Show(photo_id),
        None if photos_exist => QuizStep::Complete,
        None => QuizStep::Upload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_empty_store_is_never_complete() {
        assert!(!is_complete(0, false));
        assert_eq!(QuizState::evaluate(0, 0, false), QuizState::NotStarted);
        // stale ids from deleted photos still do not complete an empty store
        assert_eq!(QuizState::evaluate(3, 0, false), QuizState::InProgress);
        assert_eq!(next_step(None, false), QuizStep::Upload);
    }

    #[test_log::test]
    fn test_state_progression() {
        assert_eq!(QuizState::evaluate(0, 3, true), QuizState::NotStarted);
        assert_eq!(QuizState::evaluate(1, 2, true), QuizState::InProgress);
        assert_eq!(QuizState::evaluate(3, 0, true), QuizState::Complete);
    }

    #[test_log::test]
    fn test_next_step() {
        assert_eq!(next_step(Some(5), true), QuizStep::Show(5));
        assert_eq!(next_step(None, true), QuizStep::Complete);
    }
}
