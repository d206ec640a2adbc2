//! Keyboard-driven quiz session state machine.
//!
//! The session is a plain value plus a pure reducer: every keystroke maps the
//! current [`SessionState`] to the next one, with the quiz data threaded in
//! through [`SessionEnv`]. Rendering reads the state; it never owns it.

use crate::types::{QuestionKind, Quiz};

/// Which page the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing among the available quizzes.
    Selecting,
    /// Quiz chosen, waiting to begin.
    Start,
    /// Walking through the questions.
    Question,
}

/// Keys the session reacts to. Anything else leaves the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
}

/// Immutable data the reducer reads but never mutates.
#[derive(Debug, Clone, Copy)]
pub struct SessionEnv<'a> {
    /// Names of the available quizzes, for the Selecting phase.
    pub quiz_ids: &'a [String],
    /// The loaded quiz, once one is chosen.
    pub quiz: Option<&'a Quiz>,
}

/// Complete UI state of one quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: Phase,
    pub quiz_id: Option<String>,
    pub question_index: usize,
    /// Highlight position: a quiz in Selecting, an option in Question.
    pub cursor: usize,
    /// Committed option choice; None until the player locks one in.
    pub selection: Option<usize>,
    pub revealed: bool,
}

impl SessionState {
    /// Fresh session on the quiz selection page.
    pub fn selecting() -> Self {
        Self {
            phase: Phase::Selecting,
            quiz_id: None,
            question_index: 0,
            cursor: 0,
            selection: None,
            revealed: false,
        }
    }

    /// Session parked on the start page of a chosen quiz.
    pub fn start(quiz_id: impl Into<String>) -> Self {
        Self {
            phase: Phase::Start,
            quiz_id: Some(quiz_id.into()),
            question_index: 0,
            cursor: 0,
            selection: None,
            revealed: false,
        }
    }

    fn at_question(&self, index: usize) -> Self {
        Self {
            phase: Phase::Question,
            quiz_id: self.quiz_id.clone(),
            question_index: index,
            cursor: 0,
            selection: None,
            revealed: false,
        }
    }

    fn back_to_start(&self) -> Self {
        Self {
            phase: Phase::Start,
            quiz_id: self.quiz_id.clone(),
            question_index: 0,
            cursor: 0,
            selection: None,
            revealed: false,
        }
    }
}

/// Apply one keystroke to the session.
pub fn update(state: &SessionState, key: Key, env: &SessionEnv<'_>) -> SessionState {
    match state.phase {
        Phase::Selecting => update_selecting(state, key, env),
        Phase::Start => update_start(state, key, env),
        Phase::Question => update_question(state, key, env),
    }
}

fn update_selecting(state: &SessionState, key: Key, env: &SessionEnv<'_>) -> SessionState {
    let count = env.quiz_ids.len();
    match key {
        Key::Up if count > 0 => SessionState {
            cursor: (state.cursor + count - 1) % count,
            ..state.clone()
        },
        Key::Down if count > 0 => SessionState {
            cursor: (state.cursor + 1) % count,
            ..state.clone()
        },
        Key::Space | Key::Right => match env.quiz_ids.get(state.cursor) {
            Some(id) => SessionState::start(id.clone()),
            None => state.clone(),
        },
        _ => state.clone(),
    }
}

fn update_start(state: &SessionState, key: Key, env: &SessionEnv<'_>) -> SessionState {
    match key {
        Key::Space | Key::Right => {
            let has_questions = env.quiz.is_some_and(|quiz| !quiz.questions.is_empty());
            if has_questions {
                state.at_question(0)
            } else {
                state.clone()
            }
        }
        _ => state.clone(),
    }
}

fn update_question(state: &SessionState, key: Key, env: &SessionEnv<'_>) -> SessionState {
    let Some(quiz) = env.quiz else {
        return state.clone();
    };
    let Some(question) = quiz.questions.get(state.question_index) else {
        return state.clone();
    };

    if state.revealed {
        return match key {
            Key::Space | Key::Right => {
                if state.question_index + 1 < quiz.questions.len() {
                    state.at_question(state.question_index + 1)
                } else {
                    state.back_to_start()
                }
            }
            Key::Left => state.at_question(state.question_index.saturating_sub(1)),
            _ => state.clone(),
        };
    }

    let option_count = question.options.len();
    let multiple_choice =
        question.kind == Some(QuestionKind::MultipleChoice) && option_count > 0;

    if multiple_choice {
        match key {
            Key::Up if state.selection.is_none() => SessionState {
                cursor: (state.cursor + option_count - 1) % option_count,
                ..state.clone()
            },
            Key::Down if state.selection.is_none() => SessionState {
                cursor: (state.cursor + 1) % option_count,
                ..state.clone()
            },
            // First press locks the highlighted option in, the second reveals.
            Key::Space | Key::Right => match state.selection {
                None => SessionState {
                    selection: Some(state.cursor),
                    ..state.clone()
                },
                Some(_) => SessionState {
                    revealed: true,
                    ..state.clone()
                },
            },
            _ => state.clone(),
        }
    } else {
        // Free text and unrecognized kinds reveal straight away.
        match key {
            Key::Space | Key::Right => SessionState {
                revealed: true,
                ..state.clone()
            },
            _ => state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn sample_quiz() -> Quiz {
        parse(
            "\
# Walkthrough

### Pick one
**Type:** Multiple Choice
- [ ] A
- [x] B
- [ ] C

### Spell it out
**Type:** Free Text
**Answer:** because

### Mystery round
**Type:** Estimation
",
        )
    }

    fn env<'a>(ids: &'a [String], quiz: Option<&'a Quiz>) -> SessionEnv<'a> {
        SessionEnv {
            quiz_ids: ids,
            quiz,
        }
    }

    #[test]
    fn selecting_cycles_and_chooses() {
        let ids = vec!["alpha".to_string(), "beta".to_string()];
        let env = env(&ids, None);
        let state = SessionState::selecting();

        let state = update(&state, Key::Down, &env);
        assert_eq!(state.cursor, 1);
        let state = update(&state, Key::Down, &env);
        assert_eq!(state.cursor, 0);
        let state = update(&state, Key::Up, &env);
        assert_eq!(state.cursor, 1);

        let state = update(&state, Key::Space, &env);
        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.quiz_id.as_deref(), Some("beta"));
    }

    #[test]
    fn selecting_with_no_quizzes_is_inert() {
        let ids: Vec<String> = vec![];
        let env = env(&ids, None);
        let state = SessionState::selecting();
        assert_eq!(update(&state, Key::Down, &env), state);
        assert_eq!(update(&state, Key::Space, &env), state);
    }

    #[test]
    fn start_enters_first_question() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let state = SessionState::start("walkthrough");

        let state = update(&state, Key::Space, &env);
        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.question_index, 0);
        assert!(!state.revealed);
    }

    #[test]
    fn start_with_empty_quiz_stays_put() {
        let quiz = parse("# Empty\n");
        let ids = vec!["empty".to_string()];
        let env = env(&ids, Some(&quiz));
        let state = SessionState::start("empty");
        assert_eq!(update(&state, Key::Space, &env), state);
    }

    #[test]
    fn multiple_choice_select_then_reveal() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let state = update(&SessionState::start("walkthrough"), Key::Space, &env);

        // Cursor wraps over the three options.
        let state = update(&state, Key::Up, &env);
        assert_eq!(state.cursor, 2);
        let state = update(&state, Key::Down, &env);
        let state = update(&state, Key::Down, &env);
        assert_eq!(state.cursor, 1);

        let state = update(&state, Key::Space, &env);
        assert_eq!(state.selection, Some(1));
        assert!(!state.revealed);

        // Cursor is frozen once an option is locked in.
        let state = update(&state, Key::Down, &env);
        assert_eq!(state.cursor, 1);

        let state = update(&state, Key::Space, &env);
        assert!(state.revealed);
    }

    #[test]
    fn free_text_reveals_immediately() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let mut state = update(&SessionState::start("walkthrough"), Key::Space, &env);
        state.question_index = 1;

        let state = update(&state, Key::Right, &env);
        assert!(state.revealed);
    }

    #[test]
    fn unrecognized_kind_does_not_trap_the_session() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let mut state = update(&SessionState::start("walkthrough"), Key::Space, &env);
        state.question_index = 2;

        let state = update(&state, Key::Space, &env);
        assert!(state.revealed);
        let state = update(&state, Key::Space, &env);
        assert_eq!(state.phase, Phase::Start);
    }

    #[test]
    fn revealed_advances_and_resets_question_state() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let state = update(&SessionState::start("walkthrough"), Key::Space, &env);
        let state = update(&state, Key::Space, &env); // select
        let state = update(&state, Key::Space, &env); // reveal
        let state = update(&state, Key::Space, &env); // next

        assert_eq!(state.question_index, 1);
        assert_eq!(state.selection, None);
        assert!(!state.revealed);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn back_navigation_saturates_at_first_question() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let state = update(&SessionState::start("walkthrough"), Key::Space, &env);
        let state = update(&state, Key::Space, &env); // select
        let state = update(&state, Key::Space, &env); // reveal

        let state = update(&state, Key::Left, &env);
        assert_eq!(state.question_index, 0);
        assert!(!state.revealed);
    }

    #[test]
    fn finishing_the_last_question_returns_to_start() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let mut state = update(&SessionState::start("walkthrough"), Key::Space, &env);
        state.question_index = 2;
        let state = update(&state, Key::Space, &env); // reveal
        let state = update(&state, Key::Space, &env); // past the end

        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.quiz_id.as_deref(), Some("walkthrough"));
        assert_eq!(state.question_index, 0);
    }

    #[test]
    fn unrelated_keys_leave_state_unchanged() {
        let quiz = sample_quiz();
        let ids = vec!["walkthrough".to_string()];
        let env = env(&ids, Some(&quiz));
        let state = update(&SessionState::start("walkthrough"), Key::Space, &env);
        assert_eq!(update(&state, Key::Left, &env), state);
    }
}
