//! Answer validation for scenario and violation-spotting games.

use crate::models::{GameSession, GameSubmission, GameType, ViolationRange};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("Please select an answer")]
    NoOptionSelected,
    #[error("Please select the text that contains the violation")]
    NoTextSelected,
    #[error("Selected text was not found in the scenario")]
    SelectionNotInText,
    #[error("Option {0} does not exist")]
    OptionOutOfRange(usize),
    #[error("This game has no playable content")]
    MissingContent,
}

/// What the player has chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizSelection {
    #[default]
    Nothing,
    Option(usize),
    Text(String),
}

/// Locate `selected` inside `text` as a character range.
///
/// The first occurrence wins. Offsets count Unicode scalar values.
#[must_use]
pub fn locate_violation_range(text: &str, selected: &str) -> Option<ViolationRange> {
    let needle = selected.trim();
    if needle.is_empty() {
        return None;
    }
    let byte_start = text.find(needle)?;
    let start = text[..byte_start].chars().count();
    let end = start + needle.chars().count();
    Some(ViolationRange { start, end })
}

/// Turn a selection into the payload for `POST /game/submit`.
///
/// # Errors
///
/// Returns an error when nothing usable is selected for the game's type.
pub fn build_submission(
    session: &GameSession,
    selection: &QuizSelection,
) -> Result<GameSubmission, QuizError> {
    match session.game_type {
        GameType::Scenario => {
            let scenario = session.scenario.as_ref().ok_or(QuizError::MissingContent)?;
            let QuizSelection::Option(index) = *selection else {
                return Err(QuizError::NoOptionSelected);
            };
            if index >= scenario.options.len() {
                return Err(QuizError::OptionOutOfRange(index));
            }
            Ok(GameSubmission {
                session_id: session.session_id.clone(),
                answer: Some(index),
                violation_range: None,
            })
        }
        GameType::Violation => {
            let scenario = session
                .violation_scenario
                .as_ref()
                .ok_or(QuizError::MissingContent)?;
            let QuizSelection::Text(selected) = selection else {
                return Err(QuizError::NoTextSelected);
            };
            if selected.trim().is_empty() {
                return Err(QuizError::NoTextSelected);
            }
            let range = locate_violation_range(&scenario.scenario_text, selected)
                .ok_or(QuizError::SelectionNotInText)?;
            Ok(GameSubmission {
                session_id: session.session_id.clone(),
                answer: None,
                violation_range: Some(range),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Scenario, ViolationScenario};

    fn scenario_session() -> GameSession {
        GameSession {
            session_id: "s1".into(),
            policy_id: "p1".into(),
            game_type: GameType::Scenario,
            scenario: Some(Scenario {
                scenario_text: "A contractor asks for the VPN password.".into(),
                options: vec!["Share it".into(), "Refuse and report".into()],
                correct_answer: 1,
                explanation: String::new(),
                policy_rule_used: String::new(),
            }),
            violation_scenario: None,
            created_at: None,
        }
    }

    fn violation_session(text: &str) -> GameSession {
        GameSession {
            session_id: "s2".into(),
            policy_id: "p1".into(),
            game_type: GameType::Violation,
            scenario: None,
            violation_scenario: Some(ViolationScenario {
                scenario_text: text.into(),
                violation_text: String::new(),
                violation_start: 0,
                violation_end: 0,
                explanation: String::new(),
                policy_rule_violated: String::new(),
            }),
            created_at: None,
        }
    }

    #[test]
    fn scenario_requires_a_valid_option() {
        let session = scenario_session();
        assert_eq!(
            build_submission(&session, &QuizSelection::Nothing),
            Err(QuizError::NoOptionSelected)
        );
        assert_eq!(
            build_submission(&session, &QuizSelection::Option(5)),
            Err(QuizError::OptionOutOfRange(5))
        );
        let ok = build_submission(&session, &QuizSelection::Option(1)).unwrap();
        assert_eq!(ok.answer, Some(1));
        assert!(ok.violation_range.is_none());
    }

    #[test]
    fn violation_range_comes_from_selected_text() {
        let text = "Maria emailed the customer list to her personal account.";
        let session = violation_session(text);
        let sub = build_submission(
            &session,
            &QuizSelection::Text("emailed the customer list".into()),
        )
        .unwrap();
        assert_eq!(sub.violation_range, Some(ViolationRange { start: 6, end: 31 }));
        assert_eq!(
            build_submission(&session, &QuizSelection::Text("   ".into())),
            Err(QuizError::NoTextSelected)
        );
        assert_eq!(
            build_submission(&session, &QuizSelection::Text("not there".into())),
            Err(QuizError::SelectionNotInText)
        );
    }

    #[test]
    fn ranges_count_characters_not_bytes() {
        let range = locate_violation_range("Café staff shared keys", "shared").unwrap();
        assert_eq!(range, ViolationRange { start: 11, end: 17 });
    }
}
