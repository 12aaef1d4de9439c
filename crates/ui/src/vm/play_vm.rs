use services::{Feedback, RenderState, SessionPhase, StartFailure};
use trivia_core::model::GameSummary;

use crate::vm::html::sanitize_clue_html;
use crate::vm::time_fmt::{format_aired_date, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayIntent {
    Start,
    Submit,
    Advance,
    Tick,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    /// Sanitized; may contain inline markup from the clue's answer.
    pub html: String,
    pub class: &'static str,
}

impl FeedbackVm {
    fn from_feedback(feedback: &Feedback) -> Option<Self> {
        let (html, class) = match feedback {
            Feedback::None => return None,
            Feedback::Correct => ("CORRECT!".to_string(), "feedback feedback--correct"),
            Feedback::Wrong => ("WRONG!".to_string(), "feedback feedback--wrong"),
            Feedback::TimedOut { answer } => (
                format!(
                    "Oh no! You ran out of time. The correct answer was: {}. Press Next to continue.",
                    sanitize_clue_html(answer)
                ),
                "feedback feedback--timeout",
            ),
            Feedback::EmptyInput => (
                "Please enter an answer. If you wish to forfeit, press Next.".to_string(),
                "feedback feedback--hint",
            ),
        };
        Some(Self { html, class })
    }
}

/// User-facing text for a start that fell back to idle.
#[must_use]
pub fn start_failure_message(failure: &StartFailure) -> String {
    match failure {
        StartFailure::Unreachable => {
            "Could not reach the trivia server. Check your connection and try again.".into()
        }
        StartFailure::InvalidEndpoint => "The trivia server address is not a valid URL.".into(),
        StartFailure::BadStatus(code) => format!("The trivia server answered with status {code}."),
        StartFailure::Malformed => "The trivia server sent clues we could not read.".into(),
        StartFailure::NotEnoughClues { got } => {
            format!("The trivia server only sent {got} clues; a game needs 10.")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_label: String,
    pub breakdown_label: String,
    pub elapsed_label: String,
}

impl From<&GameSummary> for SummaryVm {
    fn from(summary: &GameSummary) -> Self {
        Self {
            score_label: format!(
                "You scored {} / {}",
                summary.score(),
                summary.total_questions()
            ),
            breakdown_label: format!(
                "Correct: {} | Timed out: {} | Skipped: {}",
                summary.score(),
                summary.timed_out(),
                summary.skipped()
            ),
            elapsed_label: format!("Time played: {}", format_elapsed(summary.duration())),
        }
    }
}

/// Display strings and control flags for the play screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayVm {
    pub progress_label: Option<String>,
    pub category_label: Option<String>,
    pub question_html: Option<String>,
    pub value_label: Option<String>,
    pub aired_label: Option<String>,
    pub timer_label: String,
    pub timer_class: &'static str,
    pub score_label: String,
    pub feedback: Option<FeedbackVm>,
    pub error: Option<String>,
    pub summary: Option<SummaryVm>,
    pub start_label: &'static str,
    pub advance_label: &'static str,
    pub can_start: bool,
    pub can_submit: bool,
    pub can_advance: bool,
}

impl PlayVm {
    #[must_use]
    pub fn from_render(render: &RenderState) -> Self {
        let timer_class = if render.urgent {
            "timer timer--urgent"
        } else {
            "timer"
        };
        let start_label = match render.phase {
            SessionPhase::Loading => "Loading...",
            SessionPhase::Finished => "Play Again",
            SessionPhase::Idle if render.failure.is_some() => "Retry",
            _ => "Start",
        };
        let is_last = render
            .question_number
            .is_some_and(|number| number >= render.total_questions);
        let advance_label = if is_last { "Finish" } else { "Next" };

        Self {
            progress_label: render
                .question_number
                .map(|number| format!("Question {number} of {}", render.total_questions)),
            category_label: render
                .category
                .as_deref()
                .map(|title| format!("Category: {title}")),
            question_html: render.question.as_deref().map(sanitize_clue_html),
            value_label: render.value.map(|value| format!("${value}")),
            aired_label: render.aired_on.map(format_aired_date),
            timer_label: render
                .seconds_left
                .map_or_else(|| "--".to_string(), |secs| secs.to_string()),
            timer_class,
            score_label: format!("Score: {}", render.score),
            feedback: FeedbackVm::from_feedback(&render.feedback),
            error: render.failure.as_ref().map(start_failure_message),
            summary: render.summary.as_ref().map(SummaryVm::from),
            start_label,
            advance_label,
            can_start: render.can_start(),
            can_submit: render.can_submit(),
            can_advance: render.can_advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn playing(seconds_left: u32, urgent: bool) -> RenderState {
        RenderState {
            phase: SessionPhase::AwaitingAnswer,
            question_number: Some(3),
            total_questions: 10,
            category: Some("rivers".into()),
            question: Some("Longest river in <i>Africa</i>".into()),
            value: Some(600),
            aired_on: NaiveDate::from_ymd_opt(2007, 4, 2),
            seconds_left: Some(seconds_left),
            urgent,
            score: 2,
            feedback: Feedback::None,
            summary: None,
            failure: None,
        }
    }

    #[test]
    fn maps_active_question() {
        let vm = PlayVm::from_render(&playing(30, false));
        assert_eq!(vm.progress_label.as_deref(), Some("Question 3 of 10"));
        assert_eq!(vm.category_label.as_deref(), Some("Category: rivers"));
        assert_eq!(
            vm.question_html.as_deref(),
            Some("Longest river in <i>Africa</i>")
        );
        assert_eq!(vm.value_label.as_deref(), Some("$600"));
        assert_eq!(vm.aired_label.as_deref(), Some("Aired Apr 2, 2007"));
        assert_eq!(vm.timer_label, "30");
        assert_eq!(vm.timer_class, "timer");
        assert_eq!(vm.score_label, "Score: 2");
        assert_eq!(vm.advance_label, "Next");
        assert!(vm.can_submit);
        assert!(vm.can_advance);
        assert!(!vm.can_start);
    }

    #[test]
    fn urgent_timer_gets_urgent_class() {
        let vm = PlayVm::from_render(&playing(10, true));
        assert_eq!(vm.timer_class, "timer timer--urgent");
    }

    #[test]
    fn last_question_offers_finish() {
        let mut render = playing(45, false);
        render.question_number = Some(10);
        assert_eq!(PlayVm::from_render(&render).advance_label, "Finish");
    }

    #[test]
    fn timeout_feedback_reveals_answer() {
        let mut render = playing(0, true);
        render.phase = SessionPhase::Resolved;
        render.feedback = Feedback::TimedOut {
            answer: "the Nile".into(),
        };
        let vm = PlayVm::from_render(&render);
        let feedback = vm.feedback.unwrap();
        assert!(feedback.html.contains("The correct answer was: the Nile."));
        assert_eq!(feedback.class, "feedback feedback--timeout");
        assert!(!vm.can_submit);
        assert!(vm.can_advance);
    }

    #[test]
    fn failed_start_offers_retry() {
        let render = RenderState {
            phase: SessionPhase::Idle,
            question_number: None,
            total_questions: 10,
            category: None,
            question: None,
            value: None,
            aired_on: None,
            seconds_left: None,
            urgent: false,
            score: 0,
            feedback: Feedback::None,
            summary: None,
            failure: Some(StartFailure::Unreachable),
        };
        let vm = PlayVm::from_render(&render);
        assert_eq!(vm.start_label, "Retry");
        assert_eq!(
            vm.error.as_deref(),
            Some("Could not reach the trivia server. Check your connection and try again.")
        );
        assert_eq!(vm.timer_label, "--");
        assert!(vm.can_start);
    }

    #[test]
    fn bad_status_message_names_the_code() {
        assert_eq!(
            start_failure_message(&StartFailure::BadStatus(503)),
            "The trivia server answered with status 503."
        );
    }
}
