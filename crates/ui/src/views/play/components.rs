use dioxus::prelude::*;

use crate::vm::{FeedbackVm, SummaryVm};

#[component]
pub fn Scoreboard(score_label: String, progress_label: Option<String>) -> Element {
    rsx! {
        div { class: "scoreboard",
            span { class: "scoreboard__score", "{score_label}" }
            if let Some(progress) = progress_label {
                span { class: "scoreboard__progress", "{progress}" }
            }
        }
    }
}

#[component]
pub fn Timer(label: String, class: &'static str) -> Element {
    rsx! {
        div { class: "{class}", role: "timer", aria_live: "off",
            span { class: "timer__value", "{label}" }
        }
    }
}

#[component]
pub fn QuestionCard(
    category_label: Option<String>,
    question_html: Option<String>,
    value_label: Option<String>,
    aired_label: Option<String>,
) -> Element {
    let Some(question_html) = question_html else {
        return rsx! {};
    };
    rsx! {
        section { class: "clue-card",
            header { class: "clue-card__meta",
                if let Some(category) = category_label {
                    span { class: "clue-card__category", "{category}" }
                }
                if let Some(value) = value_label {
                    span { class: "clue-card__value", "{value}" }
                }
            }
            p { class: "clue-card__question", dangerous_inner_html: "{question_html}" }
            if let Some(aired) = aired_label {
                p { class: "clue-card__aired muted", "{aired}" }
            }
        }
    }
}

#[component]
pub fn FeedbackBanner(feedback: Option<FeedbackVm>) -> Element {
    match feedback {
        Some(feedback) => rsx! {
            p { class: "{feedback.class}", role: "status", dangerous_inner_html: "{feedback.html}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn StartError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "start-error", role: "alert",
                p { "{message}" }
            }
        },
        None => rsx! {},
    }
}

#[component]
pub fn SummaryPanel(summary: SummaryVm) -> Element {
    rsx! {
        section { class: "summary",
            h3 { "Game over" }
            p { class: "summary__score", "{summary.score_label}" }
            p { "{summary.breakdown_label}" }
            p { class: "muted", "{summary.elapsed_label}" }
        }
    }
}
