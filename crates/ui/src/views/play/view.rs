use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use services::{SessionError, TriviaSession};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::vm::{PlayIntent, PlayVm};

use super::components::{FeedbackBanner, QuestionCard, Scoreboard, StartError, SummaryPanel, Timer};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

fn log_rejected(intent: &PlayIntent, err: &SessionError) {
    match err {
        SessionError::Fetch(_) => warn!(?intent, error = %err, "clue fetch failed"),
        _ => debug!(?intent, error = %err, "intent rejected"),
    }
}

#[component]
pub fn PlayView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut session = use_signal(move || TriviaSession::new(clock));
    let mut answer = use_signal(String::new);
    let mut ticker = use_signal(|| None::<Task>);

    let dispatch = use_callback(move |intent: PlayIntent| match intent {
        PlayIntent::Start => {
            if let Err(err) = session.write().begin_start() {
                log_rejected(&intent, &err);
                return;
            }
            answer.set(String::new());
            let source = ctx.clue_source();
            spawn(async move {
                let fetched = source.fetch().await;
                if let Err(err) = session.write().complete_start(fetched) {
                    log_rejected(&PlayIntent::Start, &err);
                }
            });
        }
        PlayIntent::Submit => {
            let text = answer.read().clone();
            if let Err(err) = session.write().submit(&text) {
                log_rejected(&intent, &err);
            }
        }
        PlayIntent::Advance => match session.write().advance() {
            Ok(_) => answer.set(String::new()),
            Err(err) => log_rejected(&intent, &err),
        },
        PlayIntent::Tick => {
            session.write().tick();
        }
    });

    // One countdown task per open question; a new key restarts it, `None` stops it.
    let countdown = use_memo(move || session.read().countdown_key());
    use_effect(move || {
        let key = countdown();
        if let Some(task) = ticker.take() {
            task.cancel();
        }
        if key.is_some() {
            let task = spawn(async move {
                loop {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    dispatch.call(PlayIntent::Tick);
                }
            });
            ticker.set(Some(task));
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<PlayTestHandles>() {
            handles.register(dispatch, session, answer);
        }
    }

    let vm = PlayVm::from_render(&session.read().render_state());
    let answer_value = answer.read().clone();

    rsx! {
        div { class: "page page--play",
            div { class: "play__header",
                h2 { "Trivia, YAY!" }
                Scoreboard {
                    score_label: vm.score_label.clone(),
                    progress_label: vm.progress_label.clone(),
                }
                Timer { label: vm.timer_label.clone(), class: vm.timer_class }
            }

            StartError { message: vm.error.clone() }

            if let Some(summary) = vm.summary.clone() {
                SummaryPanel { summary }
            }

            QuestionCard {
                category_label: vm.category_label.clone(),
                question_html: vm.question_html.clone(),
                value_label: vm.value_label.clone(),
                aired_label: vm.aired_label.clone(),
            }

            div { class: "answer-form",
                input {
                    id: "answer-input",
                    class: "answer-form__input",
                    r#type: "text",
                    placeholder: "What is ...?",
                    autocomplete: "off",
                    disabled: !vm.can_submit,
                    value: "{answer_value}",
                    oninput: move |evt| answer.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            dispatch.call(PlayIntent::Submit);
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !vm.can_submit,
                    onclick: move |_| dispatch.call(PlayIntent::Submit),
                    "Submit"
                }
            }

            FeedbackBanner { feedback: vm.feedback.clone() }

            div { class: "play__controls",
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: !vm.can_advance,
                    onclick: move |_| dispatch.call(PlayIntent::Advance),
                    "{vm.advance_label}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !vm.can_start,
                    onclick: move |_| dispatch.call(PlayIntent::Start),
                    "{vm.start_label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlayTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PlayIntent>>>>,
    session: Rc<RefCell<Option<Signal<TriviaSession>>>>,
    answer: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl PlayTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PlayIntent>,
        session: Signal<TriviaSession>,
        answer: Signal<String>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
        *self.answer.borrow_mut() = Some(answer);
    }

    pub(crate) fn dispatch(&self) -> Callback<PlayIntent> {
        (*self.dispatch.borrow()).expect("play dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<TriviaSession> {
        (*self.session.borrow()).expect("play session registered")
    }

    pub(crate) fn answer(&self) -> Signal<String> {
        (*self.answer.borrow()).expect("play answer registered")
    }
}
