use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{ClueSource, Clock, FetchError, decode_batch};
use trivia_core::model::{Broadcast, Category, CategoryId, Clue, ClueBatch, ClueId};
use trivia_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::play::PlayTestHandles;
use crate::views::{HomeView, PlayView};
use crate::vm::PlayIntent;

pub enum FakeReply {
    Clues { count: u64, answer: &'static str },
    Malformed,
}

pub struct FakeSource {
    reply: FakeReply,
}

#[async_trait]
impl ClueSource for FakeSource {
    async fn fetch(&self) -> Result<ClueBatch, FetchError> {
        match &self.reply {
            FakeReply::Clues { count, answer } => Ok((0..*count)
                .map(|id| {
                    Clue::new(
                        ClueId::new(id),
                        "This city hosts the <i>Louvre</i>",
                        *answer,
                        Category::new(CategoryId::new(3), "world capitals", true),
                        Broadcast::new("2004-12-31T12:00:00.000Z", true),
                    )
                    .with_value(400)
                })
                .collect::<Vec<_>>()
                .into()),
            FakeReply::Malformed => decode_batch("<html>down for maintenance</html>"),
        }
    }
}

#[derive(Clone)]
struct TestApp {
    source: Arc<dyn ClueSource>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn clue_source(&self) -> Arc<dyn ClueSource> {
        Arc::clone(&self.source)
    }

    fn clue_origin(&self) -> String {
        "https://clues.test/api/clues".to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Play,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    play_handles: Option<PlayTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.play_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play => rsx! { PlayView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub play_handles: Option<PlayTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until `duration` of tokio time has passed. Meant for paused-clock tests.
    pub async fn run_for(&mut self, duration: std::time::Duration) {
        let until = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < until {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn handles(&self) -> PlayTestHandles {
        self.play_handles
            .clone()
            .expect("play handles exist for the play view")
    }

    pub fn dispatch(&mut self, intent: PlayIntent) {
        let dispatch = self.handles().dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn type_answer(&mut self, text: &str) {
        let mut answer = self.handles().answer();
        self.dom.in_runtime(|| answer.set(text.to_string()));
        drive_dom(&mut self.dom);
    }

    pub fn seconds_left(&self) -> Option<u32> {
        let session = self.handles().session();
        self.dom
            .in_runtime(|| session.read().render_state().seconds_left)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, reply: FakeReply) -> ViewHarness {
    let play_handles = match view {
        ViewKind::Play => Some(PlayTestHandles::default()),
        ViewKind::Home => None,
    };
    let app = Arc::new(TestApp {
        source: Arc::new(FakeSource { reply }),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            play_handles: play_handles.clone(),
        },
    );

    ViewHarness { dom, play_handles }
}
