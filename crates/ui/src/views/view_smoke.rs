use std::time::Duration;

use crate::vm::PlayIntent;

use super::test_harness::{FakeReply, ViewKind, setup_view_harness};

const TEN_PARIS: FakeReply = FakeReply::Clues {
    count: 10,
    answer: "Paris",
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_rules_and_origin() {
    let mut harness = setup_view_harness(ViewKind::Home, TEN_PARIS);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("How to play"), "missing title in {html}");
    assert!(html.contains("45 seconds"), "missing timer rule in {html}");
    assert!(
        html.contains("Clues from https://clues.test/api/clues"),
        "missing origin in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_idle_offers_start() {
    let mut harness = setup_view_harness(ViewKind::Play, TEN_PARIS);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start"), "missing start in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("--"), "missing idle timer in {html}");
    assert!(!html.contains("Question 1"), "unexpected question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_start_and_answer() {
    let mut harness = setup_view_harness(ViewKind::Play, TEN_PARIS);
    harness.rebuild();

    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    assert!(html.contains("Category: world capitals"), "missing category in {html}");
    assert!(html.contains("<i>Louvre</i>"), "missing clue text in {html}");
    assert!(html.contains("$400"), "missing value in {html}");
    assert!(html.contains("Aired Dec 31, 2004"), "missing air date in {html}");
    assert!(html.contains("45"), "missing full timer in {html}");
    assert!(!html.contains("timer--urgent"), "timer urgent too early in {html}");

    harness.type_answer("What is paris?");
    harness.dispatch(PlayIntent::Submit);
    let html = harness.render();
    assert!(html.contains("CORRECT!"), "missing verdict in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");

    harness.dispatch(PlayIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 2 of 10"), "missing next question in {html}");
    assert!(!html.contains("CORRECT!"), "stale verdict in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_blank_and_wrong_answers() {
    let mut harness = setup_view_harness(ViewKind::Play, TEN_PARIS);
    harness.rebuild();
    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;

    harness.type_answer("   ");
    harness.dispatch(PlayIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Please enter an answer"), "missing prompt in {html}");

    harness.type_answer("London");
    harness.dispatch(PlayIntent::Submit);
    let html = harness.render();
    assert!(html.contains("WRONG!"), "missing verdict in {html}");
    assert!(html.contains("Score: 0"), "score changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_countdown_turns_urgent_then_reveals() {
    let mut harness = setup_view_harness(ViewKind::Play, TEN_PARIS);
    harness.rebuild();
    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;

    for _ in 0..35 {
        harness.dispatch(PlayIntent::Tick);
    }
    assert_eq!(harness.seconds_left(), Some(10));
    let html = harness.render();
    assert!(html.contains("timer--urgent"), "timer not urgent in {html}");

    for _ in 0..10 {
        harness.dispatch(PlayIntent::Tick);
    }
    let html = harness.render();
    assert!(
        html.contains("The correct answer was: Paris"),
        "missing reveal in {html}"
    );
    assert!(html.contains("Next"), "missing next in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_failed_fetch_offers_retry() {
    let mut harness = setup_view_harness(ViewKind::Play, FakeReply::Malformed);
    harness.rebuild();
    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("The trivia server sent clues we could not read."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert_eq!(harness.seconds_left(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_short_batch_is_reported() {
    let reply = FakeReply::Clues {
        count: 4,
        answer: "x",
    };
    let mut harness = setup_view_harness(ViewKind::Play, reply);
    harness.rebuild();
    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("only sent 4 clues"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn play_view_smoke_countdown_pauses_on_answer_and_restarts_on_next() {
    let mut harness = setup_view_harness(ViewKind::Play, TEN_PARIS);
    harness.rebuild();
    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;
    assert_eq!(harness.seconds_left(), Some(45));

    harness.run_for(Duration::from_millis(3_500)).await;
    assert_eq!(harness.seconds_left(), Some(42));

    harness.type_answer("paris");
    harness.dispatch(PlayIntent::Submit);
    assert_eq!(harness.seconds_left(), None);
    harness.run_for(Duration::from_secs(3)).await;
    assert_eq!(harness.seconds_left(), None);
    assert!(harness.render().contains("CORRECT!"));

    harness.dispatch(PlayIntent::Advance);
    assert_eq!(harness.seconds_left(), Some(45));
    harness.run_for(Duration::from_millis(2_500)).await;
    assert_eq!(harness.seconds_left(), Some(43));
    assert!(harness.render().contains("Question 2 of 10"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn play_view_smoke_countdown_runs_out_without_input() {
    let mut harness = setup_view_harness(ViewKind::Play, TEN_PARIS);
    harness.rebuild();
    harness.dispatch(PlayIntent::Start);
    harness.drive_async().await;

    harness.run_for(Duration::from_millis(45_500)).await;
    assert_eq!(harness.seconds_left(), Some(0));
    let html = harness.render();
    assert!(
        html.contains("The correct answer was: Paris"),
        "missing reveal in {html}"
    );

    harness.run_for(Duration::from_secs(2)).await;
    assert_eq!(harness.seconds_left(), Some(0));
    assert!(harness.render().contains("Question 1 of 10"));
}
