use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_grid() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("N5 漢字"), "missing title in {html}");
    assert!(html.contains("Practice Mode"), "missing practice button in {html}");
    assert!(html.contains("Hide Japanese"), "missing toggle in {html}");
    for kanji in ["日", "月", "火", "水", "木"] {
        assert!(html.contains(kanji), "missing {kanji} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn detail_view_smoke_renders_card_front() {
    let mut harness = setup_view_harness(ViewKind::Detail(2));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("火"), "missing kanji in {html}");
    assert!(html.contains("3 / 5"), "missing position in {html}");
    assert!(html.contains("Tap the card to flip"), "missing hint in {html}");
    assert!(!html.contains("Vocabulary"), "back side rendered early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn detail_view_smoke_renders_missing_kanji() {
    let mut harness = setup_view_harness(ViewKind::Detail(99));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("That kanji does not exist."), "missing error in {html}");
    assert!(html.contains("Back"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_settings() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Practice Settings"), "missing title in {html}");
    assert!(html.contains("1 - 5"), "missing range label in {html}");
    for level in ["Easy", "Medium", "Hard"] {
        let button = format!(">{level}</button>");
        assert!(html.contains(&button), "missing {level} button in {html}");
    }
    assert!(html.contains("Start Practice"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_panel_smoke_renders_unanswered_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz(None));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("On&#39;yomi") || html.contains("On'yomi"), "missing prompt in {html}");
    assert!(!html.contains("quiz-option correct"), "highlight before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_panel_smoke_renders_feedback_after_wrong_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz(Some("カ")));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 0/1"), "missing score in {html}");
    assert!(html.contains("quiz-option correct"), "missing highlight in {html}");
    assert!(html.contains("Incorrect! It"), "missing feedback in {html}");
}
