#![cfg(target_arch = "wasm32")]

//! In-browser smoke tests, run with `wasm-pack test --headless --chrome`

use article_compass::article::ArticleFeed;
use article_compass::reader_state::{ReaderState, RenderState};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn feed_response_drives_reader_into_card_state() {
    let feed: ArticleFeed = serde_json::from_str(
        r#"{"articles":[
            {"url":"https://a.example","title":"A","timestamp":"2024-01-01T00:00:00Z"},
            {"url":"https://b.example","title":"B","timestamp":"2024-01-02T00:00:00Z"}
        ]}"#,
    )
    .unwrap();

    let mut state = ReaderState::new();
    state.load_success(feed.into_newest_first());

    assert_eq!(state.render(), RenderState::Card);
    assert_eq!(state.headline(), "B");
    assert_eq!(state.counter_text(), "1/2");
}

#[wasm_bindgen_test]
fn empty_feed_drives_reader_into_empty_state() {
    let feed: ArticleFeed = serde_json::from_str("{}").unwrap();

    let mut state = ReaderState::new();
    state.load_success(feed.into_newest_first());

    assert_eq!(state.render(), RenderState::Empty);
}
