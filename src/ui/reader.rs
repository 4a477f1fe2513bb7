/// Reader page: one saved article at a time, swipe or arrow through

use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::article::Article;
use crate::config::{self, AppConfig};
use crate::reader_state::{ReaderState, RenderState, SummaryOutcome, ViewMode};

/// Every way the page can change state funnels through one action
/// type, so document-level listeners and render-time callbacks all
/// drive the same machine.
pub enum ReaderAction {
    LoadSucceeded(Vec<Article>),
    LoadFailed,
    Next,
    Previous,
    TouchStart(f64),
    TouchEnd(f64),
    BeginSummary,
    FinishSummary(SummaryOutcome),
}

impl Reducible for ReaderState {
    type Action = ReaderAction;

    fn reduce(self: Rc<Self>, action: ReaderAction) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ReaderAction::LoadSucceeded(articles) => next.load_success(articles),
            ReaderAction::LoadFailed => next.load_failure(),
            ReaderAction::Next => next.next(),
            ReaderAction::Previous => next.previous(),
            ReaderAction::TouchStart(x) => next.touch_start(x),
            ReaderAction::TouchEnd(x) => next.touch_end(x),
            ReaderAction::BeginSummary => next.begin_summary(),
            ReaderAction::FinishSummary(outcome) => next.finish_summary(outcome),
        }

        Rc::new(next)
    }
}

#[function_component(Reader)]
pub fn reader() -> Html {
    let state = use_reducer(ReaderState::new);
    let app_config = use_state(|| None::<AppConfig>);

    // Load the article list exactly once per page lifetime
    {
        let dispatch = state.dispatcher();
        let app_config = app_config.clone();

        use_effect_with((), move |_| {
            match config::load() {
                Ok(config) => {
                    let sheet_url = config.sheet_url.clone();
                    app_config.set(Some(config));

                    spawn_local(async move {
                        match api::fetch_articles(&sheet_url).await {
                            Ok(feed) => {
                                dispatch.dispatch(ReaderAction::LoadSucceeded(
                                    feed.into_newest_first(),
                                ));
                            }
                            Err(e) => {
                                log::error!("Error loading articles: {}", e);
                                dispatch.dispatch(ReaderAction::LoadFailed);
                            }
                        }
                    });
                }
                Err(e) => {
                    log::error!("Reader not configured: {}", e);
                    dispatch.dispatch(ReaderAction::LoadFailed);
                }
            }
            || ()
        });
    }

    // Keyboard and touch channels are page-wide, so they hang off the
    // document rather than any one element.
    {
        let dispatch = state.dispatcher();

        use_effect_with((), move |_| {
            let listeners = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    let on_keydown = {
                        let dispatch = dispatch.clone();
                        Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                            match e.key().as_str() {
                                "ArrowLeft" | "ArrowUp" => {
                                    dispatch.dispatch(ReaderAction::Previous)
                                }
                                "ArrowRight" | "ArrowDown" => {
                                    dispatch.dispatch(ReaderAction::Next)
                                }
                                _ => {}
                            }
                        })
                            as Box<dyn Fn(web_sys::KeyboardEvent)>)
                    };

                    let on_touchstart = {
                        let dispatch = dispatch.clone();
                        Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                            if let Some(touch) = e.changed_touches().get(0) {
                                dispatch
                                    .dispatch(ReaderAction::TouchStart(touch.screen_x() as f64));
                            }
                        })
                            as Box<dyn Fn(web_sys::TouchEvent)>)
                    };

                    let on_touchend = {
                        let dispatch = dispatch.clone();
                        Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                            if let Some(touch) = e.changed_touches().get(0) {
                                dispatch.dispatch(ReaderAction::TouchEnd(touch.screen_x() as f64));
                            }
                        })
                            as Box<dyn Fn(web_sys::TouchEvent)>)
                    };

                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "touchstart",
                        on_touchstart.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "touchend",
                        on_touchend.as_ref().unchecked_ref(),
                    );

                    (document, on_keydown, on_touchstart, on_touchend)
                });

            move || {
                if let Some((document, on_keydown, on_touchstart, on_touchend)) = listeners {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "touchstart",
                        on_touchstart.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "touchend",
                        on_touchend.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Open the current article in a new browsing context
    let on_headline_click = {
        let state = state.clone();

        Callback::from(move |_| {
            if let Some(article) = state.current() {
                if !article.url.is_empty() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url_and_target(&article.url, "_blank");
                    }
                }
            }
        })
    };

    // Ask the backend for a summary of the current article. The
    // placeholder goes up synchronously, before the request is sent.
    let on_compass_click = {
        let state = state.clone();
        let app_config = app_config.clone();

        Callback::from(move |_| {
            let Some(config) = (*app_config).clone() else {
                return;
            };
            let Some(article) = state.current() else {
                return;
            };
            let url = article.url.clone();

            state.dispatch(ReaderAction::BeginSummary);

            let dispatch = state.dispatcher();
            spawn_local(async move {
                let outcome = api::summarize(&config.backend_url, &url).await;
                dispatch.dispatch(ReaderAction::FinishSummary(outcome));
            });
        })
    };

    html! {
        <div class="container">
            {match state.render() {
                RenderState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading articles..."}</p>
                    </div>
                },
                RenderState::Empty => html! {
                    <div class="empty-state">
                        <p>{"No saved articles yet."}</p>
                        <p class="empty-state-hint">{"Save a page from the extension popup to see it here."}</p>
                    </div>
                },
                RenderState::Card => html! {
                    <div class="card">
                        <h1 class="headline" onclick={on_headline_click}>
                            {state.headline().to_string()}
                        </h1>
                        <p class="counter">{state.counter_text()}</p>

                        {match state.timestamp() {
                            Some(ts) => html! {
                                <p class="timestamp">{format_timestamp(ts)}</p>
                            },
                            None => html! {},
                        }}

                        // One panel at a time: compass or summary
                        {match state.view() {
                            ViewMode::Compass => html! {
                                <div class="compass-view" onclick={on_compass_click}>
                                    <div class="compass-needle">{"🧭"}</div>
                                    <p class="compass-hint">{"Tap for a one-sentence summary"}</p>
                                </div>
                            },
                            ViewMode::Summary => html! {
                                <div class="summary-view">
                                    <p class="summary-text">{state.summary_text().to_string()}</p>
                                </div>
                            },
                        }}
                    </div>
                },
            }}
        </div>
    }
}

// Helper functions

/// Render an ISO timestamp the way the user's locale writes dates.
fn format_timestamp(timestamp: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(timestamp));
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}
