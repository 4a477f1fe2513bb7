/// Capture popup for the Article Compass extension

use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::article::Article;
use crate::config;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

/// Active-tab metadata handed over by the host browser
#[derive(Debug, Clone, Deserialize)]
struct ActiveTab {
    url: String,
    title: String,
}

/// How long the confirmation stays up before the popup closes itself
const CLOSE_DELAY_MS: u32 = 1_000;

#[derive(Clone, PartialEq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| SaveState::Idle);

    // Save handler: active tab -> record -> sheet, then self-close
    let on_save = {
        let state = state.clone();

        Callback::from(move |_| {
            let state = state.clone();

            state.set(SaveState::Saving);

            spawn_local(async move {
                match capture_current_tab().await {
                    Ok(_) => {
                        state.set(SaveState::Saved);

                        // Leave the confirmation up briefly, then close
                        // so repeated saves stay quick.
                        Timeout::new(CLOSE_DELAY_MS, || {
                            if let Some(window) = web_sys::window() {
                                let _ = window.close();
                            }
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("Error saving article: {}", e);
                        state.set(SaveState::Error(e));
                    }
                }
            });
        })
    };

    let is_busy = matches!(*state, SaveState::Saving);

    html! {
        <div class="popup">
            <h1 class="popup-title">{"Article Compass"}</h1>

            <Button onclick={on_save} disabled={is_busy} block={true}>
                {"📌 Save for later"}
            </Button>

            // Status display
            {match &*state {
                SaveState::Idle => html! {},
                SaveState::Saving => html! {
                    <div class="status-saving">
                        <Spinner />
                    </div>
                },
                SaveState::Saved => html! {
                    <p class="status status-ok">{"✓ Saved!"}</p>
                },
                SaveState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"✗ Error saving"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
            }}

            <p class="footer-popup">
                {"Article Compass v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn capture_current_tab() -> Result<(), String> {
    let config = config::load()?;
    let tab = active_tab().await?;

    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let article = Article::new(tab.url, tab.title, timestamp);

    api::save_article(&config.sheet_url, &article).await
}

async fn active_tab() -> Result<ActiveTab, String> {
    match getActiveTab().await {
        Ok(tab_js) => serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| format!("Failed to parse tab: {:?}", e)),
        Err(e) => Err(format!("Failed to query active tab: {:?}", e)),
    }
}
