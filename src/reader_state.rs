/// Navigation and display state for the reader

use crate::article::Article;
use crate::gesture::{self, SwipeDirection};

/// The three mutually exclusive top-level surfaces of the reader page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Empty,
    Card,
}

/// Which panel the card shows. Exactly one is ever visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Compass,
    Summary,
}

/// What a summarize call resolved to, as far as the display cares
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// The backend produced a summary
    Summary(String),
    /// The backend answered with a structured error payload
    Error(String),
    /// The request itself failed (transport or malformed response)
    Failure(String),
}

pub const SUMMARY_PLACEHOLDER: &str = "Generating summary...";

const UNTITLED: &str = "Untitled";

/// All state the reader page owns: the loaded list, the cursor into it,
/// which surfaces are visible, and the in-progress touch gesture.
/// Lifetime is the component's lifetime; nothing here persists.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderState {
    articles: Vec<Article>,
    current_index: usize,
    render: RenderState,
    view: ViewMode,
    summary_text: String,
    touch_start_x: f64,
}

impl ReaderState {
    pub fn new() -> Self {
        ReaderState {
            articles: Vec::new(),
            current_index: 0,
            render: RenderState::Loading,
            view: ViewMode::Compass,
            summary_text: String::new(),
            touch_start_x: 0.0,
        }
    }

    pub fn render(&self) -> RenderState {
        self.render
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }

    pub fn current(&self) -> Option<&Article> {
        self.articles.get(self.current_index)
    }

    /// The list has been fetched. Zero articles collapses to the empty
    /// surface; otherwise show the first card.
    pub fn load_success(&mut self, articles: Vec<Article>) {
        if articles.is_empty() {
            self.render = RenderState::Empty;
        } else {
            self.articles = articles;
            self.current_index = 0;
            self.render = RenderState::Card;
        }
    }

    /// A failed load is indistinguishable from an empty sheet.
    pub fn load_failure(&mut self) {
        self.render = RenderState::Empty;
    }

    /// Move the cursor. Out-of-range indices leave the state untouched.
    /// Changing articles always lands back on the compass panel.
    pub fn display(&mut self, index: usize) {
        if index >= self.articles.len() {
            return;
        }

        self.current_index = index;
        self.view = ViewMode::Compass;
        self.summary_text.clear();
    }

    pub fn next(&mut self) {
        self.display(self.current_index + 1);
    }

    pub fn previous(&mut self) {
        if self.current_index > 0 {
            self.display(self.current_index - 1);
        }
    }

    /// 1-based "position/total" readout for the card header
    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.current_index + 1, self.articles.len())
    }

    pub fn headline(&self) -> &str {
        match self.current() {
            Some(article) if !article.title.is_empty() => &article.title,
            _ => UNTITLED,
        }
    }

    /// The current article's timestamp, if it has one to show
    pub fn timestamp(&self) -> Option<&str> {
        self.current()
            .map(|article| article.timestamp.as_str())
            .filter(|ts| !ts.is_empty())
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = x;
    }

    /// Resolve a finished touch into at most one navigation step.
    pub fn touch_end(&mut self, x: f64) {
        match gesture::swipe_direction(self.touch_start_x, x) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Previous) => self.previous(),
            None => {}
        }
    }

    /// Flip to the summary panel with the placeholder up front, so the
    /// user sees feedback before the request has even gone out.
    pub fn begin_summary(&mut self) {
        if self.current().is_none() {
            return;
        }

        self.view = ViewMode::Summary;
        self.summary_text = SUMMARY_PLACEHOLDER.to_string();
    }

    /// A summarize call resolved. The text is written regardless of
    /// which article is current by now; a response that outlived its
    /// article stays hidden behind the compass panel until the next
    /// summarize overwrites it.
    pub fn finish_summary(&mut self, outcome: SummaryOutcome) {
        self.summary_text = match outcome {
            SummaryOutcome::Summary(text) => text,
            SummaryOutcome::Error(e) => format!("Error: {}", e),
            SummaryOutcome::Failure(reason) => {
                format!("Failed to generate summary: {}", reason)
            }
        };
    }
}

impl Default for ReaderState {
    fn default() -> Self {
        Self::new()
    }
}
