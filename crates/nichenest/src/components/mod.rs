//! UI components for the NicheNest application.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar (logo + tagline), Footer
//! - `keywords`: FilterBar, ListScreen, KeywordGrid, KeywordCard, Pagination, EmptyState
//! - `details`: DetailScreen with the related-keywords table, topics, and tips
//! - `spinner` / `error_panel`: the loading and error render modes
//!
//! # Context Providers
//!
//! Components share state through Dioxus context:
//!
//! ```ignore
//! // Read or transition the view state from any component
//! let mut state = use_view_state();
//!
//! // Trigger a fetch after a successful transition
//! let fetches = use_fetch_sender();
//! if state.write().next_page() {
//!     fetches.send(FetchMessage::LoadKeywords);
//! }
//! ```
//!
//! Transitions always go through [`ViewState`] methods; a method returning
//! `false` means the control was inert (page 1, no more results, fetch in
//! flight) and no message must be sent.

mod app_shell;
mod details;
mod error_panel;
mod keywords;
mod spinner;

pub use app_shell::{AppBar, Footer};
pub use details::DetailScreen;
pub use error_panel::ErrorPanel;
pub use keywords::{EmptyState, FilterBar, KeywordCard, KeywordGrid, ListScreen, Pagination};
pub use spinner::Spinner;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use nichenest_core::backend::GeminiBackend;
use nichenest_core::config::GeminiConfig;
use nichenest_core::service::KeywordService;
use nichenest_core::view::ViewState;

/// Messages for the fetch coroutine. One message per logical fetch; the
/// coroutine processes them in order, so at most one request is in flight.
pub enum FetchMessage {
    /// Fetch the keyword list for the filters currently in state.
    LoadKeywords,
    /// Fetch detail insights for the selected keyword.
    LoadDetails(String),
}

/// Shared view-state signal.
pub fn use_view_state() -> Signal<ViewState> {
    use_context::<Signal<ViewState>>()
}

/// Sender used by components to trigger fetches.
pub fn use_fetch_sender() -> Coroutine<FetchMessage> {
    use_context::<Coroutine<FetchMessage>>()
}

/// Root component: owns the view state, runs the fetch coroutine, and
/// routes between the list screen and the detail screen.
#[component]
pub fn App() -> Element {
    let view_state = use_signal(ViewState::new);
    use_context_provider(|| view_state);

    // Fetch coroutine. The generation is snapshotted before each call so a
    // completion that arrives after a newer transition is discarded by the
    // state machine instead of clobbering it.
    let fetch_task = use_coroutine({
        let mut state = view_state;
        move |mut rx: UnboundedReceiver<FetchMessage>| async move {
            let service = KeywordService::new(GeminiBackend::new(GeminiConfig::from_env()));
            while let Some(msg) = rx.next().await {
                match msg {
                    FetchMessage::LoadKeywords => {
                        let (time_range, low_competition, page, generation) = {
                            let snapshot = state.read();
                            (
                                snapshot.time_range(),
                                snapshot.low_competition_only(),
                                snapshot.page(),
                                snapshot.generation(),
                            )
                        };
                        let result = service
                            .fetch_top_keywords(time_range, low_competition, page)
                            .await;
                        state.write().finish_list_fetch(generation, result);
                    }
                    FetchMessage::LoadDetails(keyword) => {
                        let generation = state.read().generation();
                        let result = service.fetch_keyword_details(&keyword).await;
                        state
                            .write()
                            .finish_details_fetch(generation, &keyword, result);
                    }
                }
            }
        }
    });
    use_context_provider(|| fetch_task);

    // Initial mount: load the first page. No signals are read here, so the
    // effect runs once.
    use_effect(move || {
        fetch_task.send(FetchMessage::LoadKeywords);
    });

    let selected = view_state.read().selected_keyword().map(str::to_owned);

    rsx! {
        div { class: "nn-app",
            // The header and filters step aside while a keyword is open,
            // the detail screen brings its own back control.
            if selected.is_none() {
                AppBar {}
                FilterBar {}
            }

            main { class: "nn-main",
                if let Some(keyword) = selected {
                    DetailScreen { keyword }
                } else {
                    ListScreen {}
                }
            }

            Footer {}
        }
    }
}
