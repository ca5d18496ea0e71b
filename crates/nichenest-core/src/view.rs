//! Single-screen view-state machine.
//!
//! The render mode is an explicit tagged enum rather than a pile of
//! booleans, so impossible combinations (loading AND error, detail data
//! without a selection) cannot be represented. All transitions funnel
//! through [`ViewState`] methods; the UI layer only reads accessors and
//! calls transitions.
//!
//! Every transition that should trigger a fetch bumps a generation counter
//! and returns `true`. A fetch completion carries the generation observed
//! when it started; completions whose generation no longer matches are
//! discarded instead of being written into state, which closes the
//! stale-response race around rapid filter changes.

use crate::config::PAGE_SIZE;
use crate::error::FetchError;
use crate::model::{KeywordDetails, KeywordSummary, TimeRange};

/// What the single screen is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// A fetch is in flight; triggering controls are disabled.
    Loading,
    /// A fetch failed; the message is shown verbatim, no automatic retry.
    Error(String),
    /// The keyword grid (possibly empty, rendered as the empty panel).
    List(Vec<KeywordSummary>),
    /// Insights for the selected keyword.
    Details(KeywordDetails),
}

/// The view controller's working set.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    time_range: TimeRange,
    low_competition_only: bool,
    page: u32,
    has_more_results: bool,
    selected_keyword: Option<String>,
    mode: ViewMode,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Initial state: loading the first page of the 24-hour ranking.
    ///
    /// The caller is expected to kick off the matching list fetch on mount.
    pub fn new() -> Self {
        Self {
            time_range: TimeRange::Last24Hours,
            low_competition_only: false,
            page: 1,
            has_more_results: true,
            selected_keyword: None,
            mode: ViewMode::Loading,
            generation: 1,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn low_competition_only(&self) -> bool {
        self.low_competition_only
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more_results(&self) -> bool {
        self.has_more_results
    }

    pub fn selected_keyword(&self) -> Option<&str> {
        self.selected_keyword.as_deref()
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Generation of the most recently triggered fetch. A completion handler
    /// must pass back the value it observed when the fetch started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.mode, ViewMode::Loading)
    }

    /// Previous is inert at page 1 or while a fetch is in flight.
    pub fn can_go_prev(&self) -> bool {
        self.page > 1 && !self.is_loading()
    }

    /// Next is inert without more results or while a fetch is in flight.
    pub fn can_go_next(&self) -> bool {
        self.has_more_results && !self.is_loading()
    }

    fn begin_fetch(&mut self) {
        self.mode = ViewMode::Loading;
        self.generation += 1;
    }

    /// Switches the recency window. Resets the page to 1 and the
    /// more-results flag, and enters loading. Returns whether a list fetch
    /// should be triggered.
    pub fn set_time_range(&mut self, time_range: TimeRange) -> bool {
        if self.selected_keyword.is_some() || self.time_range == time_range {
            return false;
        }
        self.time_range = time_range;
        self.page = 1;
        self.has_more_results = true;
        self.begin_fetch();
        true
    }

    /// Flips the low-competition filter, with the same reset-and-refetch
    /// behavior as a time-range change.
    pub fn toggle_low_competition(&mut self) -> bool {
        if self.selected_keyword.is_some() {
            return false;
        }
        self.low_competition_only = !self.low_competition_only;
        self.page = 1;
        self.has_more_results = true;
        self.begin_fetch();
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.selected_keyword.is_some() || !self.can_go_next() {
            return false;
        }
        self.page += 1;
        self.begin_fetch();
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.selected_keyword.is_some() || !self.can_go_prev() {
            return false;
        }
        self.page -= 1;
        self.begin_fetch();
        true
    }

    /// Selects a keyword card. Any previously loaded details are discarded
    /// immediately; list fetching stays suspended until the selection is
    /// cleared. Returns whether a details fetch should be triggered.
    pub fn select_keyword(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return false;
        }
        self.selected_keyword = Some(keyword);
        self.begin_fetch();
        true
    }

    /// The back control: drops the selection and its details and re-enters
    /// loading for a list fetch with filters and page untouched.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected_keyword.is_none() {
            return false;
        }
        self.selected_keyword = None;
        self.begin_fetch();
        true
    }

    /// Applies a completed list fetch.
    ///
    /// Dropped without effect when the generation is stale or a keyword has
    /// been selected since the fetch started. On success the more-results
    /// flag is recomputed as "a full page came back".
    pub fn finish_list_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<KeywordSummary>, FetchError>,
    ) {
        if generation != self.generation || self.selected_keyword.is_some() {
            tracing::debug!(generation, "Discarding stale list fetch result");
            return;
        }
        match result {
            Ok(keywords) => {
                self.has_more_results = keywords.len() == PAGE_SIZE;
                self.mode = ViewMode::List(keywords);
            }
            Err(err) => self.mode = ViewMode::Error(err.to_string()),
        }
    }

    /// Applies a completed details fetch for `keyword`.
    ///
    /// Dropped without effect when the generation is stale or the selection
    /// has moved on to a different keyword.
    pub fn finish_details_fetch(
        &mut self,
        generation: u64,
        keyword: &str,
        result: Result<KeywordDetails, FetchError>,
    ) {
        if generation != self.generation || self.selected_keyword.as_deref() != Some(keyword) {
            tracing::debug!(generation, keyword, "Discarding stale details fetch result");
            return;
        }
        match result {
            Ok(details) => self.mode = ViewMode::Details(details),
            Err(err) => self.mode = ViewMode::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(count: usize) -> Vec<KeywordSummary> {
        (0..count)
            .map(|i| KeywordSummary {
                keyword: format!("kw {i}"),
                volume: i as u64,
                revenue: "$1k - $2k".into(),
            })
            .collect()
    }

    fn details() -> KeywordDetails {
        KeywordDetails {
            related_keywords: Vec::new(),
            profitable_topics: vec!["topic".into()],
            author_tips: vec!["tip".into()],
        }
    }

    /// Drives the state to a loaded list so transitions are not inert.
    fn loaded(count: usize) -> ViewState {
        let mut state = ViewState::new();
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(count)));
        state
    }

    #[test]
    fn starts_loading_page_one() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert_eq!(state.page(), 1);
        assert!(state.has_more_results());
        assert!(state.selected_keyword().is_none());
    }

    #[test]
    fn full_page_means_more_results() {
        let state = loaded(PAGE_SIZE);
        assert!(state.has_more_results());
        assert!(matches!(state.mode(), ViewMode::List(items) if items.len() == PAGE_SIZE));
    }

    #[test]
    fn short_page_means_no_more_results() {
        let state = loaded(3);
        assert!(!state.has_more_results());
    }

    #[test]
    fn time_range_change_resets_page_and_more_flag() {
        let mut state = loaded(3);
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(PAGE_SIZE)));
        assert!(state.next_page());
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(2)));
        assert_eq!(state.page(), 2);
        assert!(!state.has_more_results());

        assert!(state.set_time_range(TimeRange::LastMonth));
        assert_eq!(state.page(), 1);
        assert!(state.has_more_results());
        assert!(state.is_loading());
    }

    #[test]
    fn same_time_range_is_inert() {
        let mut state = loaded(PAGE_SIZE);
        assert!(!state.set_time_range(TimeRange::Last24Hours));
        assert!(!state.is_loading());
    }

    #[test]
    fn toggle_resets_page_regardless_of_prior_state() {
        let mut state = loaded(PAGE_SIZE);
        assert!(state.next_page());
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(PAGE_SIZE)));
        assert_eq!(state.page(), 2);

        assert!(state.toggle_low_competition());
        assert!(state.low_competition_only());
        assert_eq!(state.page(), 1);
        assert!(state.has_more_results());
    }

    #[test]
    fn prev_is_inert_on_page_one() {
        let mut state = loaded(PAGE_SIZE);
        assert!(!state.prev_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn next_is_inert_without_more_results() {
        let mut state = loaded(3);
        assert!(!state.next_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn pagination_is_inert_while_loading() {
        let mut state = loaded(PAGE_SIZE);
        assert!(state.next_page());
        assert!(state.is_loading());
        assert!(!state.next_page());
        assert!(!state.prev_page());
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn select_then_back_preserves_filters() {
        let mut state = loaded(PAGE_SIZE);
        state.set_time_range(TimeRange::LastWeek);
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(PAGE_SIZE)));
        state.toggle_low_competition();
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(PAGE_SIZE)));

        assert!(state.select_keyword("kw 1"));
        assert!(state.is_loading());
        let generation = state.generation();
        state.finish_details_fetch(generation, "kw 1", Ok(details()));
        assert!(matches!(state.mode(), ViewMode::Details(_)));

        assert!(state.clear_selection());
        assert!(state.is_loading());
        assert!(state.selected_keyword().is_none());
        assert_eq!(state.time_range(), TimeRange::LastWeek);
        assert!(state.low_competition_only());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn details_failure_renders_error_mode() {
        let mut state = loaded(PAGE_SIZE);
        state.select_keyword("kw 0");
        let generation = state.generation();
        state.finish_details_fetch(
            generation,
            "kw 0",
            Err(FetchError::Details("kw 0".into())),
        );
        match state.mode() {
            ViewMode::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected error mode, got {other:?}"),
        }
    }

    #[test]
    fn list_failure_renders_error_mode_verbatim() {
        let mut state = ViewState::new();
        let generation = state.generation();
        state.finish_list_fetch(generation, Err(FetchError::TopKeywords));
        assert_eq!(
            state.mode(),
            &ViewMode::Error(FetchError::TopKeywords.to_string())
        );
    }

    #[test]
    fn stale_list_result_is_discarded() {
        let mut state = loaded(PAGE_SIZE);
        assert!(state.next_page());
        let stale_generation = state.generation();
        assert!(state.set_time_range(TimeRange::LastMonth));

        // The page-2 fetch for the old range lands after the range change.
        state.finish_list_fetch(stale_generation, Ok(summaries(5)));
        assert!(state.is_loading());
        assert!(state.has_more_results());

        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(7)));
        assert!(matches!(state.mode(), ViewMode::List(items) if items.len() == 7));
    }

    #[test]
    fn details_for_a_superseded_selection_are_discarded() {
        let mut state = loaded(PAGE_SIZE);
        state.select_keyword("first");
        let first_generation = state.generation();
        state.select_keyword("second");

        state.finish_details_fetch(first_generation, "first", Ok(details()));
        assert!(state.is_loading());

        let generation = state.generation();
        state.finish_details_fetch(generation, "second", Ok(details()));
        assert!(matches!(state.mode(), ViewMode::Details(_)));
    }

    #[test]
    fn list_results_never_land_while_a_keyword_is_selected() {
        let mut state = loaded(PAGE_SIZE);
        state.select_keyword("kw 3");
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(summaries(4)));
        assert!(state.is_loading());
    }

    #[test]
    fn filter_transitions_are_inert_in_detail_view() {
        let mut state = loaded(PAGE_SIZE);
        state.select_keyword("kw 2");
        assert!(!state.set_time_range(TimeRange::LastMonth));
        assert!(!state.toggle_low_competition());
        assert!(!state.next_page());
        assert!(!state.prev_page());
        assert_eq!(state.time_range(), TimeRange::Last24Hours);
    }

    #[test]
    fn empty_list_is_list_mode_not_error() {
        let mut state = ViewState::new();
        let generation = state.generation();
        state.finish_list_fetch(generation, Ok(Vec::new()));
        assert_eq!(state.mode(), &ViewMode::List(Vec::new()));
        assert!(!state.has_more_results());
    }
}
