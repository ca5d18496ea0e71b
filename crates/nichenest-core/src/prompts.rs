//! Prompt builders for the two Gemini requests.
//!
//! The prompts carry every filter the UI exposes: the recency window, the
//! low-competition toggle, and the page number all vary the outbound request
//! so filtering and pagination happen on the backend, not client-side.

use crate::config::PAGE_SIZE;
use crate::model::TimeRange;

/// Prompt for the top-keywords request.
pub fn top_keywords(time_range: TimeRange, low_competition_only: bool, page: u32) -> String {
    let mut prompt = format!(
        "List the top {count} book-related search keywords on Amazon in the {window}. \
         For each keyword, provide an estimated monthly search volume as a number, and \
         the estimated monthly revenue potential as a string (e.g., '$5k - $10k').",
        count = PAGE_SIZE,
        window = time_range.prompt_phrase(),
    );

    if low_competition_only {
        prompt.push_str(
            " Only include low-competition keywords, where relatively few established \
             authors are already publishing.",
        );
    }

    if page > 1 {
        let skipped = (page as usize - 1) * PAGE_SIZE;
        prompt.push_str(&format!(
            " Return page {page} of the ranking: skip the top {skipped} keywords and \
             list the next {count}.",
            count = PAGE_SIZE,
        ));
    }

    prompt
}

/// Prompt for the keyword-details request.
pub fn keyword_details(keyword: &str) -> String {
    format!(
        "For the book keyword \"{keyword}\" on Amazon, provide detailed insights for an \
         author. The response should be a JSON object containing: 1. 'relatedKeywords': \
         an array of objects, each with 'keyword' (string), 'volume' (number), \
         'competitors' (number of competing titles), and 'type' ('short' or 'long'). \
         2. 'profitableTopics': an array of strings with topic recommendations. \
         3. 'authorTips': an array of strings with other tips for authors researching \
         this niche."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_prompt_names_window_only() {
        let prompt = top_keywords(TimeRange::LastWeek, false, 1);
        assert!(prompt.contains("last week"));
        assert!(prompt.contains("top 12"));
        assert!(!prompt.contains("low-competition"));
        assert!(!prompt.contains("skip"));
    }

    #[test]
    fn low_competition_clause_is_threaded() {
        let prompt = top_keywords(TimeRange::Last24Hours, true, 1);
        assert!(prompt.contains("low-competition"));
    }

    #[test]
    fn later_pages_skip_prior_results() {
        let prompt = top_keywords(TimeRange::LastThreeMonths, false, 3);
        assert!(prompt.contains("page 3"));
        assert!(prompt.contains("skip the top 24"));
    }

    #[test]
    fn details_prompt_names_the_keyword_and_fields() {
        let prompt = keyword_details("cozy mystery plots");
        assert!(prompt.contains("\"cozy mystery plots\""));
        assert!(prompt.contains("relatedKeywords"));
        assert!(prompt.contains("competitors"));
        assert!(prompt.contains("authorTips"));
    }
}
