//! Prompt construction and response cleanup for the assistant.

use geoquest_core::models::DatasetResult;

/// How many datasets are listed in a summary prompt
const SUMMARY_DATASET_LIMIT: usize = 10;

pub fn keyword_prompt(text: &str) -> String {
    format!(
        "You turn questions about Earth events into search keywords for the NASA CMR \
         dataset catalog. Reply with two to five lowercase keywords separated by spaces \
         and nothing else.\n\nQuestion: {}\nKeywords:",
        text.trim()
    )
}

pub fn summary_prompt(datasets: &[DatasetResult]) -> String {
    let mut listing = String::new();
    for dataset in datasets.iter().take(SUMMARY_DATASET_LIMIT) {
        listing.push_str(&format!(
            "- id: {} | title: {} | data center: {} | start: {}\n",
            dataset.id.as_deref().unwrap_or("unknown"),
            dataset.title.as_deref().unwrap_or("untitled"),
            dataset.data_center.as_deref().unwrap_or("unknown"),
            dataset.time_start,
        ));
    }

    format!(
        "These Earth-science datasets matched a user's search:\n{}\n\
         Respond with JSON only, shaped as \
         {{\"overview\": string, \"recommendations\": [{{\"id\": string, \"reason\": string}}]}}. \
         Recommend at most three datasets by id.",
        listing
    )
}

/// Normalise a model's keyword reply to a single line of plain words.
///
/// Returns `None` when nothing usable is left.
pub fn clean_keywords(reply: &str) -> Option<String> {
    let line = reply.lines().map(str::trim).find(|l| !l.is_empty())?;
    let line = line.strip_prefix("Keywords:").unwrap_or(line);
    let cleaned: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|w| w.trim_matches(|c: char| c == '"' || c == '\'' || c == '.'))
        .filter(|w| !w.is_empty())
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.join(" "))
    }
}
