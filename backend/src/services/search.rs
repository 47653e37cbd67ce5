//! School search and autocomplete over the repository's school list.

use crate::api::{SchoolSuggestion, SearchResults};
use crate::db::repository::{FullRepository, RepositoryResult, SchoolRepository};
use crate::models::SchoolDetails;
use crate::services::pagination::{paginate, PageRequest, PAGE_SIZE};

/// Shortest text the autocomplete answers.
pub const MIN_SUGGEST_LENGTH: usize = 2;
/// Default number of autocomplete entries.
pub const SUGGEST_LIMIT: usize = 10;
/// Upper bound a caller may request.
pub const MAX_SUGGEST_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    NamePrefix,
    Other,
}

fn normalize_postcode(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// How `school` matches `text`, if at all. `text` must already be trimmed.
fn match_school(school: &SchoolDetails, text: &str) -> Option<MatchRank> {
    if text.chars().all(|c| c.is_ascii_digit()) {
        return school
            .urn
            .to_string()
            .starts_with(text)
            .then_some(MatchRank::Other);
    }

    let needle = text.to_lowercase();
    let name = school.name.to_lowercase();
    if name.starts_with(&needle) {
        return Some(MatchRank::NamePrefix);
    }
    if name.contains(&needle) || school.address.town.to_lowercase().contains(&needle) {
        return Some(MatchRank::Other);
    }

    let postcode_needle = normalize_postcode(text);
    if !postcode_needle.is_empty()
        && normalize_postcode(&school.address.postcode).starts_with(&postcode_needle)
    {
        return Some(MatchRank::Other);
    }
    None
}

/// Matching schools in display order: name-prefix matches first, then by
/// lowercase name, then URN.
fn ranked_matches<'a>(schools: &'a [SchoolDetails], text: &str) -> Vec<&'a SchoolDetails> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(MatchRank, String, &SchoolDetails)> = schools
        .iter()
        .filter_map(|school| {
            match_school(school, text).map(|rank| (rank, school.name.to_lowercase(), school))
        })
        .collect();

    matches.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.urn.cmp(&b.2.urn))
    });

    matches.into_iter().map(|(_, _, school)| school).collect()
}

/// Autocomplete suggestions for `text`, at most `limit` entries.
pub fn suggest(schools: &[SchoolDetails], text: &str, limit: usize) -> Vec<SchoolSuggestion> {
    if limit == 0 || text.trim().chars().count() < MIN_SUGGEST_LENGTH {
        return Vec::new();
    }
    let limit = limit.min(MAX_SUGGEST_LIMIT);

    ranked_matches(schools, text)
        .into_iter()
        .take(limit)
        .map(|school| SchoolSuggestion {
            urn: school.urn,
            name: school.name.clone(),
            town: school.address.town.clone(),
            postcode: school.address.postcode.clone(),
        })
        .collect()
}

/// One page of search results for `text`. Empty text yields no results.
pub fn search(schools: &[SchoolDetails], text: &str, page: PageRequest) -> SearchResults {
    let summaries: Vec<_> = ranked_matches(schools, text)
        .into_iter()
        .map(SchoolDetails::summary)
        .collect();
    let page = paginate(&summaries, page, PAGE_SIZE);

    SearchResults {
        query: text.trim().to_string(),
        results: page.items,
        page_info: page.info,
    }
}

/// Search the repository's schools.
pub async fn search_schools(
    repo: &dyn FullRepository,
    text: &str,
    page: PageRequest,
) -> RepositoryResult<SearchResults> {
    let schools = repo.list_schools().await?;
    Ok(search(&schools, text, page))
}

/// Autocomplete against the repository's schools.
pub async fn suggest_schools(
    repo: &dyn FullRepository,
    text: &str,
    limit: usize,
) -> RepositoryResult<Vec<SchoolSuggestion>> {
    if text.trim().chars().count() < MIN_SUGGEST_LENGTH {
        return Ok(Vec::new());
    }
    let schools = repo.list_schools().await?;
    Ok(suggest(&schools, text, limit))
}
