//! Similar-schools comparison pipeline.
//!
//! ```text
//! peer group ─► filter ─► sort ─┬─► paginate ─► list page
//!                               └─► project   ─► map markers
//! ```
//!
//! Every request re-derives the view from the repository's peer group; no
//! state survives between calls.

use serde::{Deserialize, Serialize};

use crate::api::ComparisonView;
use crate::db::repository::{
    FullRepository, RepositoryResult, SchoolRepository, SimilarSchoolsRepository,
};
use crate::models::{SchoolDetails, SimilarSchool, Urn};
use crate::services::filter::{filter_options, filter_schools, FilterCriteria, FilterDimension};
use crate::services::map_projection::project_map_schools;
use crate::services::pagination::{paginate, PageRequest, PAGE_SIZE};
use crate::services::sort::{sort_schools, SortKey};

/// Display parameters of one comparison request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarSchoolsQuery {
    pub filters: FilterCriteria,
    pub sort: SortKey,
    pub page: PageRequest,
    pub compare_with: Option<Urn>,
}

impl SimilarSchoolsQuery {
    /// Build a query from decoded query-string pairs.
    ///
    /// Filter keys may repeat. For `sort`, `page` and `compare_with` the last
    /// occurrence wins. Unknown keys and unparseable values are ignored.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = SimilarSchoolsQuery::default();
        let mut sort: Option<&str> = None;
        let mut page: Option<&str> = None;

        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let value = value.as_ref();
            if let Some(dimension) = FilterDimension::from_key(key) {
                query.filters.select(dimension, value);
                continue;
            }
            match key {
                "sort" => sort = Some(value),
                "page" => page = Some(value),
                "compare_with" => query.compare_with = value.parse::<Urn>().ok(),
                _ => {}
            }
        }

        query.sort = SortKey::parse(sort);
        query.page = PageRequest::parse(page);
        query
    }
}

/// Run the filter/sort/paginate/project pipeline for one school.
pub fn build_comparison_view(
    school: &SchoolDetails,
    peers: &[SimilarSchool],
    query: &SimilarSchoolsQuery,
) -> ComparisonView {
    let filtered = filter_schools(peers, &query.filters);
    let sorted = sort_schools(&filtered, query.sort);
    let page = paginate(&sorted, query.page, PAGE_SIZE);
    let map_schools = project_map_schools(&sorted, school.urn, query.compare_with);

    log::debug!(
        "similar schools for {}: {} peers, {} after filters, page {} of {}",
        school.urn,
        peers.len(),
        sorted.len(),
        page.info.page,
        page.info.last_page
    );

    ComparisonView {
        school: school.summary(),
        compare_with: query.compare_with,
        sort: query.sort,
        filters: query.filters.clone(),
        filter_options: filter_options(peers, &query.filters),
        results: page.items,
        page_info: page.info,
        map_schools,
    }
}

/// Fetch a school and its peer group, then build the comparison view.
///
/// # Errors
/// `RepositoryError::NotFound` when the school or its peer group is unknown.
pub async fn get_comparison_view(
    repo: &dyn FullRepository,
    urn: Urn,
    query: &SimilarSchoolsQuery,
) -> RepositoryResult<ComparisonView> {
    let school = repo.get_school(urn).await?;
    let peers = repo.fetch_similar_schools(urn).await?;
    Ok(build_comparison_view(&school, &peers, query))
}

#[cfg(test)]
#[path = "similar_schools_tests.rs"]
mod similar_schools_tests;
