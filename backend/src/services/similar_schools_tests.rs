use super::*;
use crate::api::MapRole;
use crate::db::repositories::LocalRepository;
use crate::db::repository::RepositoryError;
use crate::models::{Availability, Metric, UnavailableReason};

const NAMES: [&str; 12] = [
    "Lambda School",
    "Alpha Academy",
    "Kappa High",
    "Beta College",
    "Juliet School",
    "Charlie Academy",
    "India High",
    "Delta School",
    "Hotel College",
    "Echo Academy",
    "Golf School",
    "Foxtrot High",
];

fn main_school() -> SchoolDetails {
    SchoolDetails::new(Urn::new(100000), "Main School")
}

/// Twelve peers; URN 100001.. in declaration order. Three are in the North East.
fn twelve_peers() -> Vec<SimilarSchool> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut details = SchoolDetails::new(Urn::new(100001 + i as u32), *name);
            let region = if i % 4 == 0 { "North East" } else { "London" };
            details.region = Availability::Available(region.to_string());
            details.urban_rural = Availability::Available("Urban".to_string());
            details.local_authority = Availability::Available(format!("LA {}", i % 3));
            let ebacc = if i == 3 || i == 7 {
                Availability::Unavailable(UnavailableReason::Suppressed)
            } else {
                Availability::Available(100.0 - i as f64)
            };
            details.measures.set(Metric::EbaccEntry, ebacc);
            SimilarSchool::from(&details)
        })
        .collect()
}

fn names(view: &ComparisonView) -> Vec<String> {
    view.results.iter().map(|s| s.name.clone()).collect()
}

#[test]
fn test_second_page_sorted_by_name() {
    let query = SimilarSchoolsQuery {
        page: PageRequest::new(2),
        ..Default::default()
    };
    let view = build_comparison_view(&main_school(), &twelve_peers(), &query);

    assert_eq!(names(&view), vec!["Kappa High", "Lambda School"]);
    assert_eq!(view.page_info.showing_label(), "showing 11-12 of 12");
    assert_eq!(view.map_schools.len(), 12);
}

#[test]
fn test_region_filter_applies_to_list_and_map() {
    let query = SimilarSchoolsQuery {
        filters: FilterCriteria::new().with(FilterDimension::Region, "North East"),
        ..Default::default()
    };
    let view = build_comparison_view(&main_school(), &twelve_peers(), &query);

    assert_eq!(view.results.len(), 3);
    assert_eq!(view.map_schools.len(), 3);
    assert_eq!(view.page_info.total_results, 3);
    assert_eq!(view.page_info.last_page, 1);
    // Options are computed over the whole peer group
    let total: usize = view.filter_options.region.iter().map(|o| o.count).sum();
    assert_eq!(total, 12);
}

#[test]
fn test_metric_sort_puts_unavailable_last_in_original_order() {
    let query = SimilarSchoolsQuery {
        sort: SortKey::Metric(Metric::EbaccEntry),
        page: PageRequest::new(2),
        ..Default::default()
    };
    let view = build_comparison_view(&main_school(), &twelve_peers(), &query);

    // Peers 3 and 7 (Beta College, Delta School) are suppressed.
    assert_eq!(names(&view), vec!["Beta College", "Delta School"]);

    let map_order: Vec<u32> = view.map_schools.iter().map(|m| m.urn.value()).collect();
    assert_eq!(&map_order[10..], &[100004, 100008]);
}

#[test]
fn test_map_matches_filtered_set_on_every_page() {
    let peers = twelve_peers();
    let filters = FilterCriteria::new().with(FilterDimension::LocalAuthority, "LA 1");
    let expected: Vec<Urn> = crate::services::filter::filter_schools(&peers, &filters)
        .iter()
        .map(|s| s.urn)
        .collect();

    for page in 1..=3 {
        let query = SimilarSchoolsQuery {
            filters: filters.clone(),
            page: PageRequest::new(page),
            ..Default::default()
        };
        let view = build_comparison_view(&main_school(), &peers, &query);
        let mut map: Vec<Urn> = view.map_schools.iter().map(|m| m.urn).collect();
        map.sort();
        let mut want = expected.clone();
        want.sort();
        assert_eq!(map, want);
        for school in &view.results {
            assert!(view.map_schools.iter().any(|m| m.urn == school.urn));
        }
    }
}

#[test]
fn test_compare_with_sets_role() {
    let query = SimilarSchoolsQuery {
        compare_with: Some(Urn::new(100005)),
        ..Default::default()
    };
    let view = build_comparison_view(&main_school(), &twelve_peers(), &query);
    let compared: Vec<&str> = view
        .map_schools
        .iter()
        .filter(|m| m.role == MapRole::Compared)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(compared, vec!["Juliet School"]);
    assert!(view.map_schools.iter().all(|m| m.role != MapRole::Main));
}

#[test]
fn test_query_from_pairs() {
    let pairs = vec![
        ("region", "North East"),
        ("region", "London"),
        ("local_authority", "Bristol, City of"),
        ("urban_rural", ""),
        ("sort", "ebacc-entry"),
        ("page", "2"),
        ("compare_with", "100005"),
        ("utm_source", "email"),
    ];
    let query = SimilarSchoolsQuery::from_pairs(&pairs);

    assert_eq!(query.filters.region.len(), 2);
    assert!(query.filters.local_authority.contains("Bristol, City of"));
    assert!(query.filters.urban_rural.is_empty());
    assert_eq!(query.sort, SortKey::Metric(Metric::EbaccEntry));
    assert_eq!(query.page.number(), 2);
    assert_eq!(query.compare_with, Some(Urn::new(100005)));
}

#[test]
fn test_query_from_pairs_recovers_bad_input() {
    let pairs = vec![
        ("sort", "shoe-size"),
        ("page", "-3"),
        ("compare_with", "not-a-urn"),
    ];
    let query = SimilarSchoolsQuery::from_pairs(&pairs);
    assert_eq!(query.sort, SortKey::Name);
    assert_eq!(query.page, PageRequest::first());
    assert_eq!(query.compare_with, None);

    let empty: Vec<(String, String)> = Vec::new();
    assert_eq!(SimilarSchoolsQuery::from_pairs(&empty), SimilarSchoolsQuery::default());
}

fn seeded_repository() -> LocalRepository {
    let repo = LocalRepository::new();
    let main = main_school();
    let peers = twelve_peers();
    repo.insert_school(main.clone());
    for (i, peer) in peers.iter().enumerate() {
        let mut details = SchoolDetails::new(peer.urn, peer.name.clone());
        details.region = peer.region.clone();
        details.measures = peer.measures.clone();
        details.local_authority = Availability::Available(format!("LA {}", i % 3));
        repo.insert_school(details);
    }
    repo.set_peer_group(main.urn, peers.iter().map(|p| p.urn).collect());
    repo
}

#[tokio::test]
async fn test_get_comparison_view_from_repository() {
    let repo = seeded_repository();
    let view = get_comparison_view(&repo, Urn::new(100000), &SimilarSchoolsQuery::default())
        .await
        .unwrap();
    assert_eq!(view.school.name, "Main School");
    assert_eq!(view.results.len(), PAGE_SIZE);
    assert_eq!(view.page_info.total_results, 12);
    assert_eq!(view.results[0].name, "Alpha Academy");
}

#[tokio::test]
async fn test_get_comparison_view_unknown_school_is_not_found() {
    let repo = seeded_repository();
    let result = get_comparison_view(&repo, Urn::new(999999), &SimilarSchoolsQuery::default()).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_comparison_view_without_peer_group_is_not_found() {
    let repo = seeded_repository();
    // A peer exists as a school but has no peer group of its own
    let result = get_comparison_view(&repo, Urn::new(100001), &SimilarSchoolsQuery::default()).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}
