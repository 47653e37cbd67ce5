//! Map markers for every filtered peer, independent of list paging.

use crate::api::{MapRole, MapSchool};
use crate::models::{SimilarSchool, Urn};

fn role_for(urn: Urn, main: Urn, compare_with: Option<Urn>) -> MapRole {
    if urn == main {
        MapRole::Main
    } else if compare_with == Some(urn) {
        MapRole::Compared
    } else {
        MapRole::Peer
    }
}

/// Project the full filtered (pre-pagination) list to map markers.
///
/// Output order and membership follow `filtered` exactly; schools without
/// coordinates are kept with `coordinates: None`.
pub fn project_map_schools(
    filtered: &[SimilarSchool],
    main: Urn,
    compare_with: Option<Urn>,
) -> Vec<MapSchool> {
    filtered
        .iter()
        .map(|school| MapSchool {
            urn: school.urn,
            name: school.name.clone(),
            coordinates: school
                .coordinates
                .copied_value()
                .filter(|c| c.is_valid()),
            role: role_for(school.urn, main, compare_with),
        })
        .collect()
}
