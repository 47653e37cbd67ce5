use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use school_compare::models::{Availability, Metric, SchoolDetails, SimilarSchool, Urn};
use school_compare::services::filter::{FilterCriteria, FilterDimension};
use school_compare::services::search::{suggest, SUGGEST_LIMIT};
use school_compare::services::similar_schools::{build_comparison_view, SimilarSchoolsQuery};
use school_compare::services::sort::SortKey;
use school_compare::services::pagination::PageRequest;

const REGIONS: [&str; 4] = ["North East", "London", "South West", "East Midlands"];

fn details(i: u32) -> SchoolDetails {
    let mut details = SchoolDetails::new(Urn::new(100000 + i), format!("School {:05}", (i * 7919) % 100000));
    details.address.town = format!("Town {}", i % 50);
    details.address.postcode = format!("AB{} {}CD", i % 90, i % 10);
    details.region = Availability::Available(REGIONS[(i % 4) as usize].to_string());
    details.local_authority = Availability::Available(format!("Authority {}", i % 12));
    details.urban_rural = Availability::Available("Urban city and town".to_string());
    let attainment = if i % 9 == 0 {
        Availability::missing()
    } else {
        Availability::Available(f64::from(i % 70) + 20.0)
    };
    details.measures.set(Metric::Attainment8, attainment);
    details
}

fn peers(n: u32) -> Vec<SimilarSchool> {
    (1..=n).map(|i| SimilarSchool::from(&details(i))).collect()
}

fn bench_comparison_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison_view");
    let main = SchoolDetails::new(Urn::new(100000), "Main School");

    for size in [30u32, 300, 3000] {
        let peers = peers(size);

        let by_name = SimilarSchoolsQuery::default();
        group.bench_with_input(BenchmarkId::new("by_name", size), &peers, |b, peers| {
            b.iter(|| build_comparison_view(black_box(&main), black_box(peers), &by_name));
        });

        let filtered_by_metric = SimilarSchoolsQuery {
            filters: FilterCriteria::new()
                .with(FilterDimension::Region, "North East")
                .with(FilterDimension::Region, "London"),
            sort: SortKey::Metric(Metric::Attainment8),
            page: PageRequest::new(2),
            compare_with: Some(Urn::new(100004)),
        };
        group.bench_with_input(
            BenchmarkId::new("filtered_by_metric", size),
            &peers,
            |b, peers| {
                b.iter(|| {
                    build_comparison_view(black_box(&main), black_box(peers), &filtered_by_metric)
                });
            },
        );
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");
    let schools: Vec<SchoolDetails> = (1..=20000).map(details).collect();

    for text in ["sc", "School 12", "Town 4", "AB1 1", "1000"] {
        group.bench_with_input(BenchmarkId::new("suggest", text), &text, |b, text| {
            b.iter(|| suggest(black_box(&schools), black_box(text), SUGGEST_LIMIT));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_comparison_view, bench_suggest);
criterion_main!(benches);
