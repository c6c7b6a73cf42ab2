//! Performance benchmarks for the Workforce Analytics Engine.
//!
//! Measures the aggregators over synthetic stores of increasing size and a
//! directory request served through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use workforce_analytics::analytics::{
    build_directory, dashboard_summary, recent_awards, search, sentiment_trend,
};
use workforce_analytics::api::{AppState, create_router};
use workforce_analytics::config::{ConfigLoader, DirectoryConfig};
use workforce_analytics::models::{
    Activity, Award, Employee, JoiningInfo, Leave, Performance, RecordStore, Sentiment,
};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

const ZONES: [&str; 4] = ["Happy Zone", "Neutral Zone (OK)", "Sad Zone", "Frustrated Zone"];
const FEEDBACK: [&str; 3] = [
    "Exceeds Expectations",
    "Meets Expectations",
    "Needs Improvement",
];

/// Creates one employee with a year of mixed records.
fn create_employee(index: usize) -> Employee {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let day = |offset: usize| {
        (base + Duration::days(((index * 7 + offset * 31) % 540) as i64))
            .format("%Y-%m-%d")
            .to_string()
    };

    Employee {
        id: format!("EMP{:05}", index),
        joining_info: JoiningInfo {
            joining_date: day(0),
            onboarding_feedback: "Good".to_string(),
            mentor_assigned: index % 2 == 0,
            training_completed: index % 3 != 0,
        },
        leaves: vec![Leave {
            leave_type: "Annual Leave".to_string(),
            days: 3,
            start_date: day(2),
            end_date: day(2),
        }],
        performance: (0..2)
            .map(|i| Performance {
                review_period: if i == 0 { "H1 2023" } else { "Annual 2023" }.to_string(),
                rating: ((index + i) % 5 + 1) as f64,
                manager_feedback: FEEDBACK[(index + i) % FEEDBACK.len()].to_string(),
                promotion_consideration: (index + i) % 4 == 0,
            })
            .collect(),
        awards: (0..index % 3)
            .map(|i| Award {
                award_type: "Star Performer".to_string(),
                award_date: day(i + 5),
                reward_points: (index * 13 % 500) as i64,
            })
            .collect(),
        sentiment: (0..4)
            .map(|i| Sentiment {
                response_date: day(i + 1),
                vibe_score: ((index + i) % 5 + 1) as i64,
                emotion_zone: ZONES[(index + i) % ZONES.len()].to_string(),
            })
            .collect(),
        activity: (0..4)
            .map(|i| Activity {
                date: day(i + 3),
                messages_sent: (index % 40) as u32,
                emails_sent: (index % 25) as u32,
                meetings_attended: (i % 6) as u32,
                work_hours: Decimal::new(600 + (index % 300) as i64, 2),
            })
            .collect(),
    }
}

fn create_store(size: usize) -> RecordStore {
    RecordStore::from_employees((0..size).map(create_employee).collect())
        .expect("Failed to build store")
}

fn bench_aggregators(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
    let directory = DirectoryConfig::default();

    let mut group = c.benchmark_group("aggregators");
    for size in [100usize, 1000] {
        let store = create_store(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("dashboard_summary", size), &store, |b, s| {
            b.iter(|| black_box(dashboard_summary(s, now, 3).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sentiment_trend", size), &store, |b, s| {
            b.iter(|| black_box(sentiment_trend(s).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("recent_awards", size), &store, |b, s| {
            b.iter(|| black_box(recent_awards(s).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("directory_search", size), &store, |b, s| {
            b.iter(|| {
                let entries = build_directory(s, &directory, now, 3).unwrap();
                black_box(search(&entries, "employee 00", "active").len())
            })
        });
    }
    group.finish();
}

fn bench_directory_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(ConfigLoader::load("./data/hr").expect("Failed to load data"));
    let router = create_router(state);

    c.bench_function("directory_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/employees?query=e&as_of=2024-02-17")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_aggregators, bench_directory_request);
criterion_main!(benches);
