// Benchmark for month grid construction and widget navigation

use chrono::Weekday;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weather_history::models::calendar::{CalendarWidget, MonthGrid};

fn bench_month_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_grid");

    for first_weekday in [Weekday::Mon, Weekday::Sun] {
        group.bench_with_input(
            BenchmarkId::new("build_year", format!("{first_weekday:?}")),
            &first_weekday,
            |b, &first_weekday| {
                b.iter(|| {
                    for month in 1..=12 {
                        black_box(MonthGrid::build(black_box(2024), month, first_weekday).ok());
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    c.bench_function("navigate_100_years", |b| {
        b.iter(|| {
            let mut widget = CalendarWidget::new(2000, 1, Weekday::Mon);
            for _ in 0..1200 {
                widget.go_to_next_month();
            }
            black_box(widget.displayed())
        })
    });
}

criterion_group!(benches, bench_month_grid, bench_navigation);
criterion_main!(benches);
