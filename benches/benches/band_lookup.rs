// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use raven_band::{Band, SubBand, find_point};
use raven_points::{PointId, PointIdAllocator, ResourcePoint, ResourceRecord};
use raven_time::format_timestamp;

/// Roughly mid-2022, so generated timestamps look like real mission data.
const EPOCH_BASE: f64 = 1_656_374_400.0;

/// Builds `band_count` bands of `sub_bands_per_band` sub-bands of
/// `points_per_sub_band` resource points each. Returns the bands plus the
/// id of the last-placed point, the worst case for an ordered scan.
fn timeline(
    band_count: usize,
    sub_bands_per_band: usize,
    points_per_sub_band: usize,
) -> (Vec<Band>, PointId) {
    let ids = PointIdAllocator::new();
    let mut last_id = None;

    let bands = (0..band_count)
        .map(|b| {
            let mut band = Band::new(format!("band-{b}"), format!("Band {b}"));
            for s in 0..sub_bands_per_band {
                let mut sub_band = SubBand::new(format!("band-{b}-{s}"), format!("Sub {s}"));
                for p in 0..points_per_sub_band {
                    let record = ResourceRecord {
                        document_id: format!("doc-{b}-{s}-{p}"),
                        timestamp: format_timestamp(EPOCH_BASE + (p as f64) * 60.0),
                        value: p as f64,
                    };
                    let point = ResourcePoint::from_record(&ids, "/plan/bench", &record)
                        .expect("generated records parse");
                    last_id = Some(point.unique_id);
                    sub_band.place(point);
                }
                band.push_sub_band(sub_band);
            }
            band
        })
        .collect();

    (bands, last_id.expect("at least one point"))
}

fn bench_find_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("band/find_point");

    // Worst case: the target is the last point of the last sub-band of the
    // last band, so the whole matching band is scanned.
    for points_per_sub_band in [64usize, 512, 4_096] {
        let (bands, target) = timeline(8, 4, points_per_sub_band);
        let band_id = bands.last().expect("bands exist").id().to_owned();
        group.throughput(Throughput::Elements(points_per_sub_band as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(points_per_sub_band),
            &bands,
            |b, bands| {
                b.iter(|| {
                    let found = find_point(bands, &band_id, target);
                    black_box(found);
                });
            },
        );
    }

    group.finish();
}

fn bench_time_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("band/time_range");

    // Range recomputation is the cost paid after every structural edit.
    for points_per_sub_band in [64usize, 512, 4_096] {
        let (bands, _) = timeline(1, 4, points_per_sub_band);
        group.throughput(Throughput::Elements((points_per_sub_band * 4) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(points_per_sub_band),
            &bands,
            |b, bands| {
                b.iter(|| {
                    let range = bands[0].time_range();
                    black_box(range);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_point, bench_time_range);
criterion_main!(benches);
