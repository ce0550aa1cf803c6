// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use raven_palette::Palette;
use raven_points::{
    ActivityRecord, MetadataEntry, PointIdAllocator, StateRecord, activities_by_legend,
    state_points,
};
use raven_time::format_timestamp;

/// Roughly mid-2022, so generated timestamps look like real mission data.
const EPOCH_BASE: f64 = 1_656_374_400.0;

const LEGENDS: [&str; 4] = ["Comm", "Science", "Maneuver", "Housekeeping"];

fn activity_records(len: usize) -> Vec<ActivityRecord> {
    (0..len)
        .map(|i| {
            let start = EPOCH_BASE + (i as f64) * 60.0;
            ActivityRecord {
                document_id: format!("doc-{i}"),
                activity_id: format!("act-{i}"),
                activity_name: format!("Activity {i}"),
                activity_type: "Generic".into(),
                metadata: vec![
                    MetadataEntry::new("legend", LEGENDS[i % LEGENDS.len()]),
                    MetadataEntry::new("color", "Dodger Blue"),
                ],
                start_timestamp: format_timestamp(start),
                end_timestamp: format_timestamp(start + 45.0),
                ..Default::default()
            }
        })
        .collect()
}

fn state_records(len: usize) -> Vec<StateRecord> {
    (0..len)
        .map(|i| StateRecord {
            document_id: format!("doc-{i}"),
            timestamp: format_timestamp(EPOCH_BASE + (i as f64) * 60.0),
            value: if i % 2 == 0 { "ON".into() } else { "OFF".into() },
        })
        .collect()
}

fn bench_activities_by_legend(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/activities_by_legend");

    // The transform is specified as a single pass; throughput should stay
    // linear in the record count even with legend bucketing inline.
    for len in [128usize, 1_024, 8_192] {
        let records = activity_records(len);
        let palette = Palette::mission_default();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &records, |b, records| {
            b.iter_batched(
                PointIdAllocator::new,
                |ids| {
                    let batch = activities_by_legend(&ids, &palette, "/plan/bench", records)
                        .expect("generated records parse");
                    black_box(batch);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_state_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/state_points");

    for len in [128usize, 1_024, 8_192] {
        let records = state_records(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &records, |b, records| {
            b.iter_batched(
                PointIdAllocator::new,
                |ids| {
                    let batch =
                        state_points(&ids, "/plan/bench", records).expect("generated records parse");
                    black_box(batch);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wire_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/wire_ingest");

    // Deserialize-then-normalize, the full ingest path for one response.
    for len in [128usize, 1_024] {
        let json = serde_json::to_string(&activity_records(len)).expect("records serialize");
        let palette = Palette::mission_default();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &json, |b, json| {
            b.iter_batched(
                PointIdAllocator::new,
                |ids| {
                    let records: Vec<ActivityRecord> =
                        serde_json::from_str(json).expect("fixture deserializes");
                    let batch = activities_by_legend(&ids, &palette, "/plan/bench", &records)
                        .expect("generated records parse");
                    black_box(batch);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_activities_by_legend,
    bench_state_points,
    bench_wire_ingest
);
criterion_main!(benches);
