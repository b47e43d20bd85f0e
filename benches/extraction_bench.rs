// ABOUTME: Criterion benchmarks for narrative extraction and risk classification
// ABOUTME: Measures section parsing, each list strategy path, and full narrative assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! Criterion benchmarks for the synchronous analysis pipeline.
//!
//! Responses are synthesized in three shapes so that each list extraction
//! strategy ends up doing the work: headed sections, loose markers, and plain
//! prose that only the keyword scan can mine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hike_core::models::{RiskCategory, Terrain, TrailParameters, WildlifeDanger};
use hike_intelligence::narrative::{extract_list, parse_sections, ListConcept};
use hike_intelligence::{extract_narrative, RiskClassifier};

/// Shape of a synthetic response
#[derive(Clone, Copy)]
enum ResponseShape {
    Sectioned,
    Markers,
    Prose,
}

impl ResponseShape {
    const fn name(self) -> &'static str {
        match self {
            Self::Sectioned => "sectioned",
            Self::Markers => "markers",
            Self::Prose => "prose",
        }
    }
}

fn synthesize_response(shape: ResponseShape, items: usize) -> String {
    let mut text = String::new();
    match shape {
        ResponseShape::Sectioned => {
            text.push_str("RISK EXPLANATION:\nThe trail is long with steady climbing on rocky ground.\n\n");
            text.push_str("PERSONALIZED RECOMMENDATIONS:\n");
            for i in 0..items {
                text.push_str(&format!("• Recommendation number {i}\n"));
            }
            text.push_str("\nSAFETY PRIORITIES:\n");
            for i in 0..items {
                text.push_str(&format!("{}. Priority number {i}\n", i + 1));
            }
            text.push_str("\nGEAR SUGGESTIONS:\n");
            for i in 0..items {
                text.push_str(&format!("- Gear item {i}\n"));
            }
        }
        ResponseShape::Markers => {
            text.push_str("Here is my take on this trail for you today.\n\n");
            for i in 0..items {
                text.push_str(&format!("* Loose point {i}\n"));
            }
        }
        ResponseShape::Prose => {
            for i in 0..items {
                text.push_str(&format!(
                    "On stretch {i} you should carry extra water because safety matters.\n"
                ));
            }
        }
    }
    text
}

fn bench_section_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_parsing");

    for items in [4_usize, 16, 64] {
        let response = synthesize_response(ResponseShape::Sectioned, items);
        group.throughput(Throughput::Bytes(response.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &response, |b, response| {
            b.iter(|| parse_sections(black_box(response)));
        });
    }

    group.finish();
}

fn bench_list_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_extraction");

    for shape in [ResponseShape::Sectioned, ResponseShape::Markers, ResponseShape::Prose] {
        let response = synthesize_response(shape, 16);
        let sections = parse_sections(&response);
        group.bench_with_input(
            BenchmarkId::new("gear", shape.name()),
            &response,
            |b, response| {
                b.iter(|| extract_list(ListConcept::Gear, black_box(&sections), black_box(response)));
            },
        );
    }

    group.finish();
}

fn bench_full_narrative(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_narrative");

    for shape in [ResponseShape::Sectioned, ResponseShape::Markers, ResponseShape::Prose] {
        let response = synthesize_response(shape, 8);
        group.bench_with_input(
            BenchmarkId::from_parameter(shape.name()),
            &response,
            |b, response| {
                b.iter(|| extract_narrative(black_box(response), RiskCategory::Moderate));
            },
        );
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let classifier = RiskClassifier::from_model_path(None);
    let trails: Vec<TrailParameters> = (0..100)
        .map(|i| {
            let terrain = Terrain::ALL[i % Terrain::ALL.len()];
            let wildlife = if i % 3 == 0 {
                WildlifeDanger::High
            } else {
                WildlifeDanger::Low
            };
            TrailParameters::new(i as f64 * 0.4, i as f64 * 15.0, terrain, wildlife)
        })
        .collect();

    c.bench_function("classify_100_trails", |b| {
        b.iter(|| {
            trails
                .iter()
                .map(|trail| classifier.classify(black_box(trail)))
                .filter(|category| *category == RiskCategory::HighRisk)
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_section_parsing,
    bench_list_strategies,
    bench_full_narrative,
    bench_classification,
);
criterion_main!(benches);
