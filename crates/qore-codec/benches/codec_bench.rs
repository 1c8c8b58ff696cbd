//! Benchmarks for the qore codec
//!
//! Run with: cargo bench -p qore-codec

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use qore_codec::{EncodeOptions, decode, emit_text, encode, encode_with};
use qore_ir::{Circuit, QubitId};
use std::f64::consts::PI;

/// A layered circuit: a rotation on every qubit, then a CNOT ladder.
fn layered_circuit(num_qubits: u32, layers: usize) -> Circuit {
    let mut builder = Circuit::builder("qis", num_qubits).unwrap();
    for layer in 0..layers {
        for q in 0..num_qubits {
            builder.rz(PI / (layer + 1) as f64, QubitId(q)).unwrap();
        }
        for q in 0..num_qubits - 1 {
            builder.cnot(QubitId(q), QubitId(q + 1)).unwrap();
        }
    }
    builder.build()
}

/// Benchmark encoding with and without the checksum trailer
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for layers in &[1, 10, 100] {
        let circuit = layered_circuit(20, *layers);
        group.throughput(Throughput::Elements(circuit.len() as u64));

        group.bench_with_input(BenchmarkId::new("checksum", layers), &circuit, |b, circuit| {
            b.iter(|| encode(black_box(circuit)).unwrap());
        });

        let plain = EncodeOptions::default().with_checksum(false);
        group.bench_with_input(BenchmarkId::new("plain", layers), &circuit, |b, circuit| {
            b.iter(|| encode_with(black_box(circuit), plain).unwrap());
        });
    }

    group.finish();
}

/// Benchmark decoding
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for layers in &[1, 10, 100] {
        let bytes = encode(&layered_circuit(20, *layers)).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("layered", layers), &bytes, |b, bytes| {
            b.iter(|| decode(black_box(bytes)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the JSON front end feeding the encoder
fn bench_json_pipeline(c: &mut Criterion) {
    let json = qore_json::to_string(&layered_circuit(20, 10)).unwrap();

    c.bench_function("json_to_qore", |b| {
        b.iter(|| {
            let circuit = qore_json::parse_str(black_box(&json)).unwrap();
            encode(&circuit).unwrap()
        });
    });
}

/// Benchmark the text listing
fn bench_text(c: &mut Criterion) {
    let circuit = layered_circuit(20, 10);
    c.bench_function("emit_text", |b| {
        b.iter(|| emit_text(black_box(&circuit)));
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_json_pipeline,
    bench_text
);
criterion_main!(benches);
