use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use mrle::{decode, encode, RleConfig};

fn bench_codec(c: &mut Criterion) {
	// Runs of 64 of each byte value in turn
	let data: Vec<u8> = (0..8 * 1024 * 1024u32).map(|i| (i / 64) as u8).collect();
	let config = RleConfig::default();

	let mut group = c.benchmark_group("codec");
	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("encode_runs", |b| {
		b.iter(|| encode(&data, &config));
	});

	let encoded = encode(&data, &config);
	group.bench_function("decode_runs", |b| {
		b.iter(|| decode(&encoded, &config).unwrap());
	});
	group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
