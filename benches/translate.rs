use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vmsim::mmu::Translator;
use vmsim::storage::MemoryBackingStore;
use vmsim::{EvictionPolicy, LogicalAddress, SimConfig, PAGE_SIZE};

/// Deterministic address stream with a hot working set and cold scans.
fn generate_addresses(n: usize) -> Vec<LogicalAddress> {
    let mut state: u32 = 0x9E37_79B9;
    (0..n)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let page = if i % 4 == 0 {
                (state >> 8) as u8
            } else {
                (state % 48) as u8
            };
            LogicalAddress::from_parts(vmsim::PageNumber::new(page), state as u8)
        })
        .collect()
}

fn image() -> Vec<u8> {
    (0..256 * PAGE_SIZE).map(|i| (i * 7) as u8).collect()
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let addresses = generate_addresses(10_000);

    let policies = [
        ("fifo_fifo", EvictionPolicy::Fifo, EvictionPolicy::Fifo),
        ("fifo_lru", EvictionPolicy::Fifo, EvictionPolicy::Lru),
        ("lru_fifo", EvictionPolicy::Lru, EvictionPolicy::Fifo),
        ("lru_lru", EvictionPolicy::Lru, EvictionPolicy::Lru),
    ];

    for (name, tlb_policy, frame_policy) in policies.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &addresses, |b, addresses| {
            b.iter(|| {
                let config = SimConfig::new()
                    .with_frame_count(32)
                    .with_tlb_policy(*tlb_policy)
                    .with_frame_policy(*frame_policy);
                let mut translator =
                    Translator::new(config, MemoryBackingStore::new(image())).unwrap();
                let stats = translator
                    .run(addresses.iter().copied(), |access| {
                        black_box(access.value);
                    })
                    .unwrap();
                black_box(stats)
            });
        });
    }

    group.finish();
}

fn bench_frame_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_frames");
    let addresses = generate_addresses(10_000);

    for frames in [16, 64, 128, 256].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(frames), frames, |b, &frames| {
            b.iter(|| {
                let config = SimConfig::new().with_frame_count(frames);
                let mut translator =
                    Translator::new(config, MemoryBackingStore::new(image())).unwrap();
                black_box(translator.run(addresses.iter().copied(), |_| {}).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_translate, bench_frame_count);
criterion_main!(benches);
