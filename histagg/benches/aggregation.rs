use divan::{Bencher, black_box};
use histagg::{Aggregator, Descriptor, InstrumentKind, Number, NumberKind, allocate};

fn main() {
    divan::main();
}

const THREADS: &[usize] = &[1, 2, 4, 8];
const ITEMS: &[usize] = &[100, 1000, 10000];
const BOUNDARIES: &[f64] = &[
    5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 250.0, 500.0, 750.0, 1000.0, 2500.0, 5000.0,
];

fn batch(n: usize) -> Vec<Aggregator> {
    let desc = Descriptor::new("bench", InstrumentKind::ValueRecorder, NumberKind::Float64);
    allocate(n, desc, BOUNDARIES).unwrap()
}

/// All threads record into one aggregator
#[divan::bench(consts = THREADS, args = ITEMS)]
fn record_shared<const T: usize>(bencher: Bencher, items: usize) {
    bencher
        .with_inputs(|| batch(1))
        .bench_values(|batch| {
            std::thread::scope(|s| {
                for _ in 0..T {
                    let agg = &batch[0];
                    s.spawn(move || {
                        for i in 0..items {
                            agg.record(Number::Float64(black_box(i as f64))).unwrap();
                        }
                    });
                }
            });
        });
}

/// Each thread records into its own shard
#[divan::bench(consts = THREADS, args = ITEMS)]
fn record_sharded<const T: usize>(bencher: Bencher, items: usize) {
    bencher
        .with_inputs(|| batch(T))
        .bench_values(|batch| {
            std::thread::scope(|s| {
                for agg in &batch {
                    s.spawn(move || {
                        for i in 0..items {
                            agg.record(Number::Float64(black_box(i as f64))).unwrap();
                        }
                    });
                }
            });
        });
}

#[divan::bench(args = ITEMS)]
fn checkpoint(bencher: Bencher, items: usize) {
    bencher
        .with_inputs(|| {
            let batch = batch(2);
            for i in 0..items {
                batch[0].record(Number::Float64(i as f64)).unwrap();
            }
            batch
        })
        .bench_values(|batch| {
            batch[0].checkpoint(&batch[1]).unwrap();
            black_box(batch)
        });
}
