use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fanprobe::{Dispatcher, Endpoint, ProbeError, from_fn, partition};
use tokio::runtime::Builder;

fn endpoints(n: usize) -> Vec<Endpoint> {
    (0..n)
        .map(|i| Endpoint::from(format!("https://10.0.{}.{}:6443/healthz", i / 256, i % 256)))
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for n in [100, 10_000, 1_000_000] {
        let input = endpoints(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| partition(black_box(input.clone()), black_box(20)).unwrap());
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let rt = Builder::new_multi_thread().enable_all().build().unwrap();
    let mut group = c.benchmark_group("dispatch");

    for workers in [1, 4, 20, 64] {
        let input = endpoints(10_000);
        let dispatcher = Dispatcher::new(from_fn(|endpoint: Endpoint| async move {
            black_box(endpoint);
            Ok::<_, ProbeError>(())
        }));

        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("workers", workers), &input, |b, input| {
            b.to_async(&rt).iter(|| async {
                let partitions = partition(input.clone(), workers).unwrap();
                dispatcher.dispatch(partitions).await
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partition, bench_dispatch);
criterion_main!(benches);
