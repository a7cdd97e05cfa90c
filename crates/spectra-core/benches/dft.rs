use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectra_core::DftWorkspace;

fn benchmark_dft(c: &mut Criterion) {
    let sizes = [256, 512, 1024, 2048, 4096];

    for size in sizes {
        c.bench_function(&format!("dft_forward_{}", size), |b| {
            let mut ws = DftWorkspace::new(size).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64).sin()).collect();
            let mut packed = vec![0.0; size];

            b.iter(|| {
                ws.transform(black_box(&input), black_box(&mut packed))
                    .unwrap();
            });
        });
    }
}

criterion_group!(benches, benchmark_dft);
criterion_main!(benches);
