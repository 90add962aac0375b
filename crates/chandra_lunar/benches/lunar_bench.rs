use criterion::{Criterion, black_box, criterion_group, criterion_main};
use chandra_lunar::{longitude_correction_deg, mean_elements, moon_tropical_longitude_deg};

fn lunar_series_bench(c: &mut Criterion) {
    let t = 0.24;

    let mut group = c.benchmark_group("lunar_series");
    group.bench_function("mean_elements", |b| {
        b.iter(|| mean_elements(black_box(t)))
    });
    group.bench_function("longitude_correction", |b| {
        let el = mean_elements(t);
        b.iter(|| longitude_correction_deg(black_box(&el)))
    });
    group.bench_function("tropical_longitude", |b| {
        b.iter(|| moon_tropical_longitude_deg(black_box(t)))
    });
    group.finish();
}

criterion_group!(benches, lunar_series_bench);
criterion_main!(benches);
