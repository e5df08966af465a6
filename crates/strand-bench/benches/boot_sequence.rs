//! Criterion benchmarks for the full bootstrap sequence against a
//! recording host.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strand_bench::plugin_specs;
use strand_boot::{BootConfig, Bootstrap, PluginManagerConfig};
use strand_test_utils::RecordingHost;

/// Benchmark: Stock configuration, plugin manager already installed.
fn bench_stock_boot(c: &mut Criterion) {
    let config = BootConfig::default();
    let host = RecordingHost::default();
    let manager = format!(
        "{}/site/{}",
        host.data_dir,
        PluginManagerConfig::DEFAULT_INSTALL_DIR
    );

    c.bench_function("boot_stock", |b| {
        b.iter(|| {
            let mut host = RecordingHost::default().with_directory(manager.clone());
            let report = Bootstrap::new(config.clone())
                .unwrap()
                .run(&mut host)
                .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: 200 generated plugin declarations, including the install.
fn bench_many_plugins(c: &mut Criterion) {
    let mut config = BootConfig::minimal();
    config.plugins = plugin_specs(42, 200);

    c.bench_function("boot_200_plugins", |b| {
        b.iter(|| {
            let mut host = RecordingHost::default();
            let report = Bootstrap::new(config.clone())
                .unwrap()
                .run(&mut host)
                .unwrap();
            black_box(report.plugins_declared);
        });
    });
}

criterion_group!(benches, bench_stock_boot, bench_many_plugins);
criterion_main!(benches);
