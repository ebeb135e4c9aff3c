use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use vendsim_core::Money;
use vendsim_vending::{Catalog, CatalogEntry, FaultOdds, RandomFaults, VendingMachine};

fn wide_catalog(slots: usize) -> Catalog {
    let entries: Vec<CatalogEntry> = (0..slots)
        .map(|i| CatalogEntry::new(format!("slot-{i}"), u32::MAX, Money::from_units(1)))
        .collect();
    Catalog::from_entries(&entries)
}

/// Single purchase latency (lookup, checks, commit, fault draw).
///
/// Slots hold `u32::MAX` units so every iteration takes the full path instead
/// of bailing out on a sold-out slot.
fn bench_purchase_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("purchase_latency");
    group.sample_size(1000);

    group.bench_function("no_faults", |b| {
        let mut m = VendingMachine::with_faults(wide_catalog(4), RandomFaults::seeded(7))
            .with_odds(FaultOdds::never());
        b.iter(|| {
            let _ = m.purchase(black_box("slot-1"), Money::from_units(1));
            m.return_change()
        });
    });

    group.bench_function("default_odds", |b| {
        let mut m = VendingMachine::with_faults(wide_catalog(4), RandomFaults::seeded(7));
        b.iter(|| {
            let _ = m.purchase(black_box("slot-2"), Money::from_units(1));
            m.return_change()
        });
    });

    group.finish();
}

/// Lookup cost grows with catalog size; the last slot is the worst case.
fn bench_catalog_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_width");

    for slots in [4usize, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(slots), &slots, |b, &slots| {
            let mut m = VendingMachine::with_faults(wide_catalog(slots), RandomFaults::seeded(7))
                .with_odds(FaultOdds::never());
            let last = format!("slot-{}", slots - 1);
            b.iter(|| {
                let _ = m.purchase(black_box(&last), Money::from_units(1));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_purchase_latency, bench_catalog_width);
criterion_main!(benches);
