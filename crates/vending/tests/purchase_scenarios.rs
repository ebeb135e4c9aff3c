//! End-to-end purchase scenarios against the public API.

use vendsim_core::Money;
use vendsim_vending::{Catalog, MAX_DRAW, Product, PurchaseError, ScriptedFaults, VendingMachine};

fn demo_machine(draws: impl IntoIterator<Item = u8>) -> VendingMachine<ScriptedFaults> {
    VendingMachine::with_faults(Catalog::default_demo(), ScriptedFaults::new(draws))
}

fn amount(m: &VendingMachine<ScriptedFaults>, name: &str) -> u32 {
    m.product(name).map(Product::amount).expect("product in catalog")
}

#[test]
fn demo_script_with_lucky_draws() {
    let mut m = demo_machine([MAX_DRAW; 3]);

    m.purchase("Xiaomi Umbrella", Money::from_units(2_000)).unwrap();
    m.purchase("Funnions", Money::ZERO).unwrap();
    m.purchase("Carregador iPhone", Money::ZERO).unwrap();

    assert_eq!(amount(&m, "Xiaomi Umbrella"), 4);
    assert_eq!(amount(&m, "Funnions"), 1);
    assert_eq!(amount(&m, "Carregador iPhone"), 4);
    assert_eq!(m.return_change(), Money::from_units(2_000 - 125 - 7 - 150));
    assert_eq!(m.return_change(), Money::ZERO);
}

#[test]
fn funnions_sell_out_after_two() {
    let mut m = demo_machine([50, 50]);

    m.purchase("Funnions", Money::from_units(100)).unwrap();
    m.purchase("Funnions", Money::ZERO).unwrap();
    let err = m.purchase("Funnions", Money::ZERO).unwrap_err();

    assert_eq!(
        err,
        PurchaseError::ProductUnavailable {
            name: "Funnions".into()
        }
    );
    assert_eq!(m.balance(), Money::from_units(86));
}

#[test]
fn repeated_purchase_keeps_second_tender() {
    let catalog = Catalog::new(vec![Product::new("A", 1, Money::from_units(10))]);
    let mut m = VendingMachine::with_faults(catalog, ScriptedFaults::repeat(50, 2));

    m.purchase("A", Money::from_units(10)).unwrap();
    assert_eq!(amount(&m, "A"), 0);

    let err = m.purchase("A", Money::from_units(10)).unwrap_err();
    assert!(matches!(err, PurchaseError::ProductUnavailable { .. }));
    assert_eq!(m.balance(), Money::from_units(10));
}

#[test]
fn tractor_is_out_of_budget() {
    let mut m = demo_machine([]);

    let err = m.purchase("Tractor", Money::from_units(150)).unwrap_err();

    assert!(matches!(err, PurchaseError::InsufficientFunds { .. }));
    assert!(!err.charged());
    assert_eq!(amount(&m, "Tractor"), 1);
    assert_eq!(m.balance(), Money::from_units(150));
}

#[test]
fn fault_band_boundaries() {
    let pay = Money::from_units(7);

    // 9: last stuck draw.
    let mut m = demo_machine([9]);
    let err = m.purchase("Funnions", pay).unwrap_err();
    assert!(matches!(err, PurchaseError::ProductStuck { .. }));
    assert_eq!(amount(&m, "Funnions"), 1);

    // 10: first wrong-product draw; the first substitute is picked.
    let mut m = demo_machine([10]);
    let err = m.purchase("Funnions", pay).unwrap_err();
    match err {
        PurchaseError::WrongProduct { product } => {
            assert_eq!(product.name(), "Carregador iPhone");
            assert_eq!(product.amount(), 4);
        }
        other => panic!("Expected WrongProduct, got {other:?}"),
    }
    assert_eq!(amount(&m, "Funnions"), 2);

    // 13: last wrong-product draw.
    let mut m = demo_machine([13]);
    assert!(matches!(
        m.purchase("Funnions", pay),
        Err(PurchaseError::WrongProduct { .. })
    ));

    // 14: normal dispense.
    let mut m = demo_machine([14]);
    m.purchase("Funnions", pay).unwrap();
    assert_eq!(amount(&m, "Funnions"), 1);
    assert_eq!(m.balance(), Money::ZERO);
}

#[test]
fn wrong_product_band_without_substitute_is_silent() {
    let catalog = Catalog::new(vec![
        Product::new("Only", 1, Money::from_units(1)),
        Product::new("Empty", 0, Money::from_units(1)),
    ]);
    let mut m = VendingMachine::with_faults(catalog, ScriptedFaults::new([13]));

    m.purchase("Only", Money::from_units(1)).unwrap();

    assert_eq!(amount(&m, "Only"), 0);
    assert_eq!(amount(&m, "Empty"), 0);
}

#[test]
fn change_accumulates_across_failures() {
    let mut m = demo_machine([]);

    let _ = m.purchase("Nonexistent", Money::from_cents(50));
    let _ = m.purchase("Nonexistent", Money::from_cents(25));

    assert_eq!(m.return_change(), Money::from_cents(75));
}
