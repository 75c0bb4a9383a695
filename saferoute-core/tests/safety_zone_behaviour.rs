//! Behavioural tests for [`SafetyZoneRegistry`] construction.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use saferoute_core::{
    ReferenceZones, RiskColor, RiskLevel, SafetyZone, SafetyZoneRegistry, ZoneSource,
    ZoneSourceError, risk_color_for,
};

/// Zone source returning a fixed list.
struct ListSource(Vec<SafetyZone>);

impl ZoneSource for ListSource {
    fn load(&self) -> Result<Vec<SafetyZone>, ZoneSourceError> {
        Ok(self.0.clone())
    }
}

type RegistryCell = RefCell<Option<Result<SafetyZoneRegistry, ZoneSourceError>>>;

#[fixture]
fn source() -> RefCell<Vec<SafetyZone>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn registry() -> RegistryCell {
    RefCell::new(None)
}

fn built(registry: &RegistryCell) -> std::cell::Ref<'_, SafetyZoneRegistry> {
    std::cell::Ref::map(registry.borrow(), |cell| {
        match cell.as_ref().expect("registry must be built") {
            Ok(registry) => registry,
            Err(err) => panic!("expected registry, got {err}"),
        }
    })
}

#[given("the reference zone source")]
fn reference_source(#[from(source)] source: &RefCell<Vec<SafetyZone>>) {
    *source.borrow_mut() = ReferenceZones.load().expect("reference zones load");
}

#[given("a zone source with a duplicated id")]
fn duplicated_source(#[from(source)] source: &RefCell<Vec<SafetyZone>>) {
    let mut zones = ReferenceZones::zones();
    let mut twin = zones[3].clone();
    twin.name = "Paharganj annex".to_owned();
    zones.push(twin);
    *source.borrow_mut() = zones;
}

#[when("I build the registry")]
fn build_registry(
    #[from(source)] source: &RefCell<Vec<SafetyZone>>,
    #[from(registry)] registry: &RegistryCell,
) {
    let list = ListSource(source.borrow().clone());
    *registry.borrow_mut() = Some(SafetyZoneRegistry::from_source(&list));
}

#[then("the registry holds 6 zones")]
fn holds_six(#[from(registry)] registry: &RegistryCell) {
    assert_eq!(built(registry).len(), 6);
}

#[then("zone 4 is Paharganj with high risk and 15 incidents")]
fn zone_four(#[from(registry)] registry: &RegistryCell) {
    let registry = built(registry);
    let zone = registry.get("4").expect("zone 4 present");
    assert_eq!(zone.name, "Paharganj");
    assert_eq!(zone.risk_level, RiskLevel::High);
    assert_eq!(zone.incidents, 15);
}

#[then("a duplicate id error is returned")]
fn duplicate_error(#[from(registry)] registry: &RegistryCell) {
    let borrowed = registry.borrow();
    assert!(
        matches!(&*borrowed, Some(Err(ZoneSourceError::DuplicateId { id })) if id == "4"),
        "expected DuplicateId, got {borrowed:?}"
    );
}

#[then("every zone has a non-gray risk colour")]
fn coloured(#[from(registry)] registry: &RegistryCell) {
    let registry = built(registry);
    assert!(registry.zones().iter().all(|z| z.color() != RiskColor::Gray));
}

#[then("an unrecognised risk label is coloured gray")]
fn unknown_gray() {
    assert_eq!(risk_color_for("catastrophic"), RiskColor::Gray);
}

#[scenario(path = "tests/features/safety_zones.feature", index = 0)]
fn loading_reference_zones(source: RefCell<Vec<SafetyZone>>, registry: RegistryCell) {
    let _ = (source, registry);
}

#[scenario(path = "tests/features/safety_zones.feature", index = 1)]
fn rejecting_duplicate_ids(source: RefCell<Vec<SafetyZone>>, registry: RegistryCell) {
    let _ = (source, registry);
}

#[scenario(path = "tests/features/safety_zones.feature", index = 2)]
fn colouring_risk_labels(source: RefCell<Vec<SafetyZone>>, registry: RegistryCell) {
    let _ = (source, registry);
}
