//! Behavioural tests for [`JsonZoneSource`].

use std::cell::RefCell;

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use saferoute_core::{RiskColor, SafetyZoneRegistry, ZoneSourceError};
use saferoute_data::JsonZoneSource;

type SourceCell = RefCell<Option<JsonZoneSource>>;
type RegistryCell = RefCell<Option<Result<SafetyZoneRegistry, ZoneSourceError>>>;

fn fixture_path(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[fixture]
fn source() -> SourceCell {
    RefCell::new(None)
}

#[fixture]
fn registry() -> RegistryCell {
    RefCell::new(None)
}

// --- Given steps ---

#[given("the Delhi zone feed")]
fn delhi_feed(#[from(source)] source: &SourceCell) {
    *source.borrow_mut() = Some(JsonZoneSource::new(fixture_path("zones.json")));
}

#[given("a zone feed with a repeated id")]
fn duplicate_feed(#[from(source)] source: &SourceCell) {
    *source.borrow_mut() = Some(JsonZoneSource::new(fixture_path("zones_duplicate.json")));
}

#[given("a zone feed path that does not exist")]
fn missing_feed(#[from(source)] source: &SourceCell) {
    *source.borrow_mut() = Some(JsonZoneSource::new(fixture_path("no_such_feed.json")));
}

// --- When steps ---

#[when("I build a registry from it")]
fn build_registry(#[from(source)] source: &SourceCell, #[from(registry)] registry: &RegistryCell) {
    let guard = source.borrow();
    let feed = guard.as_ref().expect("source must be set in a Given step");
    *registry.borrow_mut() = Some(SafetyZoneRegistry::from_source(feed));
}

// --- Then steps ---

#[then("the registry holds three zones")]
fn three_zones(#[from(registry)] registry: &RegistryCell) {
    let borrowed = registry.borrow();
    let built = borrowed
        .as_ref()
        .expect("registry must be built")
        .as_ref()
        .expect("expected a registry");
    assert_eq!(built.len(), 3);
}

#[then("Sadar Bazaar is a red zone")]
fn sadar_bazaar_red(#[from(registry)] registry: &RegistryCell) {
    let borrowed = registry.borrow();
    let built = borrowed
        .as_ref()
        .expect("registry must be built")
        .as_ref()
        .expect("expected a registry");
    let zone = built.get("z3").expect("zone z3");
    assert_eq!(zone.name, "Sadar Bazaar");
    assert_eq!(zone.color(), RiskColor::Red);
}

#[then("the registry is rejected for the duplicate id")]
fn duplicate_rejected(#[from(registry)] registry: &RegistryCell) {
    let borrowed = registry.borrow();
    let outcome = borrowed.as_ref().expect("registry must be built");
    assert!(matches!(
        outcome,
        Err(ZoneSourceError::DuplicateId { id }) if id == "z1"
    ));
}

#[then("the registry is rejected with a read error")]
fn read_error(#[from(registry)] registry: &RegistryCell) {
    let borrowed = registry.borrow();
    let outcome = borrowed.as_ref().expect("registry must be built");
    assert!(matches!(
        outcome,
        Err(ZoneSourceError::Read { location, .. }) if location.ends_with("no_such_feed.json")
    ));
}

// --- Scenarios ---

#[scenario(path = "tests/features/zone_feed.feature", index = 0)]
fn valid_feed(source: SourceCell, registry: RegistryCell) {
    let _ = (source, registry);
}

#[scenario(path = "tests/features/zone_feed.feature", index = 1)]
fn repeated_id(source: SourceCell, registry: RegistryCell) {
    let _ = (source, registry);
}

#[scenario(path = "tests/features/zone_feed.feature", index = 2)]
fn missing_feed_file(source: SourceCell, registry: RegistryCell) {
    let _ = (source, registry);
}
