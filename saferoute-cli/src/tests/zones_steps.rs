//! Behaviour-driven step definitions driving the zones CLI scenarios.

use super::helpers::{FeedDir, SINGLE_ZONE_FEED};
use super::*;
use crate::zones::run_zones;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

struct ZonesWorld {
    feeds: FeedDir,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
}

impl ZonesWorld {
    fn listing(&self) -> Vec<Value> {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON array")
    }

    fn zone_named(&self, name: &str) -> Value {
        self.listing()
            .into_iter()
            .find(|zone| zone["name"] == name)
            .unwrap_or_else(|| panic!("zone {name} should be listed"))
    }
}

#[fixture]
fn world() -> ZonesWorld {
    ZonesWorld {
        feeds: FeedDir::new(),
        cli_args: RefCell::new(Vec::new()),
        stdout: RefCell::new(Vec::new()),
    }
}

#[given("a zone feed file with one zone")]
fn feed_file(#[from(world)] world: &ZonesWorld) {
    let path = world.feeds.write("zones.json", SINGLE_ZONE_FEED);
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_ZONES}"), path.into_string()]);
}

#[when("I run the zones command")]
fn run_zones_command(#[from(world)] world: &ZonesWorld) {
    let mut invocation = vec!["saferoute".to_owned(), "zones".to_owned()];
    invocation.extend(world.cli_args.borrow().iter().cloned());
    let cli = Cli::try_parse_from(invocation).expect("arguments should parse");
    let Command::Zones(args) = cli.command else {
        panic!("expected zones command");
    };
    let mut buffer = world.stdout.borrow_mut();
    run_zones(args, &mut *buffer).expect("zones command should succeed");
}

#[then("six zones are listed")]
fn six_zones(#[from(world)] world: &ZonesWorld) {
    assert_eq!(world.listing().len(), 6);
}

#[then("one zone is listed")]
fn one_zone(#[from(world)] world: &ZonesWorld) {
    assert_eq!(world.listing().len(), 1);
}

#[then("Paharganj is listed in red as high risk")]
fn paharganj_red(#[from(world)] world: &ZonesWorld) {
    let zone = world.zone_named("Paharganj");
    assert_eq!(zone["riskLevel"], "high");
    assert_eq!(zone["badge"], "HIGH RISK");
    assert_eq!(zone["color"], "#EF4444");
    assert_eq!(zone["incidents"], 15);
}

#[then("Hauz Khas is listed in amber as medium risk")]
fn hauz_khas_amber(#[from(world)] world: &ZonesWorld) {
    let zone = world.zone_named("Hauz Khas");
    assert_eq!(zone["riskLevel"], "medium");
    assert_eq!(zone["color"], "#F59E0B");
    assert_eq!(zone["lastUpdated"], "3 min ago");
}

macro_rules! register_zones_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/zones_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ZonesWorld) {
            let _ = world;
        }
    };
}

register_zones_scenario!(zones_builtin, "listing the built-in zones");
register_zones_scenario!(zones_from_feed, "listing zones from a feed file");
