// ABOUTME: Fixed demonstration scenario exercising the fleet operations.
// ABOUTME: Replace and transfer failures are caught and reported; the run always completes.

use crate::container::Container;
use crate::report::Output;
use crate::ship::ContainerShip;
use crate::types::SerialIssuer;

/// Run the scripted fleet scenario: build two ships and a handful of
/// containers, then exercise load, replace, transfer, and unload, printing
/// ship reports along the way.
pub fn run(issuer: &mut SerialIssuer, out: &Output) {
    let mut freighter = ContainerShip::new(25.0, 100, 20_000.0);
    let mut feeder = ContainerShip::new(18.0, 2, 4_000.0);

    // Fuel oil: 800 kg against a 900 kg effective limit.
    let mut fuel_oil = Container::liquid(false, 500.0, 250.0, 600.0, 1000.0, issuer);
    if let Err(e) = fuel_oil.load_cargo(800.0) {
        out.failure(&e.to_string());
    }

    // Propane at the rated payload boundary.
    let mut propane = Container::gas(12.0, 750.0, 250.0, 600.0, 1500.0, issuer);
    if let Err(e) = propane.load_cargo(1400.0) {
        out.failure(&e.to_string());
    }

    // Hazardous acid: the first attempt overfills the halved limit and
    // triggers a hazard alert; the retry sits exactly on it.
    let mut acid = Container::liquid(true, 400.0, 220.0, 500.0, 1000.0, issuer);
    if let Err(e) = acid.load_cargo(600.0) {
        out.failure(&e.to_string());
    }
    if let Err(e) = acid.load_cargo(500.0) {
        out.failure(&e.to_string());
    }

    let mut bananas = Container::refrigerated("bananas", 13.3, 600.0, 260.0, 600.0, 2000.0, issuer);
    if let Err(e) = bananas.load_cargo(1800.0) {
        out.failure(&e.to_string());
    }

    let acid_serial = acid.serial().clone();
    let propane_serial = propane.serial().clone();
    let bananas_serial = bananas.serial().clone();

    for container in [fuel_oil, propane, acid, bananas] {
        let serial = container.serial().clone();
        match freighter.load_container(container) {
            Ok(()) => out.step(&format!("loaded {serial} onto the freighter")),
            Err(e) => out.failure(&e.to_string()),
        }
    }

    out.ship("freighter", &freighter.report());

    // Swap the acid for frozen fish.
    let mut fish = Container::refrigerated("fish", -2.0, 550.0, 260.0, 600.0, 1800.0, issuer);
    if let Err(e) = fish.load_cargo(1200.0) {
        out.failure(&e.to_string());
    }
    match freighter.replace_container(&acid_serial, fish) {
        Ok(removed) => out.step(&format!("replaced {acid_serial} with a fish container; {} came off", removed.serial())),
        Err(e) => out.failure(&e.to_string()),
    }

    // Move the bananas onto the smaller feeder ship.
    match freighter.transfer_container(&bananas_serial, &mut feeder) {
        Ok(()) => out.step(&format!("transferred {bananas_serial} to the feeder")),
        Err(e) => out.failure(&e.to_string()),
    }

    // Unload the propane; gas containers keep a residual after emptying.
    match freighter.unload_container(&propane_serial) {
        Ok(container) => out.step(&format!(
            "unloaded {propane_serial}; {} kg of residual gas remains",
            container.cargo_kg()
        )),
        Err(e) => out.failure(&e.to_string()),
    }

    out.ship("freighter", &freighter.report());
    out.ship("feeder", &feeder.report());
}
