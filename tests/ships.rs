// ABOUTME: Integration tests for the ContainerShip aggregate.
// ABOUTME: Covers capacity limits, unload ordering, the non-atomic replace, and safe transfer.

use stevedore::container::Container;
use stevedore::ship::{CapacityBreach, ContainerShip, ReplaceError, TransferError};
use stevedore::types::SerialIssuer;

fn issuer() -> SerialIssuer {
    SerialIssuer::sequential()
}

/// Liquid container with the given tare, loaded with the given cargo.
fn loaded_liquid(tare_kg: f64, cargo_kg: f64, iss: &mut SerialIssuer) -> Container {
    let mut c = Container::liquid(false, tare_kg, 250.0, 600.0, 2.0 * cargo_kg + 1.0, iss);
    c.load_cargo(cargo_kg).expect("fixture load should fit");
    c
}

mod loading {
    use super::*;

    #[test]
    fn concrete_two_container_load() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(25.0, 100, 20_000.0);

        let mut liquid = Container::liquid(false, 500.0, 250.0, 600.0, 1000.0, &mut iss);
        liquid.load_cargo(800.0).expect("800 kg fits the 900 kg limit");
        let mut gas = Container::gas(12.0, 750.0, 250.0, 600.0, 1500.0, &mut iss);
        gas.load_cargo(1400.0).expect("1400 kg fits the rated payload");

        let liquid_serial = liquid.serial().clone();
        let gas_serial = gas.serial().clone();

        ship.load_container(liquid).unwrap();
        ship.load_container(gas).unwrap();

        assert!(ship.holds(&liquid_serial));
        assert!(ship.holds(&gas_serial));
        assert_eq!(ship.deck_weight_kg(), 3450.0);
    }

    #[test]
    fn exact_weight_limit_is_allowed() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 3000.0);
        ship.load_container(loaded_liquid(500.0, 1000.0, &mut iss))
            .unwrap();
        ship.load_container(loaded_liquid(500.0, 1000.0, &mut iss))
            .expect("summed weight of exactly 3000 kg must be accepted");
        assert_eq!(ship.deck_weight_kg(), 3000.0);
    }

    #[test]
    fn overweight_load_is_rejected_and_ship_unchanged() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 3000.0);
        ship.load_container(loaded_liquid(500.0, 1000.0, &mut iss))
            .unwrap();

        let too_heavy = loaded_liquid(500.0, 1001.0, &mut iss);
        let serial = too_heavy.serial().clone();
        let err = ship.load_container(too_heavy).unwrap_err();

        assert!(matches!(
            err.breach,
            CapacityBreach::Overweight { max_kg, .. } if max_kg == 3000.0
        ));
        // The rejected container comes back to the caller untouched.
        assert_eq!(err.rejected.serial(), &serial);
        assert_eq!(err.rejected.cargo_kg(), 1001.0);
        assert_eq!(ship.containers().len(), 1);
        assert_eq!(ship.deck_weight_kg(), 1500.0);
    }

    #[test]
    fn slot_limit_is_enforced() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 1, 100_000.0);
        ship.load_container(loaded_liquid(500.0, 100.0, &mut iss))
            .unwrap();

        let err = ship
            .load_container(loaded_liquid(500.0, 100.0, &mut iss))
            .unwrap_err();
        assert_eq!(err.breach, CapacityBreach::SlotsFull { max: 1 });
        assert_eq!(ship.containers().len(), 1);
    }
}

mod unloading {
    use super::*;

    #[test]
    fn unload_empties_before_removal() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 10_000.0);

        let mut gas = Container::gas(12.0, 750.0, 250.0, 600.0, 1500.0, &mut iss);
        gas.load_cargo(1400.0).unwrap();
        let serial = gas.serial().clone();
        ship.load_container(gas).unwrap();

        let unloaded = ship.unload_container(&serial).unwrap();
        // Gas emptying ran before removal: the returned container holds the residual.
        assert_eq!(unloaded.cargo_kg(), 70.0);
        assert!(!ship.holds(&serial));
    }

    #[test]
    fn unload_of_absent_container_fails() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 10_000.0);
        let elsewhere = loaded_liquid(500.0, 100.0, &mut iss);

        let err = ship.unload_container(elsewhere.serial()).unwrap_err();
        assert_eq!(&err.0, elsewhere.serial());
    }
}

mod replacing {
    use super::*;

    #[test]
    fn successful_replace_returns_the_outgoing_container() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 10_000.0);

        let old = loaded_liquid(500.0, 800.0, &mut iss);
        let old_serial = old.serial().clone();
        ship.load_container(old).unwrap();

        let new = loaded_liquid(400.0, 600.0, &mut iss);
        let new_serial = new.serial().clone();

        let removed = ship.replace_container(&old_serial, new).unwrap();
        assert_eq!(removed.serial(), &old_serial);
        assert!(!ship.holds(&old_serial));
        assert!(ship.holds(&new_serial));
    }

    #[test]
    fn replace_with_unknown_outgoing_hands_back_the_incoming() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 10_000.0);
        let stranger = loaded_liquid(500.0, 100.0, &mut iss);
        let incoming = loaded_liquid(400.0, 200.0, &mut iss);
        let incoming_serial = incoming.serial().clone();

        match ship.replace_container(stranger.serial(), incoming) {
            Err(ReplaceError::NotFound { serial, incoming }) => {
                assert_eq!(&serial, stranger.serial());
                assert_eq!(incoming.serial(), &incoming_serial);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn rejected_replace_leaves_the_ship_holding_neither() {
        // The outgoing container is removed before the incoming one is
        // checked; a rejection does not restore it. Both containers come
        // back through the error instead.
        let mut iss = issuer();
        let mut ship = ContainerShip::new(20.0, 10, 2000.0);

        let old = loaded_liquid(500.0, 500.0, &mut iss);
        let old_serial = old.serial().clone();
        ship.load_container(old).unwrap();

        let oversized = loaded_liquid(1500.0, 1000.0, &mut iss);
        let oversized_serial = oversized.serial().clone();

        match ship.replace_container(&old_serial, oversized) {
            Err(ReplaceError::Rejected { removed, rejection }) => {
                assert_eq!(removed.serial(), &old_serial);
                assert_eq!(rejection.rejected.serial(), &oversized_serial);
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert!(!ship.holds(&old_serial));
        assert!(!ship.holds(&oversized_serial));
        assert!(ship.containers().is_empty());
    }
}

mod transferring {
    use super::*;

    #[test]
    fn successful_transfer_moves_the_container() {
        let mut iss = issuer();
        let mut source = ContainerShip::new(20.0, 10, 10_000.0);
        let mut target = ContainerShip::new(18.0, 10, 10_000.0);

        let container = loaded_liquid(500.0, 800.0, &mut iss);
        let serial = container.serial().clone();
        source.load_container(container).unwrap();

        source.transfer_container(&serial, &mut target).unwrap();
        assert!(!source.holds(&serial));
        assert!(target.holds(&serial));
    }

    #[test]
    fn rejected_transfer_changes_neither_ship() {
        let mut iss = issuer();
        let mut source = ContainerShip::new(20.0, 10, 10_000.0);
        let mut target = ContainerShip::new(18.0, 10, 1000.0);

        let container = loaded_liquid(500.0, 800.0, &mut iss);
        let serial = container.serial().clone();
        source.load_container(container).unwrap();
        let target_resident = loaded_liquid(300.0, 100.0, &mut iss);
        let resident_serial = target_resident.serial().clone();
        target.load_container(target_resident).unwrap();

        let err = source.transfer_container(&serial, &mut target).unwrap_err();
        assert!(matches!(err, TransferError::Rejected(_)));

        // Destination capacity is checked before the source is mutated.
        assert!(source.holds(&serial));
        assert_eq!(source.containers().len(), 1);
        assert_eq!(target.containers().len(), 1);
        assert!(target.holds(&resident_serial));
    }

    #[test]
    fn transfer_of_absent_container_fails() {
        let mut iss = issuer();
        let mut source = ContainerShip::new(20.0, 10, 10_000.0);
        let mut target = ContainerShip::new(18.0, 10, 10_000.0);
        let elsewhere = loaded_liquid(500.0, 100.0, &mut iss);

        let err = source
            .transfer_container(elsewhere.serial(), &mut target)
            .unwrap_err();
        assert!(matches!(err, TransferError::NotFound(_)));
    }
}

mod reports {
    use super::*;

    #[test]
    fn report_lists_containers_in_load_order() {
        let mut iss = issuer();
        let mut ship = ContainerShip::new(25.0, 100, 20_000.0);

        let mut gas = Container::gas(12.0, 750.0, 250.0, 600.0, 1500.0, &mut iss);
        gas.load_cargo(1400.0).unwrap();
        let mut fridge =
            Container::refrigerated("bananas", 13.3, 600.0, 260.0, 600.0, 2000.0, &mut iss);
        fridge.load_cargo(1500.0).unwrap();

        ship.load_container(gas).unwrap();
        ship.load_container(fridge).unwrap();

        let report = ship.report();
        assert_eq!(report.max_speed_knots, 25.0);
        assert_eq!(report.max_container_count, 100);
        assert_eq!(report.max_weight_kg, 20_000.0);
        assert_eq!(report.containers.len(), 2);
        assert_eq!(report.containers[0].class, "gas");
        assert_eq!(report.containers[0].cargo_kg, 1400.0);
        assert_eq!(report.containers[1].class, "refrigerated");

        let text = report.to_string();
        assert!(text.contains("max speed 25 kn"));
        assert!(text.contains("KON-G-0001 - 1400 kg of gas cargo"));
        assert!(text.contains("KON-C-0002 - 1500 kg of refrigerated cargo"));
    }

    #[test]
    fn empty_ship_report_says_so() {
        let ship = ContainerShip::new(12.0, 4, 800.0);
        assert!(ship.report().to_string().contains("no containers on board"));
    }
}
