// ABOUTME: ContainerShip aggregate: owns containers and enforces deck capacity.
// ABOUTME: Slot count and deck weight limits are checked together before any mutation.

mod error;

pub use error::{CapacityBreach, CapacityError, NotFoundError, ReplaceError, TransferError};

use crate::container::Container;
use crate::types::SerialNumber;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A container ship with fixed speed and capacity parameters.
///
/// The ship owns its containers by value, so a container can never sit on two
/// ships at once. Membership lookups go by serial number; when serials
/// collide (a random issuer allows it) the first match in load order wins.
#[derive(Debug)]
pub struct ContainerShip {
    max_speed_knots: f64,
    max_container_count: usize,
    max_weight_kg: f64,
    containers: Vec<Container>,
}

impl ContainerShip {
    pub fn new(max_speed_knots: f64, max_container_count: usize, max_weight_kg: f64) -> Self {
        Self {
            max_speed_knots,
            max_container_count,
            max_weight_kg,
            containers: Vec::new(),
        }
    }

    pub fn max_speed_knots(&self) -> f64 {
        self.max_speed_knots
    }

    pub fn max_container_count(&self) -> usize {
        self.max_container_count
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_kg
    }

    /// Containers currently on board, in load order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn holds(&self, serial: &SerialNumber) -> bool {
        self.position(serial).is_some()
    }

    /// Combined tare and cargo weight of everything on deck.
    pub fn deck_weight_kg(&self) -> f64 {
        self.containers.iter().map(Container::gross_weight_kg).sum()
    }

    fn position(&self, serial: &SerialNumber) -> Option<usize> {
        self.containers.iter().position(|c| c.serial() == serial)
    }

    /// Check both deck limits for one more container, without mutating.
    /// Limits are inclusive: filling the last slot or reaching the exact
    /// weight limit is allowed.
    fn admission(&self, container: &Container) -> Result<(), CapacityBreach> {
        if self.containers.len() + 1 > self.max_container_count {
            return Err(CapacityBreach::SlotsFull {
                max: self.max_container_count,
            });
        }
        let would_be_kg = self.deck_weight_kg() + container.gross_weight_kg();
        if would_be_kg > self.max_weight_kg {
            return Err(CapacityBreach::Overweight {
                would_be_kg,
                max_kg: self.max_weight_kg,
            });
        }
        Ok(())
    }

    /// Take a container on board. On rejection the container comes back
    /// inside the error and the ship is unchanged.
    pub fn load_container(&mut self, container: Container) -> Result<(), CapacityError> {
        if let Err(breach) = self.admission(&container) {
            return Err(CapacityError {
                breach,
                rejected: container,
            });
        }
        debug!(serial = %container.serial(), "container loaded onto ship");
        self.containers.push(container);
        Ok(())
    }

    /// Empty a container's cargo, then take it off the ship. Cargo is emptied
    /// before removal; the emptied container is returned to the caller.
    pub fn unload_container(&mut self, serial: &SerialNumber) -> Result<Container, NotFoundError> {
        let index = self
            .position(serial)
            .ok_or_else(|| NotFoundError(serial.clone()))?;
        self.containers[index].empty_cargo();
        debug!(serial = %serial, "container unloaded");
        Ok(self.containers.remove(index))
    }

    /// Swap a held container for a new one.
    ///
    /// The outgoing container is removed before the incoming one is checked,
    /// so a rejected replacement leaves the ship holding neither. Both
    /// containers come back through [`ReplaceError::Rejected`] in that case.
    pub fn replace_container(
        &mut self,
        outgoing: &SerialNumber,
        incoming: Container,
    ) -> Result<Container, ReplaceError> {
        let Some(index) = self.position(outgoing) else {
            return Err(ReplaceError::NotFound {
                serial: outgoing.clone(),
                incoming,
            });
        };
        let removed = self.containers.remove(index);
        match self.load_container(incoming) {
            Ok(()) => Ok(removed),
            Err(rejection) => Err(ReplaceError::Rejected { removed, rejection }),
        }
    }

    /// Move a container to another ship.
    ///
    /// The target's capacity is checked before the source is touched, so a
    /// failed transfer changes neither ship. This ordering is a contract.
    pub fn transfer_container(
        &mut self,
        serial: &SerialNumber,
        target: &mut ContainerShip,
    ) -> Result<(), TransferError> {
        let index = self
            .position(serial)
            .ok_or_else(|| TransferError::NotFound(serial.clone()))?;
        target
            .admission(&self.containers[index])
            .map_err(TransferError::Rejected)?;
        let container = self.containers.remove(index);
        debug!(serial = %container.serial(), "container transferred");
        target.containers.push(container);
        Ok(())
    }

    /// Snapshot of the ship's parameters and everything on deck, for text or
    /// JSON output.
    pub fn report(&self) -> ShipReport {
        ShipReport {
            max_speed_knots: self.max_speed_knots,
            max_container_count: self.max_container_count,
            max_weight_kg: self.max_weight_kg,
            containers: self
                .containers
                .iter()
                .map(|c| ContainerReport {
                    serial: c.serial().to_string(),
                    cargo_kg: c.cargo_kg(),
                    class: c.class().name(),
                })
                .collect(),
        }
    }
}

/// Serializable snapshot of a ship and its held containers.
#[derive(Debug, Clone, Serialize)]
pub struct ShipReport {
    pub max_speed_knots: f64,
    pub max_container_count: usize,
    pub max_weight_kg: f64,
    pub containers: Vec<ContainerReport>,
}

/// One held container as it appears in a ship report.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerReport {
    pub serial: String,
    pub cargo_kg: f64,
    pub class: &'static str,
}

impl fmt::Display for ShipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ship: max speed {} kn, up to {} containers, max weight {} kg",
            self.max_speed_knots, self.max_container_count, self.max_weight_kg
        )?;
        if self.containers.is_empty() {
            writeln!(f, "  no containers on board")?;
        }
        for container in &self.containers {
            writeln!(
                f,
                "  {} - {} kg of {} cargo",
                container.serial, container.cargo_kg, container.class
            )?;
        }
        Ok(())
    }
}
