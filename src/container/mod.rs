// ABOUTME: Cargo container entity: common fields plus a closed set of cargo classes.
// ABOUTME: Fill limits, hazard alerts, and emptying rules dispatch on the class.

mod error;

pub use error::OverfillError;

use crate::types::{ClassCode, SerialIssuer, SerialNumber};
use tracing::{debug, warn};

/// Fraction of the cargo left behind when a gas container is emptied.
const GAS_RESIDUAL_FRACTION: f64 = 0.05;
/// Fill limit fractions of rated payload for liquid cargo.
const HAZARDOUS_LIQUID_FILL: f64 = 0.5;
const SAFE_LIQUID_FILL: f64 = 0.9;

/// Cargo class of a container.
///
/// The set is closed: behavior differences are pattern matches on this enum,
/// not an open hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum CargoClass {
    /// Liquid cargo; hazardous liquids get a reduced fill limit.
    Liquid { hazardous: bool },
    /// Pressurized gas. Pressure is informational and plays no part in limits.
    Gas { pressure_bar: f64 },
    /// Chilled cargo held at a fixed temperature for a given product.
    Refrigerated { product: String, temperature_c: f64 },
}

impl CargoClass {
    pub fn code(&self) -> ClassCode {
        match self {
            CargoClass::Liquid { .. } => ClassCode::Liquid,
            CargoClass::Gas { .. } => ClassCode::Gas,
            CargoClass::Refrigerated { .. } => ClassCode::Refrigerated,
        }
    }

    /// Human-readable class name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            CargoClass::Liquid { .. } => "liquid",
            CargoClass::Gas { .. } => "gas",
            CargoClass::Refrigerated { .. } => "refrigerated",
        }
    }
}

/// A single physical container and its cargo state.
///
/// Dimensions, tare weight, and rated payload are fixed at construction;
/// cargo mass changes only through [`load_cargo`](Container::load_cargo) and
/// [`empty_cargo`](Container::empty_cargo).
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    serial: SerialNumber,
    class: CargoClass,
    tare_weight_kg: f64,
    height_cm: f64,
    depth_cm: f64,
    max_payload_kg: f64,
    cargo_kg: f64,
}

impl Container {
    /// Build an empty container; the serial number comes from the issuer.
    pub fn new(
        class: CargoClass,
        tare_weight_kg: f64,
        height_cm: f64,
        depth_cm: f64,
        max_payload_kg: f64,
        issuer: &mut SerialIssuer,
    ) -> Self {
        let serial = issuer.issue(class.code());
        Self {
            serial,
            class,
            tare_weight_kg,
            height_cm,
            depth_cm,
            max_payload_kg,
            cargo_kg: 0.0,
        }
    }

    /// Liquid container shorthand.
    pub fn liquid(
        hazardous: bool,
        tare_weight_kg: f64,
        height_cm: f64,
        depth_cm: f64,
        max_payload_kg: f64,
        issuer: &mut SerialIssuer,
    ) -> Self {
        Self::new(
            CargoClass::Liquid { hazardous },
            tare_weight_kg,
            height_cm,
            depth_cm,
            max_payload_kg,
            issuer,
        )
    }

    /// Gas container shorthand.
    pub fn gas(
        pressure_bar: f64,
        tare_weight_kg: f64,
        height_cm: f64,
        depth_cm: f64,
        max_payload_kg: f64,
        issuer: &mut SerialIssuer,
    ) -> Self {
        Self::new(
            CargoClass::Gas { pressure_bar },
            tare_weight_kg,
            height_cm,
            depth_cm,
            max_payload_kg,
            issuer,
        )
    }

    /// Refrigerated container shorthand.
    pub fn refrigerated(
        product: impl Into<String>,
        temperature_c: f64,
        tare_weight_kg: f64,
        height_cm: f64,
        depth_cm: f64,
        max_payload_kg: f64,
        issuer: &mut SerialIssuer,
    ) -> Self {
        Self::new(
            CargoClass::Refrigerated {
                product: product.into(),
                temperature_c,
            },
            tare_weight_kg,
            height_cm,
            depth_cm,
            max_payload_kg,
            issuer,
        )
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn class(&self) -> &CargoClass {
        &self.class
    }

    pub fn tare_weight_kg(&self) -> f64 {
        self.tare_weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn depth_cm(&self) -> f64 {
        self.depth_cm
    }

    pub fn max_payload_kg(&self) -> f64 {
        self.max_payload_kg
    }

    pub fn cargo_kg(&self) -> f64 {
        self.cargo_kg
    }

    /// Combined tare and cargo mass, the figure ships weigh against their
    /// deck limit.
    pub fn gross_weight_kg(&self) -> f64 {
        self.tare_weight_kg + self.cargo_kg
    }

    /// Effective fill limit for the current cargo class.
    pub fn fill_limit_kg(&self) -> f64 {
        match self.class {
            CargoClass::Liquid { hazardous: true } => self.max_payload_kg * HAZARDOUS_LIQUID_FILL,
            CargoClass::Liquid { hazardous: false } => self.max_payload_kg * SAFE_LIQUID_FILL,
            CargoClass::Gas { .. } | CargoClass::Refrigerated { .. } => self.max_payload_kg,
        }
    }

    /// Set cargo mass. A second load overwrites the first; masses do not
    /// accumulate. The limit check is inclusive, so loading exactly the fill
    /// limit succeeds.
    ///
    /// On violation, hazard-capable classes emit their alert before the error
    /// is returned; cargo mass stays unchanged either way.
    pub fn load_cargo(&mut self, mass_kg: f64) -> Result<(), OverfillError> {
        let limit_kg = self.fill_limit_kg();
        if mass_kg > limit_kg {
            self.notify_hazard();
            return Err(OverfillError {
                serial: self.serial.clone(),
                requested_kg: mass_kg,
                limit_kg,
            });
        }
        self.cargo_kg = mass_kg;
        debug!(serial = %self.serial, mass_kg, "cargo loaded");
        Ok(())
    }

    /// Empty the container per its class rule: gas keeps a 5 % residual,
    /// everything else drops to zero. Always succeeds.
    pub fn empty_cargo(&mut self) {
        self.cargo_kg = match self.class {
            CargoClass::Gas { .. } => self.cargo_kg * GAS_RESIDUAL_FRACTION,
            _ => 0.0,
        };
    }

    /// Hazard alert text, if this cargo class carries a hazard risk.
    ///
    /// Refrigerated containers have no hazard class and return `None`;
    /// callers must branch on presence rather than assume every container
    /// supports the capability.
    pub fn hazard_notice(&self) -> Option<String> {
        match self.class {
            CargoClass::Liquid { .. } | CargoClass::Gas { .. } => Some(format!(
                "hazardous situation on container {}",
                self.serial
            )),
            CargoClass::Refrigerated { .. } => None,
        }
    }

    /// Emit the hazard alert if the class supports it. Returns whether an
    /// alert was emitted.
    pub fn notify_hazard(&self) -> bool {
        match self.hazard_notice() {
            Some(notice) => {
                warn!(serial = %self.serial, "{notice}");
                true
            }
            None => false,
        }
    }

    /// Flip the hazardous flag on a liquid container; subsequent loads use
    /// the new fill limit. Returns `false` (and changes nothing) for other
    /// cargo classes.
    pub fn set_hazardous(&mut self, hazardous: bool) -> bool {
        match &mut self.class {
            CargoClass::Liquid { hazardous: flag } => {
                *flag = hazardous;
                true
            }
            _ => false,
        }
    }
}
