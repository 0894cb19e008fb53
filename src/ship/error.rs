// ABOUTME: Error types for ship-level container operations.
// ABOUTME: Rejected containers travel back inside the errors, so ownership is never dropped.

use crate::container::Container;
use crate::types::SerialNumber;
use thiserror::Error;

/// Which deck limit a load attempt would break. Both limits are checked in
/// one place; either produces the same [`CapacityError`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CapacityBreach {
    #[error("all {max} container slots in use")]
    SlotsFull { max: usize },

    #[error("deck weight would reach {would_be_kg} kg, over the {max_kg} kg limit")]
    Overweight { would_be_kg: f64, max_kg: f64 },
}

/// A container the ship could not take on board.
///
/// Carries the rejected container back to the caller, in the manner of
/// `mpsc::SendError`; the ship itself is unchanged.
#[derive(Debug, Error)]
#[error("cannot load {} onto ship: {breach}", .rejected.serial())]
pub struct CapacityError {
    pub breach: CapacityBreach,
    pub rejected: Container,
}

/// The named container is not currently held by the ship.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no container {0} on board")]
pub struct NotFoundError(pub SerialNumber);

/// Failure of a replace operation.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// The outgoing container is not on board; the incoming one is handed
    /// back untouched.
    #[error("no container {serial} on board")]
    NotFound {
        serial: SerialNumber,
        incoming: Container,
    },

    /// The incoming container was rejected after the outgoing one had already
    /// been removed. The ship keeps neither; both come back to the caller.
    #[error("replacement rejected: {rejection}")]
    Rejected {
        removed: Container,
        rejection: CapacityError,
    },
}

/// Failure of a transfer between ships. The source ship is unchanged in
/// every failure case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("no container {0} on board the source ship")]
    NotFound(SerialNumber),

    #[error("target ship refused the container: {0}")]
    Rejected(CapacityBreach),
}
