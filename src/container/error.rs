// ABOUTME: Load failure for a single container.
// ABOUTME: Raised before any cargo mutation, so container state is untouched on error.

use crate::types::SerialNumber;
use thiserror::Error;

/// Requested cargo mass exceeds the container's effective fill limit.
///
/// The limit depends on the cargo class: hazardous liquids are capped at half
/// the rated payload, safe liquids at 90 %, gas and refrigerated cargo at the
/// full rated payload.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot load {requested_kg} kg into {serial}: fill limit is {limit_kg} kg")]
pub struct OverfillError {
    pub serial: SerialNumber,
    pub requested_kg: f64,
    pub limit_kg: f64,
}
