// ABOUTME: Validated serial numbers and their issuing source.
// ABOUTME: Serials follow the KON-<class code>-<four digits> format.

mod issuer;
mod serial_number;

pub use issuer::SerialIssuer;
pub use serial_number::{ClassCode, SerialNumber, SerialNumberError};
