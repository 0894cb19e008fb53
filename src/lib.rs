// ABOUTME: Library root for stevedore - container-fleet loading simulation.
// ABOUTME: The CLI binary is in main.rs.

pub mod container;
pub mod report;
pub mod scenario;
pub mod ship;
pub mod types;
