//! Port definitions (traits implemented by adapters).

pub mod drive;

pub use drive::{DriveClientFactory, DriveClientPort, DrivePortError, DrivePortResult};
