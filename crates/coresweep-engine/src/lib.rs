// Engine layer - diagnostic checks and the detect/transfer/purge lifecycle.
// Sits between raw device output (matchers) and the host driving device runs.

pub mod adapter;
pub mod check;
pub mod dialect;
pub mod lifecycle;

pub use adapter::{ArtifactTransfer, CommandExecutor, TransferRequest};
pub use check::{run_check, CheckReport, CheckSpec, ErrorPolicy};
pub use dialect::Dialect;
pub use lifecycle::{
    DeviceRunner, LifecycleOptions, LifecycleReport, PurgeOptions, TransferConfig,
};
