//! Testing infrastructure for coresweep integration tests.
//!
//! - `executors`: scripted [`CommandExecutor`](coresweep_engine::CommandExecutor)
//!   fakes with canned per-command responses
//! - `transfers`: scripted [`ArtifactTransfer`](coresweep_engine::ArtifactTransfer)
//!   fakes with per-artifact failure injection and call recording
//! - `fixtures`: canned device command outputs

pub mod executors;
pub mod fixtures;
pub mod transfers;

pub use executors::ScriptedExecutor;
pub use transfers::ScriptedTransfer;
