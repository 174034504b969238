//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - load, validate, merge, render and write `socket.yml`
//! - `ValidateUseCase` - validate policy files only
//! - `CheckUseCase` - validate one rendered `socket.yml`
//! - `DiffUseCase` - preview what `generate` would change
//!
//! `SocketConfigurator` holds the merge logic the use cases share.

pub mod check;
pub mod configurator;
pub mod diff;
pub mod generate;
pub mod pipeline;
pub mod validate;

pub use check::CheckUseCase;
pub use configurator::SocketConfigurator;
pub use diff::{ChangeType, DiffEntry, DiffResult, DiffUseCase};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase, GeneratedConfig};
pub use pipeline::{ExpiredRule, PipelineOutput, PolicyPipeline};
pub use validate::{ValidateOptions, ValidateResult, ValidateUseCase};
