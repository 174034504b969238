//! Presentation Layer
//!
//! Wires use cases to their file-system adapters for the CLI.
//!
//! ```ignore
//! use socket_configurator::presentation::factory;
//!
//! let use_case = factory::create_generate_use_case(&config.paths);
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;

pub use factory::{
    create_diff_use_case, create_generate_use_case, create_validate_use_case, PolicyPaths,
};
