//! Policy source port - where raw policy files come from.

use crate::domain::entities::PolicySet;
use crate::error::ConfiguratorResult;

/// Supplies the raw organization and repository mappings.
///
/// Implementations must not interpret the mappings; validation and
/// conversion happen in the domain.
pub trait PolicySource {
    /// Human-readable location, used in log messages
    fn describe(&self) -> String;

    fn load(&self) -> ConfiguratorResult<PolicySet>;
}
