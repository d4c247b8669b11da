//! Mode selection
//!
//! A mode selector names the active backend family member and carries one
//! optional slot per member. Validation runs over the whole record once every
//! field is known, so the slot of the active mode is guaranteed present on
//! any selector that exists.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use switchboard_domain::error::{Error, Result};
use tracing::debug;

/// Configuration that picks one backend among a closed set of modes
#[async_trait]
pub trait ModeSelector: Send + Sync {
    /// Closed set of modes
    type Mode: Copy + Eq + fmt::Display + Send + Sync;

    /// Capability every mode's backend implements
    type Capability: ?Sized + Send + Sync;

    /// Active mode
    fn mode(&self) -> Self::Mode;

    /// Check the whole record: active slot present, present slots well formed
    fn validate(&self) -> Result<()>;

    /// Shared backend of the active mode
    async fn instance(&self) -> Result<Arc<Self::Capability>>;
}

/// Check one slot against the active mode
///
/// Fails when `mode` is active and the slot is empty. A populated slot of an
/// inactive mode is accepted and only logged.
pub fn require_slot<T, M>(slot: Option<&T>, slot_mode: M, active: M, variant: &str) -> Result<()>
where
    M: Eq + fmt::Display,
{
    match (slot, slot_mode == active) {
        (None, true) => Err(Error::configuration(format!(
            "{variant} config required when mode is '{active}'"
        ))),
        (Some(_), false) => {
            debug!(
                slot = %slot_mode,
                active = %active,
                "Ignoring configuration slot of inactive mode"
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Map `validator` failures on a variant block to a configuration error
pub(crate) fn check_variant<V: validator::Validate>(variant: &str, config: &V) -> Result<()> {
    config.validate().map_err(|e| {
        Error::configuration_with_source(format!("Invalid {variant} config: {e}"), e)
    })
}
