//! Non-fatal error values returned by the simulation API.

use thiserror::Error;

/// Why a tower placement request was refused. Refusal leaves the
/// simulation untouched; it is an answer, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The requested position falls outside the terrain grid.
    #[error("position is outside the playable area")]
    OutOfBounds,
    /// The requested cell is water; towers need land.
    #[error("towers can only be placed on land")]
    OnWater,
}
