//! Game timing and rule constants

use std::time::Duration;

/// Maximum number of guess attempts allowed per game
pub const MAX_ROWS: usize = 6;

/// Duration of a tile flip when revealing letter status
pub const FLIP: Duration = Duration::from_millis(600);

/// Delay between each tile's flip in a revealed row
pub const STAGGER: Duration = Duration::from_millis(240);

/// Margin added after the last flip before the commit resolves
pub const RESOLVE_EPSILON: Duration = Duration::from_millis(10);

/// Reveal timing for one session
///
/// Drivers that animate use [`Timing::default`]; tests and the line mode use
/// [`Timing::instant`] so commits resolve with no delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub stagger: Duration,
    pub flip: Duration,
    pub epsilon: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            stagger: STAGGER,
            flip: FLIP,
            epsilon: RESOLVE_EPSILON,
        }
    }
}

impl Timing {
    /// Zero-delay timing; every reveal resolves immediately
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            stagger: Duration::ZERO,
            flip: Duration::ZERO,
            epsilon: Duration::ZERO,
        }
    }
}
