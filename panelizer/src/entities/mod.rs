mod candidate;
mod config;
mod footprint;
mod panel;
mod summary;

use crate::util::MIN_OVERHEAD;
use anyhow::{Result, ensure};

#[doc(inline)]
pub use candidate::Infeasibility;

#[doc(inline)]
pub use candidate::LayoutCandidate;

#[doc(inline)]
pub use candidate::Margins;

#[doc(inline)]
pub use config::PlacementConfig;

#[doc(inline)]
pub use config::PlacementConfigBuilder;

#[doc(inline)]
pub use footprint::BoardFootprint;

#[doc(inline)]
pub use panel::JUMBO_ID_SUFFIX;

#[doc(inline)]
pub use panel::JumboMultiplier;

#[doc(inline)]
pub use panel::PanelOption;

#[doc(inline)]
pub use panel::StyleClass;

#[doc(inline)]
pub use summary::PanelizerSummary;

pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<()> {
    ensure!(
        value.is_finite() && value > 0.0,
        "{field} must be a strictly positive number of millimeters, got {value}"
    );
    Ok(())
}

pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{field} must be a non-negative number of millimeters, got {value}"
    );
    Ok(())
}

/// Margins, gaps and kerf: zero, or at least [`MIN_OVERHEAD`]
pub(crate) fn ensure_overhead(field: &str, value: f64) -> Result<()> {
    ensure_non_negative(field, value)?;
    ensure!(
        value == 0.0 || value >= MIN_OVERHEAD,
        "{field} must be 0 or at least {MIN_OVERHEAD} mm, got {value}"
    );
    Ok(())
}
