use thiserror::Error;

/// Describes the search space: its size and per-coordinate bounds.
///
/// The objective forwards this descriptor to search algorithms and never
/// interprets it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDimension")
)]
pub struct Dimension {
    regions: Vec<[f64; 2]>,
    continuous: Vec<bool>,
}

/// Errors that can occur when validating a dimension.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("expected {regions} continuity flags, got {flags}")]
    LengthMismatch { regions: usize, flags: usize },

    #[error("region {index} must be finite with low <= high")]
    Region { index: usize },
}

impl Dimension {
    /// Creates a dimension from per-coordinate regions and continuity flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or if any region is non-finite
    /// or inverted.
    pub fn new(regions: Vec<[f64; 2]>, continuous: Vec<bool>) -> Result<Self, DimensionError> {
        if regions.len() != continuous.len() {
            return Err(DimensionError::LengthMismatch {
                regions: regions.len(),
                flags: continuous.len(),
            });
        }

        if let Some(index) = regions
            .iter()
            .position(|&[low, high]| !low.is_finite() || !high.is_finite() || low > high)
        {
            return Err(DimensionError::Region { index });
        }

        Ok(Self {
            regions,
            continuous,
        })
    }

    /// Creates a fully continuous dimension with the same region on every coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is non-finite or inverted.
    pub fn uniform(size: usize, region: [f64; 2]) -> Result<Self, DimensionError> {
        Self::new(vec![region; size], vec![true; size])
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn size(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn regions(&self) -> &[[f64; 2]] {
        &self.regions
    }

    /// Returns whether coordinate `index` is continuous, or `None` if out of range.
    #[must_use]
    pub fn is_continuous(&self, index: usize) -> Option<bool> {
        self.continuous.get(index).copied()
    }

    /// Returns true if every coordinate is discrete.
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.continuous.iter().all(|&c| !c)
    }

    /// Returns true if `point` has the right size and lies within every region.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.size()
            && point
                .iter()
                .zip(&self.regions)
                .all(|(x, [low, high])| (low..=high).contains(&x))
    }
}

/// Unvalidated form of [`Dimension`] used during deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDimension {
    regions: Vec<[f64; 2]>,
    continuous: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimension> for Dimension {
    type Error = DimensionError;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        Self::new(raw.regions, raw.continuous)
    }
}
