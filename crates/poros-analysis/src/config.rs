use crate::errors::PoreError;

/// Validated configuration for a pore analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoreConfig {
    /// Physical area covered by a single pixel (e.g. micrometers squared).
    pub pixel_area_scale: f64,
    /// Minimum pixel count for a pore to be retained.
    pub size_threshold: usize,
}

impl PoreConfig {
    /// Creates a new `PoreConfig`, validating the raw parameters.
    ///
    /// The threshold is taken as a signed integer so a negative value read
    /// from a CLI or a config file is rejected here instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or the pixel area
    /// scale is not finite and positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use poros_analysis::config::PoreConfig;
    ///
    /// let config = PoreConfig::new(1.35 * 1.35, 20).unwrap();
    /// assert_eq!(config.size_threshold, 20);
    ///
    /// assert!(PoreConfig::new(1.0, -1).is_err());
    /// assert!(PoreConfig::new(0.0, 20).is_err());
    /// ```
    pub fn new(pixel_area_scale: f64, size_threshold: i64) -> Result<Self, PoreError> {
        if size_threshold < 0 {
            return Err(PoreError::ThresholdOutOfRange(size_threshold));
        }
        if !pixel_area_scale.is_finite() || pixel_area_scale <= 0.0 {
            return Err(PoreError::InvalidPixelAreaScale(pixel_area_scale));
        }

        Ok(Self {
            pixel_area_scale,
            size_threshold: size_threshold as usize,
        })
    }
}

impl Default for PoreConfig {
    fn default() -> Self {
        Self {
            pixel_area_scale: 1.0,
            size_threshold: 0,
        }
    }
}
