use std::f64::consts::PI;

/// Default number of points per wavelength at the wavelet's peak frequency.
pub const PPW: f64 = 20.0;

/// A Ricker wavelet source.
///
/// The same wavelet drives the hard source of the 2D grid and the incident
/// node of a TFSF grid; each call site passes its own Courant number and time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RickerWavelet {
    /// Points per wavelength at the most energetic frequency.
    pub points_per_wavelength: f64,
}

impl Default for RickerWavelet {
    fn default() -> Self {
        Self { points_per_wavelength: PPW }
    }
}

impl RickerWavelet {
    /// Value of the wavelet at step `time`, `location` cells from the source.
    #[inline]
    pub fn generate(&self, cdtds: f64, time: usize, location: f64) -> f64 {
        let arg = PI * ((cdtds * time as f64 - location) / self.points_per_wavelength - 1.0);
        let arg = arg * arg;

        (1.0 - 2.0 * arg) * (-arg).exp()
    }
}
