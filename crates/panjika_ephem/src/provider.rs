//! The seam between panchang logic and whatever supplies positions.

use panjika_time::Instant;

use crate::ayanamsha::SiderealMode;
use crate::body::Body;
use crate::error::EphemerisError;
use crate::riseset_types::{GeoLocation, RiseSetEvent};

/// Source of sidereal longitudes and horizon events.
///
/// Implementations must be pure with respect to their inputs: the sidereal
/// mode travels with every call, so two requests with different modes can
/// share one provider.
pub trait EphemerisProvider {
    /// Sidereal ecliptic longitude of `body` in degrees, [0, 360).
    fn sidereal_longitude(
        &self,
        at: Instant,
        body: Body,
        mode: SiderealMode,
    ) -> Result<f64, EphemerisError>;

    /// The rise or set of `body` nearest `anchor`, or `None` when the body
    /// does not cross the horizon in that direction within ±12 hours.
    fn rise_or_set(
        &self,
        anchor: Instant,
        body: Body,
        event: RiseSetEvent,
        location: &GeoLocation,
    ) -> Result<Option<Instant>, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn sidereal_longitude(
        &self,
        at: Instant,
        body: Body,
        mode: SiderealMode,
    ) -> Result<f64, EphemerisError> {
        (**self).sidereal_longitude(at, body, mode)
    }

    fn rise_or_set(
        &self,
        anchor: Instant,
        body: Body,
        event: RiseSetEvent,
        location: &GeoLocation,
    ) -> Result<Option<Instant>, EphemerisError> {
        (**self).rise_or_set(anchor, body, event, location)
    }
}
