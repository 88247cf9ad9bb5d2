//! Panchang attribute deriver.
//!
//! Sun and Moon sidereal longitudes are read once at sunrise; each
//! attribute is classified from them and its end time found with the
//! crossing solver on the matching angular function:
//!
//! | attribute | function                 | span     |
//! |-----------|--------------------------|----------|
//! | tithi     | (Moon − Sun) mod 360     | 12°      |
//! | karana    | (Moon − Sun) mod 360     | 6°       |
//! | nakshatra | Moon                     | 13°20'   |
//! | yoga      | (Sun + Moon) mod 360     | 13°20'   |
//!
//! The lunar month comes from the new moon that closes it: the Sun's
//! sidereal sign at that instant names the amanta month.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use panjika_base::{
    DayPeriod, KARANA_SPAN, NAKSHATRA_SPAN, Paksha, TITHI_SPAN, YOGA_SPAN, kali_samvat,
    karana_from_elongation, masa_from_rashi, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude, ritu_from_sidereal_longitude, samvatsara_from_year, shaka_samvat,
    tithi_from_elongation, vikram_samvat, yoga_from_sum,
};
use panjika_ephem::{Body, EphemerisError, EphemerisProvider, GeoLocation, RiseSetEvent, SiderealMode};
use panjika_time::Instant;
use tracing::debug;

use crate::config::{CrossingConfig, PanchangConfig, PurnimantaRule};
use crate::crossing::next_crossing;
use crate::day::{moon_event_on_date, resolve_day};
use crate::error::{Attribute, PanchangError};
use crate::intervals::{abhijit, choghadiya, day_period, dushta_muhurta, horas};
use crate::panchang_types::{
    KaranaInfo, MasaInfo, NakshatraInfo, PanchangRecord, Samvat, TithiInfo, YogaInfo,
};

/// How far before the closing new moon to start looking for the opening
/// one; longer than any synodic month.
const OPENING_NEW_MOON_LEAD_DAYS: f64 = 31.0;

/// Civil date, place and timezone of one panchang request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangRequest {
    pub date: NaiveDate,
    pub location: GeoLocation,
    pub timezone: Tz,
}

pub fn sun_longitude_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    mode: SiderealMode,
) -> Result<f64, EphemerisError> {
    provider.sidereal_longitude(t, Body::Sun, mode)
}

pub fn moon_longitude_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    mode: SiderealMode,
) -> Result<f64, EphemerisError> {
    provider.sidereal_longitude(t, Body::Moon, mode)
}

/// Moon−Sun elongation in degrees, [0, 360).
pub fn elongation_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    mode: SiderealMode,
) -> Result<f64, EphemerisError> {
    let sun = sun_longitude_at(provider, t, mode)?;
    let moon = moon_longitude_at(provider, t, mode)?;
    Ok(normalize_360(moon - sun))
}

/// Sidereal Sun+Moon sum in degrees, [0, 360).
pub fn sidereal_sum_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    mode: SiderealMode,
) -> Result<f64, EphemerisError> {
    let sun = sun_longitude_at(provider, t, mode)?;
    let moon = moon_longitude_at(provider, t, mode)?;
    Ok(normalize_360(sun + moon))
}

/// Next instant after `t0` where `f` reaches `target_deg`, or
/// `CrossingNotFound` for `attribute`.
fn boundary_after<F>(
    f: F,
    t0: Instant,
    target_deg: f64,
    attribute: Attribute,
    config: &CrossingConfig,
) -> Result<Instant, PanchangError>
where
    F: Fn(Instant) -> Result<f64, EphemerisError>,
{
    next_crossing(f, t0, target_deg, config)?.ok_or(PanchangError::CrossingNotFound { attribute })
}

/// Tithi at `t` from a pre-computed elongation, with its end time.
pub fn tithi_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    elongation_deg: f64,
    config: &PanchangConfig,
) -> Result<TithiInfo, PanchangError> {
    let pos = tithi_from_elongation(elongation_deg);
    let target = f64::from(pos.tithi.index() + 1) * TITHI_SPAN;
    let mode = config.sidereal_mode;
    let end = boundary_after(
        |x| elongation_at(provider, x, mode),
        t,
        target,
        Attribute::Tithi,
        &config.crossing,
    )?;
    Ok(TithiInfo {
        tithi: pos.tithi,
        paksha: pos.paksha,
        end,
    })
}

/// Karana at `t` from a pre-computed elongation, with its end time.
pub fn karana_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    elongation_deg: f64,
    config: &PanchangConfig,
) -> Result<KaranaInfo, PanchangError> {
    let pos = karana_from_elongation(elongation_deg);
    let target = f64::from(pos.slot + 1) * KARANA_SPAN;
    let mode = config.sidereal_mode;
    let end = boundary_after(
        |x| elongation_at(provider, x, mode),
        t,
        target,
        Attribute::Karana,
        &config.crossing,
    )?;
    Ok(KaranaInfo {
        karana: pos.karana,
        slot: pos.slot,
        end,
    })
}

/// Nakshatra at `t` from a pre-computed Moon longitude, with its end time.
pub fn nakshatra_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    moon_deg: f64,
    config: &PanchangConfig,
) -> Result<NakshatraInfo, PanchangError> {
    let pos = nakshatra_from_longitude(moon_deg);
    let target = f64::from(pos.nakshatra.index() + 1) * NAKSHATRA_SPAN;
    let mode = config.sidereal_mode;
    let end = boundary_after(
        |x| moon_longitude_at(provider, x, mode),
        t,
        target,
        Attribute::Nakshatra,
        &config.crossing,
    )?;
    Ok(NakshatraInfo {
        nakshatra: pos.nakshatra,
        pada: pos.pada,
        end,
    })
}

/// Yoga at `t` from a pre-computed Sun+Moon sum, with its end time.
pub fn yoga_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    sum_deg: f64,
    config: &PanchangConfig,
) -> Result<YogaInfo, PanchangError> {
    let pos = yoga_from_sum(sum_deg);
    let target = f64::from(pos.yoga.index() + 1) * YOGA_SPAN;
    let mode = config.sidereal_mode;
    let end = boundary_after(
        |x| sidereal_sum_at(provider, x, mode),
        t,
        target,
        Attribute::Yoga,
        &config.crossing,
    )?;
    Ok(YogaInfo {
        yoga: pos.yoga,
        end,
    })
}

/// First new moon (elongation 0°) after `t`.
pub fn next_new_moon<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    config: &PanchangConfig,
) -> Result<Instant, PanchangError> {
    let mode = config.sidereal_mode;
    boundary_after(
        |x| elongation_at(provider, x, mode),
        t,
        0.0,
        Attribute::NewMoon,
        &config.new_moon_crossing(),
    )
}

/// Lunar month containing `t`.
pub fn masa_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    t: Instant,
    paksha: Paksha,
    config: &PanchangConfig,
) -> Result<MasaInfo, PanchangError> {
    let mode = config.sidereal_mode;
    let end = next_new_moon(provider, t, config)?;
    let start = next_new_moon(provider, end - OPENING_NEW_MOON_LEAD_DAYS, config)?;

    let closing = rashi_from_longitude(sun_longitude_at(provider, end, mode)?).rashi;
    let opening = rashi_from_longitude(sun_longitude_at(provider, start, mode)?).rashi;

    let amanta = masa_from_rashi(closing);
    let purnimanta = match config.purnimanta_rule {
        PurnimantaRule::NextMonth => amanta.next(),
        PurnimantaRule::FollowPaksha => match paksha {
            Paksha::Krishna => amanta.next(),
            Paksha::Shukla => amanta,
        },
    };

    debug!(amanta = amanta.name(), closing = closing.name(), opening = opening.name(), "masa");
    Ok(MasaInfo {
        amanta,
        purnimanta,
        adhika: opening == closing,
        start,
        end,
    })
}

/// Era years for a civil date. The samvatsara follows the Vedic year,
/// which starts at Chaitra: early-year dates still in the months from
/// Kartika to Phalguna belong to the previous year's samvatsara.
pub fn samvat_for(date: NaiveDate, amanta_index: u8) -> Samvat {
    let year = date.year();
    let vedic_year = if date.month() <= 4 && amanta_index >= 7 {
        year - 1
    } else {
        year
    };
    Samvat {
        vikram: vikram_samvat(year),
        shaka: shaka_samvat(year),
        kali: kali_samvat(year),
        samvatsara: samvatsara_from_year(vedic_year),
    }
}

/// Full panchang for one civil date and place.
pub fn panchang_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    request: &PanchangRequest,
    config: &PanchangConfig,
) -> Result<PanchangRecord, PanchangError> {
    config.validate().map_err(PanchangError::InvalidConfig)?;
    request.location.validate()?;

    let PanchangRequest {
        date,
        location,
        timezone: tz,
    } = *request;
    let mode = config.sidereal_mode;

    let day = resolve_day(provider, date, &location, &tz, &config.resolver)?;

    let sun = sun_longitude_at(provider, day.sunrise, mode)?;
    let moon = moon_longitude_at(provider, day.sunrise, mode)?;
    let elongation = normalize_360(moon - sun);
    let sum = normalize_360(sun + moon);
    debug!(%date, sun, moon, elongation, "longitudes at sunrise");

    let tithi = tithi_at(provider, day.sunrise, elongation, config)?;
    let karana = karana_at(provider, day.sunrise, elongation, config)?;
    let nakshatra = nakshatra_at(provider, day.sunrise, moon, config)?;
    let yoga = yoga_at(provider, day.sunrise, sum, config)?;
    let masa = masa_at(provider, day.sunrise, tithi.paksha, config)?;

    let (moonrise, moonset) = if config.include_moon_events {
        (
            moon_event_on_date(provider, date, &location, &tz, RiseSetEvent::Rise, &config.resolver)?,
            moon_event_on_date(provider, date, &location, &tz, RiseSetEvent::Set, &config.resolver)?,
        )
    } else {
        (None, None)
    };

    Ok(PanchangRecord {
        date,
        location,
        timezone: tz,
        vaar: day.vaar,
        sunrise: day.sunrise,
        sunset: day.sunset,
        next_sunrise: day.next_sunrise,
        moonrise,
        moonset,
        sun_longitude: sun,
        moon_longitude: moon,
        tithi,
        nakshatra,
        yoga,
        karana,
        moon_rashi: rashi_from_longitude(moon).rashi,
        sun_rashi: rashi_from_longitude(sun).rashi,
        masa,
        ritu: ritu_from_sidereal_longitude(sun),
        samvat: samvat_for(date, masa.amanta.index()),
        rahu_kalam: day_period(&day, DayPeriod::RahuKalam),
        yamaganda: day_period(&day, DayPeriod::Yamaganda),
        gulika: day_period(&day, DayPeriod::Gulika),
        abhijit: abhijit(&day),
        dushta_muhurta: if config.include_dushta_muhurta {
            dushta_muhurta(&day)
        } else {
            Vec::new()
        },
        horas: horas(&day),
        choghadiya: choghadiya(&day),
    })
}
