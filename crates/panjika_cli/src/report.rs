//! JSON view of a [`PanchangRecord`]: names instead of indices, wall-clock
//! strings in the request timezone.

use chrono::{NaiveDate, SubsecRound};
use chrono_tz::Tz;
use panjika_base::{Vaar, day_choghadiya_row, hora_lord};
use panjika_search::{NamedInterval, PanchangRecord};
use panjika_time::{Instant, TimeError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HoraSlice {
    pub name: &'static str,
    pub planet: &'static str,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ChoghadiyaSlice {
    pub name: &'static str,
    pub quality: &'static str,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub date: String,
    pub day: &'static str,
    pub vaar: &'static str,

    pub tithi: &'static str,
    pub tithi_end: String,
    pub paksha: &'static str,
    pub nakshatra: &'static str,
    pub nakshatra_pada: u8,
    pub nakshatra_end: String,
    pub yoga: &'static str,
    pub yoga_end: String,
    pub karana: &'static str,
    pub karana_end: String,

    pub sunrise: String,
    pub sunset: String,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,

    pub moon_sign: &'static str,
    pub sun_sign: &'static str,
    pub amanta_month: &'static str,
    pub purnimanta_month: &'static str,
    pub adhika_masa: bool,
    pub ritu: &'static str,

    pub vikram_samvat: i32,
    pub shaka_samvat: i32,
    pub kali_samvat: i32,
    pub samvatsara: &'static str,

    pub rahu_kalam: String,
    pub yamaganda: String,
    pub gulika: String,
    pub abhijit: String,
    pub dushta_muhurta: Vec<String>,
    pub hora: Vec<HoraSlice>,
    pub choghadiya: Vec<ChoghadiyaSlice>,
}

/// `HH:MM:SS` in `tz`, rounded to the second, with the civil date appended
/// in parentheses when it differs from `day`.
pub fn clock(t: Instant, tz: &Tz, day: NaiveDate) -> Result<String, TimeError> {
    let civil = t.to_civil(tz)?.round_subsecs(0);
    let hms = civil.format("%H:%M:%S").to_string();
    if civil.date_naive() == day {
        Ok(hms)
    } else {
        Ok(format!("{hms} ({})", civil.date_naive()))
    }
}

/// `HH:MM:SS - HH:MM:SS`.
pub fn span(interval: &NamedInterval, tz: &Tz, day: NaiveDate) -> Result<String, TimeError> {
    Ok(format!(
        "{} - {}",
        clock(interval.start, tz, day)?,
        clock(interval.end, tz, day)?
    ))
}

/// Horas in order from sunrise; lords follow the weekday.
fn hora_slices(
    intervals: &[NamedInterval],
    vaar: Vaar,
    tz: &Tz,
    day: NaiveDate,
) -> Result<Vec<HoraSlice>, TimeError> {
    intervals
        .iter()
        .zip(0u8..)
        .map(|(i, k)| {
            Ok(HoraSlice {
                name: i.label,
                planet: hora_lord(vaar, k).english_name(),
                time: span(i, tz, day)?,
            })
        })
        .collect()
}

fn choghadiya_slices(
    intervals: &[NamedInterval],
    vaar: Vaar,
    tz: &Tz,
    day: NaiveDate,
) -> Result<Vec<ChoghadiyaSlice>, TimeError> {
    intervals
        .iter()
        .zip(day_choghadiya_row(vaar))
        .map(|(i, c)| {
            Ok(ChoghadiyaSlice {
                name: i.label,
                quality: c.quality().name(),
                time: span(i, tz, day)?,
            })
        })
        .collect()
}

impl Report {
    pub fn from_record(p: &PanchangRecord) -> Result<Self, TimeError> {
        let tz = &p.timezone;
        let day = p.date;
        let at = |t: Instant| clock(t, tz, day);
        let opt = |t: Option<Instant>| t.map(|t| clock(t, tz, day)).transpose();

        Ok(Self {
            date: p.date.format("%Y-%m-%d").to_string(),
            day: p.vaar.english_name(),
            vaar: p.vaar.name(),

            tithi: p.tithi.tithi.name(),
            tithi_end: at(p.tithi.end)?,
            paksha: p.tithi.paksha.name(),
            nakshatra: p.nakshatra.nakshatra.name(),
            nakshatra_pada: p.nakshatra.pada,
            nakshatra_end: at(p.nakshatra.end)?,
            yoga: p.yoga.yoga.name(),
            yoga_end: at(p.yoga.end)?,
            karana: p.karana.karana.name(),
            karana_end: at(p.karana.end)?,

            sunrise: at(p.sunrise)?,
            sunset: at(p.sunset)?,
            moonrise: opt(p.moonrise)?,
            moonset: opt(p.moonset)?,

            moon_sign: p.moon_rashi.name(),
            sun_sign: p.sun_rashi.name(),
            amanta_month: p.masa.amanta.name(),
            purnimanta_month: p.masa.purnimanta.name(),
            adhika_masa: p.masa.adhika,
            ritu: p.ritu.name(),

            vikram_samvat: p.samvat.vikram,
            shaka_samvat: p.samvat.shaka,
            kali_samvat: p.samvat.kali,
            samvatsara: p.samvat.samvatsara.name(),

            rahu_kalam: span(&p.rahu_kalam, tz, day)?,
            yamaganda: span(&p.yamaganda, tz, day)?,
            gulika: span(&p.gulika, tz, day)?,
            abhijit: span(&p.abhijit, tz, day)?,
            dushta_muhurta: p
                .dushta_muhurta
                .iter()
                .map(|i| span(i, tz, day))
                .collect::<Result<_, _>>()?,
            hora: hora_slices(&p.horas, p.vaar, tz, day)?,
            choghadiya: choghadiya_slices(&p.choghadiya, p.vaar, tz, day)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panjika_time::local_datetime_instant;

    fn ist_instant(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> Instant {
        let naive = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap();
        local_datetime_instant(naive, &chrono_tz::Asia::Kolkata).unwrap()
    }

    #[test]
    fn clock_on_the_same_day() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
        let t = ist_instant(2024, 10, 31, 15, 53, 54);
        assert_eq!(clock(t, &chrono_tz::Asia::Kolkata, day).unwrap(), "15:53:54");
    }

    #[test]
    fn clock_after_midnight_carries_the_date() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
        let t = ist_instant(2024, 11, 1, 0, 44, 0);
        assert_eq!(
            clock(t, &chrono_tz::Asia::Kolkata, day).unwrap(),
            "00:44:00 (2024-11-01)"
        );
    }

    #[test]
    fn span_joins_with_a_dash() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
        let i = NamedInterval::new(
            "Rahu Kalam",
            ist_instant(2024, 10, 31, 13, 10, 0),
            ist_instant(2024, 10, 31, 14, 35, 30),
        );
        assert_eq!(
            span(&i, &chrono_tz::Asia::Kolkata, day).unwrap(),
            "13:10:00 - 14:35:30"
        );
    }
}
