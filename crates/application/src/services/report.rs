//! Report renderer
//!
//! Pure functions mapping a forecast payload plus a display name into one
//! of three report variants. Rendering only begins after a complete,
//! successful fetch; no partial reports exist.
//!
//! Formatting rules reproduced exactly:
//! - temperatures round to the nearest whole degree; pressure, humidity,
//!   wind speed, and cloudiness pass through as reported
//! - wind degrees bucket into 8 compass points, 45-degree sectors centered
//!   on N/NE/E/SE/S/SW/W/NW; sector boundaries at k*45+22.5 belong to the
//!   upper sector
//! - precipitation probability buckets at 33/66 after rounding p*100
//! - timestamps render "local-looking" by shifting the Unix timestamp by
//!   the payload's timezone offset and formatting it as UTC

use chrono::DateTime;
use thiserror::Error;

use crate::ports::ForecastBundle;

/// Renderer failures; internal defects, never user-recoverable states
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The provider's icon code has no glyph mapping
    ///
    /// A loud failure on purpose: substituting a blank glyph would hide
    /// provider vocabulary drift.
    #[error("No glyph mapped for icon code: {0}")]
    MissingIconGlyph(String),

    /// The shifted timestamp does not fit a calendar date
    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}

/// Fallback label for wind degrees outside every sector
const COMPASS_FALLBACK: &str = "N/A";

/// Bucket wind degrees into one of 8 compass points
///
/// Total over [0, 360): every value maps to exactly one label, boundaries
/// at k*45+22.5 go to the upper sector. Anything else (negative, NaN)
/// gets the fallback label instead of an unhandled case.
#[must_use]
pub fn compass_point(degrees: f64) -> &'static str {
    if (0.0..22.5).contains(&degrees) || degrees >= 337.5 {
        "N"
    } else if (22.5..67.5).contains(&degrees) {
        "NE"
    } else if (67.5..112.5).contains(&degrees) {
        "E"
    } else if (112.5..157.5).contains(&degrees) {
        "SE"
    } else if (157.5..202.5).contains(&degrees) {
        "S"
    } else if (202.5..247.5).contains(&degrees) {
        "SW"
    } else if (247.5..292.5).contains(&degrees) {
        "W"
    } else if (292.5..337.5).contains(&degrees) {
        "NW"
    } else {
        COMPASS_FALLBACK
    }
}

/// Bucket a precipitation probability (0.0-1.0) into a glyph
///
/// round(p*100) in [0,33) is a low-probability glyph, [33,66) medium,
/// [66,100] high. The 33/66 thresholds are load-bearing.
#[must_use]
pub fn precipitation_glyph(probability: f64) -> &'static str {
    let pop = (probability * 100.0).round();
    if pop < 33.0 {
        "🌂"
    } else if pop < 66.0 {
        "☂"
    } else {
        "☔"
    }
}

/// Look up the glyph for a provider icon code
///
/// Fixed table keyed by the provider's icon vocabulary; day/night
/// variants collapse to the same glyph except for clear sky.
fn icon_glyph(code: &str) -> Result<&'static str, ReportError> {
    let glyph = match code {
        "01d" => "☀",
        "01n" => "🌙",
        "02d" | "02n" => "🌤",
        "03d" | "03n" => "🌥",
        "04d" | "04n" => "☁",
        "09d" | "09n" | "10d" | "10n" => "🌧",
        "11d" | "11n" => "⛈",
        "13d" | "13n" => "❄",
        "50d" | "50n" => "🌫",
        other => return Err(ReportError::MissingIconGlyph(other.to_string())),
    };
    Ok(glyph)
}

/// Format a shifted timestamp with the given strftime pattern
fn local_label(timestamp: i64, offset: i64, pattern: &str) -> Result<String, ReportError> {
    let shifted = timestamp + offset;
    DateTime::from_timestamp(shifted, 0)
        .map(|dt| dt.format(pattern).to_string())
        .ok_or(ReportError::InvalidTimestamp(shifted))
}

/// Render the current-conditions report
///
/// # Errors
///
/// Fails on an unmapped icon code.
pub fn render_current(bundle: &ForecastBundle, display_name: &str) -> Result<String, ReportError> {
    let current = &bundle.current;
    let glyph = icon_glyph(&current.icon)?;
    let wind = compass_point(current.wind_deg);

    Ok(format!(
        "Current weather in {display_name} is {condition} {glyph}\n\
         🌡 Temperature is {temp:.0}℃ (feels like {feels:.0}℃)\n\
         🌀 Atmospheric pressure is {pressure} kPa\n\
         💧 Air humidity is {humidity}%\n\
         🧭 Wind direction is {wind} with 🌬 {wind_speed} m/s speed\n\
         ☁ Cloudiness is {cloudiness}%",
        condition = current.condition,
        temp = current.temperature.round(),
        feels = current.feels_like.round(),
        pressure = current.pressure,
        humidity = current.humidity,
        wind_speed = current.wind_speed,
        cloudiness = current.cloudiness,
    ))
}

/// Render the next-24-hours report from the first 24 hourly samples
///
/// # Errors
///
/// Fails on an unmapped icon code or an out-of-range timestamp.
pub fn render_day(bundle: &ForecastBundle, display_name: &str) -> Result<String, ReportError> {
    let mut out = format!("Weather in {display_name} in next 24 hours:\n");

    for hour in bundle.hourly.iter().take(24) {
        let time = local_label(hour.timestamp, bundle.timezone_offset, "%H:00")?;
        let glyph = icon_glyph(&hour.icon)?;
        let pop_sign = precipitation_glyph(hour.precipitation_probability);
        let pop = (hour.precipitation_probability * 100.0).round();

        out.push_str(&format!(
            "{time} {condition} {glyph},\n \
             🌡 {temp:.0}℃ (feels like {feels:.0}℃). {pop_sign}{pop:.0}%\n\n",
            condition = hour.condition,
            temp = hour.temperature.round(),
            feels = hour.feels_like.round(),
        ));
    }

    Ok(out)
}

/// Render the next-7-days report from all daily samples
///
/// # Errors
///
/// Fails on an unmapped icon code or an out-of-range timestamp.
pub fn render_week(bundle: &ForecastBundle, display_name: &str) -> Result<String, ReportError> {
    let mut out = format!("Weather in {display_name} in next 7 days:\n");

    for day in &bundle.daily {
        let date = local_label(day.timestamp, bundle.timezone_offset, "%Y-%m-%d, %a,")?;
        let glyph = icon_glyph(&day.icon)?;
        let pop_sign = precipitation_glyph(day.precipitation_probability);
        let pop = (day.precipitation_probability * 100.0).round();

        out.push_str(&format!(
            "• {date} {condition} {glyph},\n \
             🌞 at day 🌡 {day_temp:.0}℃ (feels like {day_feels:.0}℃),\n \
             🌜 at night 🌡 {night_temp:.0}℃ (feels like {night_feels:.0}℃),\n \
             {pop_sign} {pop:.0}%\n\n",
            condition = day.condition,
            day_temp = day.day_temperature.round(),
            day_feels = day.day_feels_like.round(),
            night_temp = day.night_temperature.round(),
            night_feels = day.night_feels_like.round(),
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CurrentSample, DailySample, HourlySample};

    fn current_sample() -> CurrentSample {
        CurrentSample {
            timestamp: 1_700_000_000,
            temperature: 4.6,
            feels_like: 1.4,
            condition: "Clouds".to_string(),
            icon: "04d".to_string(),
            pressure: 1013,
            humidity: 80,
            wind_speed: 3.4,
            wind_deg: 10.0,
            cloudiness: 90,
        }
    }

    fn hourly_sample(pop: f64) -> HourlySample {
        HourlySample {
            // 2023-11-14 22:13:20 UTC
            timestamp: 1_700_000_000,
            temperature: 4.6,
            feels_like: 1.4,
            condition: "Rain".to_string(),
            icon: "10d".to_string(),
            precipitation_probability: pop,
        }
    }

    fn daily_sample() -> DailySample {
        DailySample {
            timestamp: 1_700_000_000,
            day_temperature: 7.2,
            night_temperature: 2.8,
            day_feels_like: 5.5,
            night_feels_like: 0.4,
            condition: "Snow".to_string(),
            icon: "13d".to_string(),
            precipitation_probability: 0.9,
        }
    }

    fn bundle() -> ForecastBundle {
        ForecastBundle {
            timezone_offset: 7200,
            current: current_sample(),
            hourly: vec![hourly_sample(0.5)],
            daily: vec![daily_sample()],
        }
    }

    #[test]
    fn compass_ten_degrees_is_north() {
        assert_eq!(compass_point(10.0), "N");
    }

    #[test]
    fn compass_forty_six_degrees_is_north_east() {
        assert_eq!(compass_point(46.0), "NE");
    }

    #[test]
    fn compass_boundaries_belong_to_upper_sector() {
        assert_eq!(compass_point(22.5), "NE");
        assert_eq!(compass_point(67.5), "E");
        assert_eq!(compass_point(112.5), "SE");
        assert_eq!(compass_point(157.5), "S");
        assert_eq!(compass_point(202.5), "SW");
        assert_eq!(compass_point(247.5), "W");
        assert_eq!(compass_point(292.5), "NW");
        assert_eq!(compass_point(337.5), "N");
    }

    #[test]
    fn compass_wraps_near_north() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(359.9), "N");
    }

    #[test]
    fn compass_defends_against_invalid_input() {
        assert_eq!(compass_point(-1.0), "N/A");
        assert_eq!(compass_point(f64::NAN), "N/A");
    }

    #[test]
    fn precipitation_buckets_at_33_and_66() {
        assert_eq!(precipitation_glyph(0.0), "🌂");
        assert_eq!(precipitation_glyph(0.32), "🌂");
        assert_eq!(precipitation_glyph(0.33), "☂");
        assert_eq!(precipitation_glyph(0.5), "☂");
        assert_eq!(precipitation_glyph(0.65), "☂");
        assert_eq!(precipitation_glyph(0.66), "☔");
        assert_eq!(precipitation_glyph(1.0), "☔");
    }

    #[test]
    fn precipitation_rounding_happens_before_bucketing() {
        // 0.325 rounds to 33 -> medium, 0.655 rounds to 66 -> high
        assert_eq!(precipitation_glyph(0.325), "☂");
        assert_eq!(precipitation_glyph(0.655), "☔");
    }

    #[test]
    fn current_report_contains_all_fields() {
        let text = render_current(&bundle(), "Kyiv").expect("render");
        assert!(text.starts_with("Current weather in Kyiv is Clouds ☁"));
        assert!(text.contains("🌡 Temperature is 5℃ (feels like 1℃)"));
        assert!(text.contains("🌀 Atmospheric pressure is 1013 kPa"));
        assert!(text.contains("💧 Air humidity is 80%"));
        assert!(text.contains("🧭 Wind direction is N with 🌬 3.4 m/s speed"));
        assert!(text.contains("☁ Cloudiness is 90%"));
    }

    #[test]
    fn current_report_fails_loudly_on_unknown_icon() {
        let mut b = bundle();
        b.current.icon = "99x".to_string();
        let err = render_current(&b, "Kyiv").unwrap_err();
        assert_eq!(err, ReportError::MissingIconGlyph("99x".to_string()));
    }

    #[test]
    fn day_report_renders_local_hour_and_pop() {
        let text = render_day(&bundle(), "Kyiv").expect("render");
        assert!(text.starts_with("Weather in Kyiv in next 24 hours:\n"));
        // 22:13:20 UTC + 2h offset renders as a 00:00 local label
        assert!(text.contains("00:00 Rain 🌧"));
        assert!(text.contains("🌡 5℃ (feels like 1℃). ☂50%"));
    }

    #[test]
    fn day_report_caps_at_24_samples() {
        let mut b = bundle();
        b.hourly = (0..48_i64)
            .map(|i| {
                let mut h = hourly_sample(0.1);
                h.timestamp += i * 3600;
                h
            })
            .collect();
        let text = render_day(&b, "Kyiv").expect("render");
        assert_eq!(text.matches("🌡").count(), 24);
    }

    #[test]
    fn week_report_renders_date_and_day_night_pairs() {
        let text = render_week(&bundle(), "Kyiv").expect("render");
        assert!(text.starts_with("Weather in Kyiv in next 7 days:\n"));
        assert!(text.contains("• 2023-11-15, Wed, Snow ❄"));
        assert!(text.contains("🌞 at day 🌡 7℃ (feels like 6℃)"));
        assert!(text.contains("🌜 at night 🌡 3℃ (feels like 0℃)"));
        assert!(text.contains("☔ 90%"));
    }

    #[test]
    fn week_report_fails_loudly_on_unknown_icon() {
        let mut b = bundle();
        b.daily[0].icon = String::new();
        assert!(matches!(
            render_week(&b, "Kyiv"),
            Err(ReportError::MissingIconGlyph(_))
        ));
    }

    #[test]
    fn icon_glyph_table_is_pinned() {
        let expected = [
            ("01d", "☀"),
            ("01n", "🌙"),
            ("02d", "🌤"),
            ("02n", "🌤"),
            ("03d", "🌥"),
            ("03n", "🌥"),
            ("04d", "☁"),
            ("04n", "☁"),
            ("09d", "🌧"),
            ("09n", "🌧"),
            ("10d", "🌧"),
            ("10n", "🌧"),
            ("11d", "⛈"),
            ("11n", "⛈"),
            ("13d", "❄"),
            ("13n", "❄"),
            ("50d", "🌫"),
            ("50n", "🌫"),
        ];
        for (code, glyph) in expected {
            assert_eq!(icon_glyph(code).unwrap(), glyph, "icon {code}");
        }
    }

    #[test]
    fn day_and_night_icon_variants_collapse_except_clear_sky() {
        for prefix in ["02", "03", "04", "09", "10", "11", "13", "50"] {
            assert_eq!(
                icon_glyph(&format!("{prefix}d")).unwrap(),
                icon_glyph(&format!("{prefix}n")).unwrap(),
                "icon group {prefix}"
            );
        }
        assert_ne!(icon_glyph("01d").unwrap(), icon_glyph("01n").unwrap());
    }
}
