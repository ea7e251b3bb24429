use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::TitleError;
use crate::model::calendar::CalendarRecord;
use crate::model::embed::{Embed, EmbedField, EmbedFooter};

pub const COLOR_GOLD: u32 = 16766720;
pub const COLOR_PURPLE: u32 = 8388736;
pub const COLOR_RED: u32 = 16711680;
pub const COLOR_DEFAULT: u32 = 5814783;

pub const FALLBACK_TITLE: &str = "Orthodox Calendar - Today";

const FEASTS_FIELD: &str = "🎉 Feasts";
const SAINTS_FIELD: &str = "✨ Commemorations";
const READINGS_FIELD: &str = "📖 Scripture Readings";

const MAX_SAINTS: usize = 5;
const MAX_READINGS: usize = 6;

/// Long-form date plus the first liturgical title, e.g. "April 05, 2025 - Bright Monday".
/// Never fails: malformed date parts degrade to [`FALLBACK_TITLE`].
pub fn format_date_title(record: &CalendarRecord) -> String {
    match try_format_date_title(record) {
        Ok(title) => title,
        Err(e) => {
            warn!(error = %e, "Error formatting date title; using fallback");
            FALLBACK_TITLE.to_string()
        }
    }
}

fn try_format_date_title(record: &CalendarRecord) -> Result<String, TitleError> {
    let date_str = match (record.year(), record.month(), record.day()) {
        (Some(year), Some(month), Some(day))
            if is_present(year) && is_present(month) && is_present(day) =>
        {
            let year = date_part("year", year)?;
            let month = date_part("month", month)?;
            let day = date_part("day", day)?;
            calendar_date(year, month, day)?
                .format("%B %d, %Y")
                .to_string()
        }
        _ => "Today".to_string(),
    };

    let suffix = match record.first_title() {
        None => String::new(),
        Some(Value::String(title)) => format!(" - {}", title),
        Some(other) => return Err(TitleError::NonStringTitle(other.to_string())),
    };

    Ok(format!("{}{}", date_str, suffix))
}

/// Null, false, zero and empty values leave the date unset.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// A present date part must be an integer or an integral string.
fn date_part(part: &'static str, value: &Value) -> Result<i64, TitleError> {
    let invalid = || TitleError::InvalidPart { part, value: value.to_string() };
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                _ => Err(invalid()),
            },
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn calendar_date(year: i64, month: i64, day: i64) -> Result<NaiveDate, TitleError> {
    let invalid = || TitleError::InvalidDate { year, month, day };
    if year < 1 {
        return Err(invalid());
    }
    let y = i32::try_from(year).map_err(|_| invalid())?;
    let m = u32::try_from(month).map_err(|_| invalid())?;
    let d = u32::try_from(day).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

/// Fasting summary used as the embed description.
pub fn format_fast_info(record: &CalendarRecord) -> String {
    if record.fast_level() == 0 {
        return "No fasting".to_string();
    }
    match (record.fast_level_desc(), record.fast_exception_desc()) {
        (Some(desc), Some(exception)) => format!("{} — {}", desc, exception),
        (Some(desc), None) => desc.to_string(),
        (None, _) => "Fasting day".to_string(),
    }
}

pub fn format_feasts(record: &CalendarRecord) -> Option<String> {
    let feasts = record.feasts();
    if feasts.is_empty() {
        return None;
    }
    Some(feasts.join(", "))
}

/// First five saints, with a count of the rest.
pub fn format_saints(record: &CalendarRecord) -> Option<String> {
    let saints = record.saints();
    if saints.is_empty() {
        return None;
    }
    let shown = &saints[..saints.len().min(MAX_SAINTS)];
    let mut out = shown.join(" • ");
    if saints.len() > MAX_SAINTS {
        out.push_str(&format!(" • and {} more...", saints.len() - MAX_SAINTS));
    }
    Some(out)
}

/// Scripture references (the `display` string of each reading), not the passage text.
pub fn format_readings(record: &CalendarRecord) -> Option<String> {
    let readings = record.readings();
    let refs: Vec<&str> = readings
        .iter()
        .take(MAX_READINGS)
        .filter_map(|r| r.get("display").and_then(Value::as_str))
        .collect();
    if refs.is_empty() {
        return None;
    }
    let mut out = refs.join(" • ");
    if readings.len() > MAX_READINGS {
        out.push_str(" • ...");
    }
    Some(out)
}

/// Embed color; first match wins: feasts, strict fast, martyrs, default.
pub fn determine_color(record: &CalendarRecord) -> u32 {
    if !record.feasts().is_empty() {
        return COLOR_GOLD;
    }
    if record.fast_level() >= 3 {
        return COLOR_PURPLE;
    }
    let has_martyr = record
        .saints()
        .iter()
        .any(|s| s.to_lowercase().contains("martyr"));
    if has_martyr {
        return COLOR_RED;
    }
    COLOR_DEFAULT
}

/// Assemble the full notification for one calendar day.
/// `now` becomes the embed timestamp; pass a fixed time in tests.
pub fn build_embed(record: &CalendarRecord, now: DateTime<Utc>) -> Embed {
    let fast_info = format_fast_info(record);

    let sections = [
        (FEASTS_FIELD, format_feasts(record)),
        (SAINTS_FIELD, format_saints(record)),
        (READINGS_FIELD, format_readings(record)),
    ];
    let fields: Vec<EmbedField> = sections
        .into_iter()
        .filter_map(|(name, value)| {
            value.map(|value| EmbedField { name: name.to_string(), value, inline: false })
        })
        .collect();

    let embed = Embed {
        title: format_date_title(record),
        color: determine_color(record),
        description: (!fast_info.is_empty()).then_some(fast_info),
        fields,
        footer: EmbedFooter::default(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    debug!(title = %embed.title, color = embed.color, fields = embed.fields.len(), "Built calendar embed");
    embed
}
