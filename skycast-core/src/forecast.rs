//! Forecast normalization and daily aggregation.
//!
//! `normalize` turns a provider's raw sample series into location-local
//! records; `aggregate` reduces those records to one summary per local
//! calendar date. Both are pure over their inputs and tolerate empty
//! batches.

use chrono::{FixedOffset, Offset, Utc};
use tracing::warn;

use crate::classify::{TemperatureBand, icon_for_condition_code};
use crate::error::SkycastError;
use crate::model::{DailySummary, ForecastSample, NormalizedRecord};

/// Converts raw samples to normalized records, preserving input order.
///
/// Samples missing a required field are skipped with a warning, never fatal.
/// Local date/time strings come from adding `utc_offset_seconds` to the
/// absolute timestamp; the host timezone is never consulted.
pub fn normalize(samples: &[ForecastSample], utc_offset_seconds: i32) -> Vec<NormalizedRecord> {
    let offset = local_offset(utc_offset_seconds);

    samples
        .iter()
        .filter_map(|sample| match normalize_sample(sample, offset) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("skipping forecast sample: {err}");
                None
            }
        })
        .collect()
}

fn local_offset(utc_offset_seconds: i32) -> FixedOffset {
    // Out-of-range offsets (beyond ±24h) degrade to UTC rather than failing
    // the whole batch.
    FixedOffset::east_opt(utc_offset_seconds).unwrap_or_else(|| Utc.fix())
}

fn normalize_sample(
    sample: &ForecastSample,
    offset: FixedOffset,
) -> Result<NormalizedRecord, SkycastError> {
    let temperature = sample.temperature.ok_or_else(|| {
        SkycastError::MalformedRecord(format!("sample at {} has no temperature", sample.timestamp))
    })?;
    let humidity = sample.humidity.ok_or_else(|| {
        SkycastError::MalformedRecord(format!("sample at {} has no humidity", sample.timestamp))
    })?;

    let local = sample.timestamp.with_timezone(&offset);

    Ok(NormalizedRecord {
        local_date: local.format("%Y-%m-%d").to_string(),
        local_time: local.format("%H:%M").to_string(),
        temperature,
        humidity,
        condition_description: sample.condition_description.clone(),
        condition_icon: icon_for_condition_code(&sample.condition_code).to_string(),
        temperature_band: TemperatureBand::for_celsius(temperature),
    })
}

/// Groups records by local date and produces one summary per date, ascending.
///
/// Grouping is by string equality on `local_date` exactly as the normalizer
/// produced it. Means are rounded to 1 decimal, half away from zero.
pub fn aggregate(records: &[NormalizedRecord]) -> Vec<DailySummary> {
    let mut dates: Vec<&str> = Vec::new();
    for record in records {
        if !dates.contains(&record.local_date.as_str()) {
            dates.push(&record.local_date);
        }
    }
    dates.sort_unstable();

    dates
        .into_iter()
        .map(|date| {
            let day: Vec<&NormalizedRecord> =
                records.iter().filter(|r| r.local_date == date).collect();
            summarize_day(date, &day)
        })
        .collect()
}

/// `day` is non-empty by construction: every date came from some record.
fn summarize_day(date: &str, day: &[&NormalizedRecord]) -> DailySummary {
    let mut min_temp = f64::INFINITY;
    let mut max_temp = f64::NEG_INFINITY;
    let mut temp_sum = 0.0;
    let mut humidity_sum = 0.0;

    for record in day {
        min_temp = min_temp.min(record.temperature);
        max_temp = max_temp.max(record.temperature);
        temp_sum += record.temperature;
        humidity_sum += f64::from(record.humidity);
    }

    let count = day.len() as f64;
    let (condition, condition_icon) = representative_condition(day);

    DailySummary {
        date: date.to_string(),
        min_temp,
        max_temp,
        mean_temp: round1(temp_sum / count),
        mean_humidity: round1(humidity_sum / count),
        condition,
        condition_icon,
    }
}

/// Mode of the day's condition descriptions. Ties are broken by first
/// chronological occurrence, so the result never depends on hash or
/// iteration order.
fn representative_condition(day: &[&NormalizedRecord]) -> (String, String) {
    // (description, icon, occurrences), in first-occurrence order.
    let mut counts: Vec<(&str, &str, usize)> = Vec::new();
    for record in day {
        match counts
            .iter_mut()
            .find(|(desc, _, _)| *desc == record.condition_description)
        {
            Some(entry) => entry.2 += 1,
            None => counts.push((&record.condition_description, &record.condition_icon, 1)),
        }
    }

    // First strictly-greater wins, so equal counts keep the earliest entry.
    let mut best = counts[0];
    for entry in &counts[1..] {
        if entry.2 > best.2 {
            best = *entry;
        }
    }

    (best.0.to_string(), best.1.to_string())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
