//! Plain-text rendering of core data for the terminal.

use skycast_core::{
    CurrentConditions, DailySummary, NewsItem, NormalizedRecord, season_for_celsius,
    uv_risk_for_celsius,
};

pub fn current_conditions(current: &CurrentConditions) -> String {
    let (season, climate) = season_for_celsius(current.temperature_c);
    let uv = uv_risk_for_celsius(current.temperature_c);

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} in {}\n",
        current.condition_icon, current.condition_description, current.location_name
    ));
    out.push_str(&format!(
        "Temperature: {:.1}°C (feels like {:.1}°C)\n",
        current.temperature_c, current.feels_like_c
    ));
    out.push_str(&format!("Humidity:    {}%\n", current.humidity_pct));
    out.push_str(&format!("Wind:        {:.1} m/s\n", current.wind_speed_mps));
    out.push_str(&format!("Pressure:    {:.0} hPa\n", current.pressure_hpa));
    out.push_str(&format!("Visibility:  {:.1} km\n", current.visibility_km));
    out.push_str(&format!("Rain (1h):   {:.1} mm\n", current.rain_1h_mm));
    out.push_str(&format!(
        "Sunrise:     {}   Sunset: {}\n",
        current.sunrise_local, current.sunset_local
    ));
    out.push_str(&format!("Season:      {season} — {climate}\n"));
    out.push_str(&format!("UV risk:     {uv}\n"));
    out
}

pub fn forecast_table(records: &[NormalizedRecord]) -> String {
    if records.is_empty() {
        return "No forecast data available.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("| Date       | Time  | Temp °C | Humidity | Band | Conditions |\n");
    for record in records {
        out.push_str(&format!(
            "| {} | {} | {:>7.1} | {:>7}% | {:<4} | {} {} |\n",
            record.local_date,
            record.local_time,
            record.temperature,
            record.humidity,
            record.temperature_band.as_str(),
            record.condition_icon,
            record.condition_description,
        ));
    }
    out
}

pub fn daily_summaries(summaries: &[DailySummary]) -> String {
    if summaries.is_empty() {
        return "No daily summaries available.\n".to_string();
    }

    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!(
            "{}  {} {}  min {:.1}°C / max {:.1}°C  avg {:.1}°C  humidity {:.1}%\n",
            summary.date,
            summary.condition_icon,
            summary.condition,
            summary.min_temp,
            summary.max_temp,
            summary.mean_temp,
            summary.mean_humidity,
        ));
    }
    out
}

pub fn headlines(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return "No headlines available.\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{} {} ({})\n", item.icon, item.title, item.source));
        out.push_str(&format!("   {}\n", item.description));
        out.push_str(&format!("   {}\n", item.url));
    }
    out
}
