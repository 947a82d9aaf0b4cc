//! Catch log model: sample catches, filters, and the new-catch form.
//!
//! All catches are fixed sample data. Submitting the form validates it and
//! logs the entry; nothing is stored.

#[cfg(test)]
#[path = "catches_test.rs"]
mod catches_test;

use crate::error::ValidationError;

/// A logged catch.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchEntry {
    pub id: u32,
    pub species: String,
    /// Weight in pounds.
    pub weight_lbs: f64,
    /// Length in inches.
    pub length_in: f64,
    pub bait: String,
    pub location: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Local time, `HH:MM`.
    pub time: String,
    pub weather: String,
    pub notes: String,
    pub photo_url: Option<String>,
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u32,
    species: &str,
    weight_lbs: f64,
    length_in: f64,
    bait: &str,
    location: &str,
    date: &str,
    time: &str,
    weather: &str,
    notes: &str,
    photo: &str,
) -> CatchEntry {
    CatchEntry {
        id,
        species: species.to_owned(),
        weight_lbs,
        length_in,
        bait: bait.to_owned(),
        location: location.to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
        weather: weather.to_owned(),
        notes: notes.to_owned(),
        photo_url: Some(format!("https://images.unsplash.com/{photo}?w=300&h=200&fit=crop&crop=center")),
    }
}

/// Sample catches, newest first.
#[must_use]
pub fn sample_catches() -> Vec<CatchEntry> {
    vec![
        sample(
            1,
            "Largemouth Bass",
            3.2,
            18.5,
            "Spinnerbait",
            "Lake Michigan",
            "2024-01-15",
            "07:30",
            "Partly Cloudy",
            "Great fight! Caught near fallen log structure.",
            "photo-1544551763-46a013bb70d5",
        ),
        sample(
            2,
            "Rainbow Trout",
            1.8,
            14.2,
            "PowerBait",
            "Pine Creek",
            "2024-01-12",
            "06:15",
            "Overcast",
            "Beautiful colors on this one. Released after photo.",
            "photo-1571019613454-1cb2f99b2d8b",
        ),
        sample(
            3,
            "Northern Pike",
            4.5,
            22.0,
            "Live Minnow",
            "Cedar Lake",
            "2024-01-10",
            "16:45",
            "Sunny",
            "Aggressive strike! Had to use steel leader.",
            "photo-1559827260-dc66d52bef19",
        ),
    ]
}

/// Options offered by the species filter.
pub const SPECIES_FILTERS: [&str; 3] = ["Bass", "Trout", "Pike"];
/// Options offered by the location filter.
pub const LOCATION_FILTERS: [&str; 3] = ["Lake Michigan", "Pine Creek", "Cedar Lake"];

/// List/grid presentation toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatchView {
    #[default]
    List,
    Grid,
}

/// Active filters. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatchFilter {
    pub species: Option<String>,
    pub location: Option<String>,
}

impl CatchFilter {
    /// Species match on a case-insensitive substring ("Bass" matches
    /// "Largemouth Bass"); location must match exactly.
    #[must_use]
    pub fn matches(&self, entry: &CatchEntry) -> bool {
        let species_ok = self
            .species
            .as_deref()
            .map_or(true, |s| entry.species.to_lowercase().contains(&s.to_lowercase()));
        let location_ok = self.location.as_deref().map_or(true, |l| entry.location == l);
        species_ok && location_ok
    }

    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [CatchEntry]) -> Vec<&'a CatchEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Summary figures shown above the catch list.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchStats {
    pub total: usize,
    pub species: usize,
    pub locations: usize,
    pub heaviest_lbs: Option<f64>,
}

#[must_use]
pub fn catch_stats(entries: &[CatchEntry]) -> CatchStats {
    let mut species: Vec<&str> = entries.iter().map(|e| e.species.as_str()).collect();
    species.sort_unstable();
    species.dedup();
    let mut locations: Vec<&str> = entries.iter().map(|e| e.location.as_str()).collect();
    locations.sort_unstable();
    locations.dedup();
    CatchStats {
        total: entries.len(),
        species: species.len(),
        locations: locations.len(),
        heaviest_lbs: entries.iter().map(|e| e.weight_lbs).reduce(f64::max),
    }
}

/// Raw input of the "log new catch" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatchDraft {
    pub species: String,
    pub weight: String,
    pub length: String,
    pub bait: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub weather: String,
    pub notes: String,
}

fn parse_measure(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ValidationError::InvalidNumber(field)),
    }
}

impl CatchDraft {
    /// Turn the form into an entry.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` when species, location, or date
    /// is blank and `ValidationError::InvalidNumber` when a measurement is not
    /// a non-negative number.
    pub fn validate(&self, id: u32) -> Result<CatchEntry, ValidationError> {
        let species = self.species.trim();
        if species.is_empty() {
            return Err(ValidationError::MissingField("species"));
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::MissingField("location"));
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingField("date"));
        }
        Ok(CatchEntry {
            id,
            species: species.to_owned(),
            weight_lbs: parse_measure(&self.weight, "weight")?,
            length_in: parse_measure(&self.length, "length")?,
            bait: self.bait.trim().to_owned(),
            location: location.to_owned(),
            date: self.date.trim().to_owned(),
            time: self.time.trim().to_owned(),
            weather: self.weather.trim().to_owned(),
            notes: self.notes.trim().to_owned(),
            photo_url: None,
        })
    }

    /// Validate and log the catch.
    ///
    /// # Errors
    ///
    /// Propagates the `ValidationError` from `validate`.
    pub fn submit(&self, id: u32) -> Result<CatchEntry, ValidationError> {
        let entry = self.validate(id)?;
        log::info!(
            "catch logged: {} ({} lbs) at {} on {}",
            entry.species,
            entry.weight_lbs,
            entry.location,
            entry.date
        );
        Ok(entry)
    }
}

/// The `limit` most recent entries, newest first.
#[must_use]
pub fn recent_catches(entries: &[CatchEntry], limit: usize) -> Vec<&CatchEntry> {
    let mut sorted: Vec<&CatchEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| (&b.date, &b.time).cmp(&(&a.date, &a.time)));
    sorted.truncate(limit);
    sorted
}

/// `"2024-01-15"` -> `"Jan 15"`. Unparseable input is returned unchanged.
#[must_use]
pub fn short_date(iso: &str) -> String {
    const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
    let mut parts = iso.splitn(3, '-');
    let (Some(_), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    match (month.parse::<usize>(), day.parse::<u32>()) {
        (Ok(m @ 1..=12), Ok(d)) => format!("{} {d}", MONTHS[m - 1]),
        _ => iso.to_owned(),
    }
}
