//! NeoWs feed document types.
//!
//! Only the fields the orrery reads are declared; the rest of the feed is
//! ignored. Fields shown as row details are optional so partial or older
//! documents still parse.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level feed response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedResponse {
    /// Records keyed by `YYYY-MM-DD` close-approach date.
    pub near_earth_objects: BTreeMap<String, Vec<NeoRecord>>,
}

/// One near-Earth object as reported by the feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NeoRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: Option<String>,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

/// A single close approach. Numeric values arrive as decimal strings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    #[serde(default)]
    pub orbiting_body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_hour: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

impl NeoRecord {
    /// A record with a single close approach, as the feed would report it.
    pub fn new(
        name: impl Into<String>,
        miss_distance_km: impl Into<String>,
        velocity_kmh: impl Into<String>,
        hazardous: bool,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            nasa_jpl_url: None,
            absolute_magnitude_h: None,
            is_potentially_hazardous_asteroid: hazardous,
            close_approach_data: vec![CloseApproach {
                close_approach_date: None,
                relative_velocity: RelativeVelocity {
                    kilometers_per_hour: velocity_kmh.into(),
                },
                miss_distance: MissDistance {
                    kilometers: miss_distance_km.into(),
                },
                orbiting_body: None,
            }],
        }
    }

    /// The first close approach, which is the one for the feed date.
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }

    /// Miss distance of the first approach in kilometres.
    pub fn miss_distance_km(&self) -> Option<f64> {
        parse_decimal(&self.first_approach()?.miss_distance.kilometers)
    }

    /// Relative velocity of the first approach in km/h.
    pub fn velocity_kmh(&self) -> Option<f64> {
        parse_decimal(&self.first_approach()?.relative_velocity.kilometers_per_hour)
    }

    /// Secondary facts for a row tooltip, one per line. Empty when the feed
    /// carried none of them.
    pub fn details(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(id) = &self.id {
            lines.push(format!("SPK-ID {id}"));
        }
        if let Some(h) = self.absolute_magnitude_h {
            lines.push(format!("Absolute magnitude H {h:.1}"));
        }
        if let Some(approach) = self.first_approach() {
            match (&approach.close_approach_date, &approach.orbiting_body) {
                (Some(date), Some(body)) => lines.push(format!("Closest to {body} on {date}")),
                (Some(date), None) => lines.push(format!("Closest approach on {date}")),
                (None, Some(body)) => lines.push(format!("Orbiting body {body}")),
                (None, None) => {}
            }
        }
        if let Some(url) = &self.nasa_jpl_url {
            lines.push(url.clone());
        }
        lines
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
