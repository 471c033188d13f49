use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{validate_ball_speed, validate_club_speed, Result, ShotError};

/// Miles per hour to meters per second.
pub const MPH_TO_MS: f64 = 0.44704;

/// Half-width of the carry confidence band, as a fraction of the estimate.
pub const CARRY_UNCERTAINTY: f64 = 0.10;

/// Club categories, longest carry first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubType {
    #[default]
    #[serde(rename = "driver")]
    Driver,
    #[serde(rename = "3-wood")]
    Wood3,
    #[serde(rename = "5-wood")]
    Wood5,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "3-iron")]
    Iron3,
    #[serde(rename = "4-iron")]
    Iron4,
    #[serde(rename = "5-iron")]
    Iron5,
    #[serde(rename = "6-iron")]
    Iron6,
    #[serde(rename = "7-iron")]
    Iron7,
    #[serde(rename = "8-iron")]
    Iron8,
    #[serde(rename = "9-iron")]
    Iron9,
    #[serde(rename = "pw")]
    Pw,
}

impl ClubType {
    pub const ALL: [ClubType; 12] = [
        ClubType::Driver,
        ClubType::Wood3,
        ClubType::Wood5,
        ClubType::Hybrid,
        ClubType::Iron3,
        ClubType::Iron4,
        ClubType::Iron5,
        ClubType::Iron6,
        ClubType::Iron7,
        ClubType::Iron8,
        ClubType::Iron9,
        ClubType::Pw,
    ];

    /// Carry relative to a driver struck at the same ball speed.
    pub const fn distance_factor(self) -> f64 {
        match self {
            ClubType::Driver => 1.0,
            ClubType::Wood3 => 0.96,
            ClubType::Wood5 => 0.93,
            ClubType::Hybrid => 0.90,
            ClubType::Iron3 => 0.87,
            ClubType::Iron4 => 0.85,
            ClubType::Iron5 => 0.82,
            ClubType::Iron6 => 0.79,
            ClubType::Iron7 => 0.76,
            ClubType::Iron8 => 0.73,
            ClubType::Iron9 => 0.70,
            ClubType::Pw => 0.67,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            ClubType::Driver => "driver",
            ClubType::Wood3 => "3-wood",
            ClubType::Wood5 => "5-wood",
            ClubType::Hybrid => "hybrid",
            ClubType::Iron3 => "3-iron",
            ClubType::Iron4 => "4-iron",
            ClubType::Iron5 => "5-iron",
            ClubType::Iron6 => "6-iron",
            ClubType::Iron7 => "7-iron",
            ClubType::Iron8 => "8-iron",
            ClubType::Iron9 => "9-iron",
            ClubType::Pw => "pw",
        }
    }

    /// Short label as shown on the club picker.
    pub const fn label(self) -> &'static str {
        match self {
            ClubType::Driver => "DR",
            ClubType::Wood3 => "3W",
            ClubType::Wood5 => "5W",
            ClubType::Hybrid => "HY",
            ClubType::Iron3 => "3i",
            ClubType::Iron4 => "4i",
            ClubType::Iron5 => "5i",
            ClubType::Iron6 => "6i",
            ClubType::Iron7 => "7i",
            ClubType::Iron8 => "8i",
            ClubType::Iron9 => "9i",
            ClubType::Pw => "PW",
        }
    }
}

impl fmt::Display for ClubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ClubType {
    type Err = ShotError;

    /// Accepts either the identifier (`7-iron`) or the short label (`7i`).
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        ClubType::ALL
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ShotError::UnknownClub(s.to_string()))
    }
}

/// Driver ball speed to carry distance, assuming optimal launch conditions
/// (10-14° launch angle, spin appropriate for the ball speed).
/// Format: (ball_speed_mph, carry_yards_low, carry_yards_high)
const DRIVER_TABLE: &[(f64, f64, f64)] = &[
    (100.0, 130.0, 142.0),
    (110.0, 157.0, 170.0),
    (120.0, 183.0, 197.0),
    (130.0, 207.0, 223.0),
    (140.0, 231.0, 249.0),
    (150.0, 254.0, 275.0),
    (160.0, 276.0, 301.0),
    (170.0, 298.0, 325.0),
    (180.0, 320.0, 349.0),
    (190.0, 342.0, 372.0),
    (200.0, 360.0, 389.0),
    (210.0, 383.0, 408.0),
];

/// Yards gained per mph beyond the top of the table.
const HIGH_SPEED_SLOPE: f64 = 1.8;

fn midpoint(row: (f64, f64, f64)) -> f64 {
    (row.1 + row.2) / 2.0
}

/// Driver carry for an already validated ball speed.
fn driver_carry(ball_speed_mph: f64) -> f64 {
    let first = DRIVER_TABLE[0];
    let last = DRIVER_TABLE[DRIVER_TABLE.len() - 1];

    if ball_speed_mph <= first.0 {
        // Linear through the origin keeps slow shots small but positive
        return midpoint(first) * ball_speed_mph / first.0;
    }
    if ball_speed_mph >= last.0 {
        return midpoint(last) + (ball_speed_mph - last.0) * HIGH_SPEED_SLOPE;
    }

    // Table rows are sorted by speed, so exactly one window brackets the input
    DRIVER_TABLE
        .windows(2)
        .find(|w| w[0].0 <= ball_speed_mph && ball_speed_mph < w[1].0)
        .map(|w| {
            let (low, high) = (w[0], w[1]);
            let t = (ball_speed_mph - low.0) / (high.0 - low.0);
            midpoint(low) + t * (midpoint(high) - midpoint(low))
        })
        .unwrap_or_else(|| midpoint(last))
}

fn carry_for(ball_speed_mph: f64, club: ClubType) -> f64 {
    driver_carry(ball_speed_mph) * club.distance_factor()
}

/// Estimate carry distance (yards) from ball speed and club.
///
/// This is an empirical curve fit over TrackMan-style driver data scaled
/// by the club's distance factor; spin, launch angle and air density are
/// not modeled.
pub fn estimate_carry(ball_speed_mph: f64, club: ClubType) -> Result<f64> {
    let speed = validate_ball_speed(ball_speed_mph)?;
    Ok(carry_for(speed, club))
}

/// One recorded swing. Immutable once built; all derived values are
/// computed on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    ball_speed_mph: f64,
    club_speed_mph: Option<f64>,
    club: ClubType,
    timestamp: DateTime<Utc>,
}

impl Shot {
    pub fn new(
        ball_speed_mph: f64,
        club_speed_mph: Option<f64>,
        club: ClubType,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let ball_speed_mph = validate_ball_speed(ball_speed_mph)?;
        let club_speed_mph = club_speed_mph.map(validate_club_speed).transpose()?;
        Ok(Self {
            ball_speed_mph,
            club_speed_mph,
            club,
            timestamp,
        })
    }

    pub fn ball_speed_mph(&self) -> f64 {
        self.ball_speed_mph
    }

    pub fn club_speed_mph(&self) -> Option<f64> {
        self.club_speed_mph
    }

    pub fn club(&self) -> ClubType {
        self.club
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn ball_speed_ms(&self) -> f64 {
        self.ball_speed_mph * MPH_TO_MS
    }

    pub fn club_speed_ms(&self) -> Option<f64> {
        self.club_speed_mph.map(|s| s * MPH_TO_MS)
    }

    pub fn smash_factor(&self) -> Option<f64> {
        self.club_speed_mph.map(|club| self.ball_speed_mph / club)
    }

    pub fn estimated_carry_yards(&self) -> f64 {
        carry_for(self.ball_speed_mph, self.club)
    }

    pub fn estimated_carry_range(&self) -> (f64, f64) {
        let base = self.estimated_carry_yards();
        // ±10% uncertainty without launch angle/spin data
        (base * (1.0 - CARRY_UNCERTAINTY), base * (1.0 + CARRY_UNCERTAINTY))
    }

    pub fn report(&self) -> ShotReport {
        let (low, high) = self.estimated_carry_range();
        ShotReport {
            ball_speed_mph: self.ball_speed_mph,
            club_speed_mph: self.club_speed_mph,
            smash_factor: self.smash_factor(),
            estimated_carry_yards: self.estimated_carry_yards(),
            carry_range: [low, high],
            club: self.club,
            timestamp: self.timestamp,
        }
    }
}

/// Flattened, serializable view of a [`Shot`] for display collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotReport {
    pub ball_speed_mph: f64,
    pub club_speed_mph: Option<f64>,
    pub smash_factor: Option<f64>,
    pub estimated_carry_yards: f64,
    pub carry_range: [f64; 2],
    pub club: ClubType,
    pub timestamp: DateTime<Utc>,
}
