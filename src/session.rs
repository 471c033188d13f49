//! Session history and on-demand statistics.
//!
//! A [`SessionAggregator`] owns the shots recorded since the last clear
//! plus the club used for shots that don't name one. It does no locking;
//! callers feeding it from several threads must serialize mutations.

use chrono::Utc;
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::shot::{ClubType, Shot, ShotReport};

/// Summary of the current session. Keys are fixed; `None` fields
/// serialize as `null` and mean "never measured", not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub shot_count: usize,
    pub avg_ball_speed: f64,
    pub max_ball_speed: f64,
    pub min_ball_speed: f64,
    pub avg_club_speed: Option<f64>,
    pub avg_smash_factor: Option<f64>,
    pub avg_carry_est: f64,
}

impl SessionStats {
    fn empty() -> Self {
        Self {
            shot_count: 0,
            avg_ball_speed: 0.0,
            max_ball_speed: 0.0,
            min_ball_speed: 0.0,
            avg_club_speed: None,
            avg_smash_factor: None,
            avg_carry_est: 0.0,
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Shots:          {}", self.shot_count)?;
        writeln!(
            f,
            "  Ball Speed:     {:.1} mph avg ({:.1}-{:.1})",
            self.avg_ball_speed, self.min_ball_speed, self.max_ball_speed
        )?;
        if let Some(club) = self.avg_club_speed {
            writeln!(f, "  Club Speed:     {:.1} mph avg", club)?;
        }
        if let Some(smash) = self.avg_smash_factor {
            writeln!(f, "  Smash Factor:   {:.2} avg", smash)?;
        }
        write!(f, "  Est. Carry:     {:.0} yards avg", self.avg_carry_est)
    }
}

/// Snapshot handed to display collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub current_club: ClubType,
    pub stats: SessionStats,
    pub shots: Vec<ShotReport>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    shots: Vec<Shot>,
    current_club: ClubType,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_club(club: ClubType) -> Self {
        Self {
            shots: Vec::new(),
            current_club: club,
        }
    }

    pub fn current_club(&self) -> ClubType {
        self.current_club
    }

    /// Change the default club for future shots. Recorded shots keep theirs.
    pub fn set_club(&mut self, club: ClubType) {
        log::debug!("[CLUB] {} -> {}", self.current_club, club);
        self.current_club = club;
    }

    /// Validate a reading and append it to the history.
    ///
    /// `club` falls back to the current club. A rejected reading leaves
    /// the session unchanged.
    pub fn record_shot(
        &mut self,
        ball_speed_mph: f64,
        club_speed_mph: Option<f64>,
        club: Option<ClubType>,
    ) -> Result<Shot> {
        let club = club.unwrap_or(self.current_club);
        let shot = Shot::new(ball_speed_mph, club_speed_mph, club, Utc::now()).map_err(|e| {
            log::warn!("[REJECTED] {}", e);
            e
        })?;

        self.shots.push(shot);

        log::debug!(
            "[SHOT] #{} Ball={:.1} mph, Club={}, {} -> {:.0} yd",
            self.shots.len(),
            shot.ball_speed_mph(),
            shot.club_speed_mph()
                .map(|s| format!("{:.1} mph", s))
                .unwrap_or_else(|| "N/A".to_string()),
            shot.club(),
            shot.estimated_carry_yards()
        );

        Ok(shot)
    }

    /// Recompute statistics over the full history.
    pub fn get_session_stats(&self) -> SessionStats {
        if self.shots.is_empty() {
            return SessionStats::empty();
        }

        let ball_speeds = || self.shots.iter().map(Shot::ball_speed_mph);

        SessionStats {
            shot_count: self.shots.len(),
            avg_ball_speed: mean(ball_speeds()).unwrap_or(0.0),
            max_ball_speed: ball_speeds().fold(f64::MIN, f64::max),
            min_ball_speed: ball_speeds().fold(f64::MAX, f64::min),
            avg_club_speed: mean(self.shots.iter().filter_map(Shot::club_speed_mph)),
            avg_smash_factor: mean(self.shots.iter().filter_map(Shot::smash_factor)),
            avg_carry_est: mean(self.shots.iter().map(Shot::estimated_carry_yards)).unwrap_or(0.0),
        }
    }

    pub fn clear_session(&mut self) {
        log::info!("[SESSION] Cleared {} shots", self.shots.len());
        self.shots.clear();
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn last_shot(&self) -> Option<&Shot> {
        self.shots.last()
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn session_state(&self) -> SessionState {
        SessionState {
            current_club: self.current_club,
            stats: self.get_session_stats(),
            shots: self.shots.iter().map(Shot::report).collect(),
        }
    }
}
