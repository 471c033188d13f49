use thiserror::Error;

/// Errors raised while validating measurements or parsing club names.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShotError {
    #[error("invalid ball speed {0} mph (must be finite and positive)")]
    InvalidBallSpeed(f64),

    #[error("invalid club speed {0} mph (must be finite and positive)")]
    InvalidClubSpeed(f64),

    #[error("unknown club: {0}")]
    UnknownClub(String),
}

pub type Result<T> = std::result::Result<T, ShotError>;

pub(crate) fn validate_ball_speed(mph: f64) -> Result<f64> {
    if mph.is_finite() && mph > 0.0 {
        Ok(mph)
    } else {
        Err(ShotError::InvalidBallSpeed(mph))
    }
}

pub(crate) fn validate_club_speed(mph: f64) -> Result<f64> {
    if mph.is_finite() && mph > 0.0 {
        Ok(mph)
    } else {
        Err(ShotError::InvalidClubSpeed(mph))
    }
}
