use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A (ball speed, club speed) pair as a sensor would hand it over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedReading {
    pub ball_speed_mph: f64,
    pub club_speed_mph: Option<f64>,
}

/// Synthetic reading source for demos and tests without hardware.
pub struct ShotSimulator {
    rng: StdRng,
    shot_number: u32,
    with_club_speed: bool,
}

impl ShotSimulator {
    pub fn new(seed: Option<u64>, with_club_speed: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            shot_number: 0,
            with_club_speed,
        }
    }

    pub fn next_reading(&mut self) -> SpeedReading {
        self.shot_number += 1;

        let ball_speed = if self.shot_number % 5 == 0 {
            // Every 5th shot is a "big hit"
            self.rng.gen_range(150.0..180.0)
        } else if self.shot_number % 3 == 0 {
            // Every 3rd shot is a "weak hit"
            self.rng.gen_range(80.0..110.0)
        } else {
            self.rng.gen_range(110.0..150.0)
        };

        let club_speed = if self.with_club_speed {
            let smash_factor = self.rng.gen_range(1.35..1.55);
            Some(ball_speed / smash_factor)
        } else {
            None
        };

        log::debug!(
            "[SIM] Shot #{}: ball {:.1} mph, club {:?}",
            self.shot_number,
            ball_speed,
            club_speed
        );

        SpeedReading {
            ball_speed_mph: ball_speed,
            club_speed_mph: club_speed,
        }
    }
}

impl Iterator for ShotSimulator {
    type Item = SpeedReading;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_reading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_runs_repeat() {
        let a: Vec<_> = ShotSimulator::new(Some(7), true).take(10).collect();
        let b: Vec<_> = ShotSimulator::new(Some(7), true).take(10).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_readings_stay_realistic() {
        for reading in ShotSimulator::new(Some(42), true).take(100) {
            assert!((80.0..180.0).contains(&reading.ball_speed_mph));
            let smash = reading.ball_speed_mph / reading.club_speed_mph.unwrap();
            assert!((1.349..=1.551).contains(&smash));
        }
    }

    #[test]
    fn test_without_club_speed() {
        assert!(ShotSimulator::new(Some(1), false)
            .take(20)
            .all(|r| r.club_speed_mph.is_none()));
    }

    #[test]
    fn test_every_fifth_shot_is_big() {
        let readings: Vec<_> = ShotSimulator::new(Some(3), false).take(15).collect();
        for i in [4, 9, 14] {
            assert!(readings[i].ball_speed_mph >= 150.0);
        }
    }
}
