use std::fmt;

use derive_more::{Display, Into};

use crate::ExerciseID;

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Closest valid number of repetitions.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self(value.min(999))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..1000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self(value.min(999))
    }

    #[must_use]
    pub fn minutes(self) -> f64 {
        f64::from(self.0) / 60.0
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 999 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(u8);

impl RPE {
    pub const ONE: RPE = RPE(1);
    pub const TWO: RPE = RPE(2);
    pub const THREE: RPE = RPE(3);
    pub const FOUR: RPE = RPE(4);
    pub const FIVE: RPE = RPE(5);
    pub const SIX: RPE = RPE(6);
    pub const SEVEN: RPE = RPE(7);
    pub const EIGHT: RPE = RPE(8);
    pub const NINE: RPE = RPE(9);
    pub const TEN: RPE = RPE(10);

    pub fn new(value: u8) -> Result<Self, RPEError> {
        if !(1..=10).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Closest valid RPE for an arbitrary integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(1, 10) as u8)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg(values: &[RPE]) -> Option<f32> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().map(|rpe| f32::from(rpe.0)).sum::<f32>() / values.len() as f32)
        }
    }
}

impl Default for RPE {
    fn default() -> Self {
        RPE::SEVEN
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0)
    }
}

impl From<RPE> for u8 {
    fn from(value: RPE) -> Self {
        value.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 1 to 10")]
    OutOfRange,
    #[error("RPE must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub reps: Reps,
    pub weight: f32,
    pub rpe: RPE,
    pub is_warmup: bool,
    pub completed: bool,
    pub actual_reps: Option<Reps>,
    pub actual_rpe: Option<RPE>,
}

impl Set {
    #[must_use]
    pub fn working(reps: Reps, rpe: RPE) -> Self {
        Self {
            reps,
            weight: 0.0,
            rpe,
            is_warmup: false,
            completed: false,
            actual_reps: None,
            actual_rpe: None,
        }
    }

    #[must_use]
    pub fn warmup(reps: Reps, rpe: RPE) -> Self {
        Self {
            is_warmup: true,
            ..Self::working(reps, rpe)
        }
    }

    /// A completed working set that reached its rep target. Zero recorded reps never count.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.actual_reps.is_some_and(|reps| reps.0 > 0 && reps >= self.reps)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: Vec<Set>,
    pub rest_between_sets: Time,
}

impl WorkoutExercise {
    pub fn warmup_sets(&self) -> impl Iterator<Item = &Set> {
        self.sets.iter().filter(|s| s.is_warmup)
    }

    pub fn working_sets(&self) -> impl Iterator<Item = &Set> {
        self.sets.iter().filter(|s| !s.is_warmup)
    }

    /// Estimated minutes for all sets including rest, assuming half a minute per set.
    #[must_use]
    pub fn duration(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let set_count = self.sets.len() as f64;
        set_count * (self.rest_between_sets.minutes() + 0.5)
    }
}
