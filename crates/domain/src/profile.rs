use std::{fmt, slice::Iter, str::FromStr};

use derive_more::{Display, Into};

use crate::{ParseTagError, Property};

pub fn parse_tag<T: FromStr>(kind: &'static str, value: &str) -> Result<T, ParseTagError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ParseTagError::new(kind, value))
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub bodyweight: Bodyweight,
    pub gender: Gender,
    pub age: Age,
    pub experience: ExperienceLevel,
    pub measurement_system: MeasurementSystem,
    pub goal: FitnessGoal,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Bodyweight(f32);

impl Bodyweight {
    pub fn new(value: f32) -> Result<Self, BodyweightError> {
        if !(value > 0.0 && value < 1000.0) {
            return Err(BodyweightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Bodyweight {
    type Error = BodyweightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Bodyweight::new(parsed_value),
            Err(_) => Err(BodyweightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyweightError {
    #[error("Bodyweight must be greater than 0 and less than 1000")]
    OutOfRange,
    #[error("Bodyweight must be a decimal")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u32);

impl Age {
    pub fn new(value: u32) -> Result<Self, AgeError> {
        if !(1..=120).contains(&value) {
            return Err(AgeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Age {
    type Error = AgeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Age::new(parsed_value),
            Err(_) => Err(AgeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AgeError {
    #[error("Age must be in the range 1 to 120")]
    OutOfRange,
    #[error("Age must be an integer")]
    ParseError,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Property for Gender {
    fn iter() -> Iter<'static, Gender> {
        static GENDER: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
        GENDER.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static EXPERIENCE: [ExperienceLevel; 4] = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
            ExperienceLevel::Expert,
        ];
        EXPERIENCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

impl MeasurementSystem {
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "kg",
            MeasurementSystem::Imperial => "lbs",
        }
    }
}

impl Property for MeasurementSystem {
    fn iter() -> Iter<'static, MeasurementSystem> {
        static SYSTEM: [MeasurementSystem; 2] =
            [MeasurementSystem::Metric, MeasurementSystem::Imperial];
        SYSTEM.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "Metric",
            MeasurementSystem::Imperial => "Imperial",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Strength,
    Endurance,
    Maintenance,
}

impl Property for FitnessGoal {
    fn iter() -> Iter<'static, FitnessGoal> {
        static GOAL: [FitnessGoal; 5] = [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Strength,
            FitnessGoal::Endurance,
            FitnessGoal::Maintenance,
        ];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Strength => "Strength",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}, age {}, {} ({})",
            self.bodyweight,
            self.measurement_system.unit(),
            self.gender.name().to_lowercase(),
            self.experience.name().to_lowercase(),
            self.age,
            self.goal.name().to_lowercase(),
            self.measurement_system.name().to_lowercase(),
        )
    }
}
