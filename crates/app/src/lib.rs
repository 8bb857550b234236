#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeSet;

use ironplan_domain::{
    Age, Bodyweight, Equipment, ExperienceLevel, FitnessGoal, Gender,
    MeasurementSystem, ReadError, UserProfile, ValidationError, WorkoutRequest, WriteError,
    parse_tag,
};

pub mod log;
mod service;

pub use service::Service;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, ReadError>;
    async fn set_settings(&self, settings: Settings) -> Result<(), WriteError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, ReadError>;
    async fn write_settings(&self, settings: Settings) -> Result<(), WriteError>;
}

/// Persisted user preferences.
///
/// Tags are stored as strings and validated when they are converted into domain values.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub measurement_system: String,
    pub bodyweight: f32,
    pub gender: String,
    pub age: u32,
    pub experience: String,
    pub goal: String,
    pub equipment: Vec<String>,
    pub minutes_per_workout: u32,
    pub workouts_per_week: u32,
    pub cycle_week: i32,
}

impl Settings {
    pub fn measurement_system(&self) -> Result<MeasurementSystem, ValidationError> {
        parse_tag("measurement system", &self.measurement_system)
            .map_err(|err| ValidationError::invalid("measurement_system", err))
    }

    pub fn experience(&self) -> Result<ExperienceLevel, ValidationError> {
        parse_tag("experience level", &self.experience)
            .map_err(|err| ValidationError::invalid("experience", err))
    }

    pub fn goal(&self) -> Result<FitnessGoal, ValidationError> {
        parse_tag("fitness goal", &self.goal).map_err(|err| ValidationError::invalid("goal", err))
    }

    pub fn profile(&self) -> Result<UserProfile, ValidationError> {
        Ok(UserProfile {
            bodyweight: Bodyweight::new(self.bodyweight)
                .map_err(|err| ValidationError::invalid("bodyweight", err))?,
            gender: parse_tag::<Gender>("gender", &self.gender)
                .map_err(|err| ValidationError::invalid("gender", err))?,
            age: Age::new(self.age).map_err(|err| ValidationError::invalid("age", err))?,
            experience: self.experience()?,
            measurement_system: self.measurement_system()?,
            goal: self.goal()?,
        })
    }

    pub fn equipment(&self) -> Result<BTreeSet<Equipment>, ValidationError> {
        self.equipment
            .iter()
            .map(|e| {
                parse_tag("equipment", e).map_err(|err| ValidationError::invalid("equipment", err))
            })
            .collect()
    }

    /// Request for a full body workout in the current week of the cycle.
    pub fn workout_request(&self) -> Result<WorkoutRequest, ValidationError> {
        Ok(WorkoutRequest {
            goal: self.goal()?,
            experience: self.experience()?,
            equipment: self.equipment()?,
            minutes: self.minutes_per_workout,
            week_in_cycle: self.cycle_week,
            muscle_groups: vec![],
            excluded: vec![],
        })
    }

    /// Move to the next week of the cycle.
    pub fn advance_week(&mut self) {
        self.cycle_week = self.cycle_week.saturating_add(1);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Metric.to_string(),
            bodyweight: 75.0,
            gender: Gender::Male.to_string(),
            age: 30,
            experience: ExperienceLevel::Beginner.to_string(),
            goal: FitnessGoal::Maintenance.to_string(),
            equipment: vec![
                Equipment::Bodyweight.to_string(),
                Equipment::Dumbbell.to_string(),
            ],
            minutes_per_workout: 45,
            workouts_per_week: 3,
            cycle_week: 1,
        }
    }
}

impl From<&UserProfile> for Settings {
    fn from(profile: &UserProfile) -> Self {
        Self {
            measurement_system: profile.measurement_system.to_string(),
            bodyweight: f32::from(profile.bodyweight),
            gender: profile.gender.to_string(),
            age: u32::from(profile.age),
            experience: profile.experience.to_string(),
            goal: profile.goal.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(
            settings.profile().unwrap().to_string(),
            "75 kg, male beginner, age 30, maintenance (metric)"
        );
        assert_eq!(
            settings.equipment().unwrap(),
            BTreeSet::from([Equipment::Dumbbell, Equipment::Bodyweight])
        );
    }

    #[test]
    fn test_settings_deserialize_missing_fields() {
        let settings = serde_json::from_str::<Settings>(r#"{"goal": "strength", "age": 41}"#)
            .unwrap();

        assert_eq!(settings.goal().unwrap(), FitnessGoal::Strength);
        assert_eq!(settings.age, 41);
        assert_eq!(settings.minutes_per_workout, 45);
    }

    #[rstest]
    #[case::gender(
        Settings { gender: "unknown".into(), ..Settings::default() },
        "invalid gender: unknown gender \"unknown\""
    )]
    #[case::bodyweight(
        Settings { bodyweight: 0.0, ..Settings::default() },
        "invalid bodyweight: Bodyweight must be greater than 0 and less than 1000"
    )]
    #[case::age(
        Settings { age: 130, ..Settings::default() },
        "invalid age: Age must be in the range 1 to 120"
    )]
    #[case::goal(
        Settings { goal: "bulk".into(), ..Settings::default() },
        "invalid goal: unknown fitness goal \"bulk\""
    )]
    fn test_settings_profile_invalid(#[case] settings: Settings, #[case] message: &str) {
        assert_eq!(settings.profile().unwrap_err().to_string(), message);
    }

    #[test]
    fn test_settings_equipment_invalid() {
        let settings = Settings {
            equipment: vec!["barbell".into(), "rowing_machine".into()],
            ..Settings::default()
        };

        assert_eq!(
            settings.equipment().unwrap_err().to_string(),
            "invalid equipment: unknown equipment \"rowing_machine\""
        );
    }

    #[test]
    fn test_settings_workout_request() {
        let settings = Settings {
            goal: "muscle_gain".into(),
            experience: "advanced".into(),
            minutes_per_workout: 60,
            cycle_week: 3,
            ..Settings::default()
        };

        let request = settings.workout_request().unwrap();

        assert_eq!(request.goal, FitnessGoal::MuscleGain);
        assert_eq!(request.experience, ExperienceLevel::Advanced);
        assert_eq!(request.minutes, 60);
        assert_eq!(request.week_in_cycle, 3);
        assert!(request.muscle_groups.is_empty());
    }

    #[test]
    fn test_settings_from_profile() {
        let profile = Settings {
            bodyweight: 82.5,
            gender: "female".into(),
            goal: "endurance".into(),
            measurement_system: "imperial".into(),
            ..Settings::default()
        }
        .profile()
        .unwrap();

        assert_eq!(Settings::from(&profile).profile().unwrap(), profile);
    }

    #[test]
    fn test_settings_advance_week() {
        let mut settings = Settings::default();
        settings.advance_week();
        assert_eq!(settings.cycle_week, 2);
    }
}
