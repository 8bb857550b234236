use std::path::{Path, PathBuf};

use ironplan_domain::{self as domain, CatalogRepository, parse_tag};
use log::{debug, error, warn};

/// Exercise catalog stored as a JSON array.
///
/// A missing or malformed file results in an empty catalog. Records with unknown tags are
/// skipped.
#[derive(Clone, Debug)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for JsonCatalog {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                error!("failed to read catalog {}: {err}", self.path.display());
                return Ok(vec![]);
            }
        };

        let records = match serde_json::from_str::<Vec<Exercise>>(&content) {
            Ok(records) => records,
            Err(err) => {
                error!("failed to parse catalog {}: {err}", self.path.display());
                return Ok(vec![]);
            }
        };

        let exercises = records
            .into_iter()
            .filter_map(|record| {
                let name = record.name.clone();
                domain::Exercise::try_from(record)
                    .map_err(|err| warn!("skipping exercise \"{name}\": {err}"))
                    .ok()
            })
            .collect::<Vec<_>>();

        debug!(
            "loaded {} exercises from {}",
            exercises.len(),
            self.path.display()
        );

        Ok(exercises)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
    pub difficulty: String,
    pub baseline_strength_ratio: f32,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.to_string(),
            muscle_groups: value
                .primary_muscles
                .iter()
                .map(ToString::to_string)
                .collect(),
            equipment: value.equipment.iter().map(ToString::to_string).collect(),
            difficulty: value.difficulty.to_string(),
            baseline_strength_ratio: value.baseline_strength_ratio,
            alternatives: value.alternatives.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let name = domain::Name::new(&value.name)?;
        let primary_muscles = value
            .muscle_groups
            .iter()
            .map(|m| parse_tag::<domain::MuscleGroup>("muscle group", m))
            .collect::<Result<Vec<_>, _>>()?;
        let equipment = value
            .equipment
            .iter()
            .map(|e| parse_tag::<domain::Equipment>("equipment", e))
            .collect::<Result<Vec<_>, _>>()?;
        let difficulty = parse_tag::<domain::Difficulty>("difficulty", &value.difficulty)?;

        if !(value.baseline_strength_ratio >= 0.0 && value.baseline_strength_ratio.is_finite()) {
            return Err(ExerciseError::InvalidRatio(value.baseline_strength_ratio));
        }

        Ok(Self {
            id: domain::ExerciseID::from_name(&name),
            instructions: domain::catalog::instructions(name.as_ref().as_str()),
            tips: domain::catalog::tips(name.as_ref().as_str(), &primary_muscles, &equipment),
            name,
            description: String::new(),
            primary_muscles,
            secondary_muscles: vec![],
            equipment,
            difficulty,
            baseline_strength_ratio: value.baseline_strength_ratio,
            alternatives: value
                .alternatives
                .iter()
                .map(|a| domain::ExerciseID::from(a.as_str()))
                .collect(),
            unilateral: false,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidTag(#[from] domain::ParseTagError),
    #[error("baseline strength ratio must be a non-negative number ({0})")]
    InvalidRatio(f32),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::tests::data::{CATALOG_JSON, INVALID_CATALOG_JSON};

    use super::*;

    fn catalog_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn record(name: &str) -> Exercise {
        Exercise {
            name: name.to_string(),
            muscle_groups: vec!["quads".into(), "glutes".into()],
            equipment: vec!["barbell".into()],
            difficulty: "intermediate".into(),
            baseline_strength_ratio: 1.5,
            alternatives: vec!["Front Squat".into(), "goblet-squat".into()],
        }
    }

    #[test]
    fn test_exercise_try_from() {
        let exercise = domain::Exercise::try_from(record("Barbell Back Squat")).unwrap();

        assert_eq!(exercise.id.to_string(), "barbell-back-squat");
        assert_eq!(
            exercise.primary_muscles,
            vec![domain::MuscleGroup::Quads, domain::MuscleGroup::Glutes]
        );
        assert_eq!(exercise.equipment, vec![domain::Equipment::Barbell]);
        assert_eq!(exercise.difficulty, domain::Difficulty::Intermediate);
        assert_eq!(
            exercise
                .alternatives
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["front-squat", "goblet-squat"]
        );
        assert_eq!(exercise.instructions[0], "Stand with feet shoulder-width apart");
        assert!(exercise.secondary_muscles.is_empty());
    }

    #[test]
    fn test_exercise_try_from_untrimmed_name() {
        let exercise = domain::Exercise::try_from(record("  Goblet Squat ")).unwrap();

        assert_eq!(exercise.name.to_string(), "Goblet Squat");
        assert_eq!(exercise.id.to_string(), "goblet-squat");
        assert_eq!(exercise.instructions, domain::catalog::instructions("Goblet Squat"));
        assert_eq!(
            exercise.tips,
            domain::catalog::tips(
                "Goblet Squat",
                &exercise.primary_muscles,
                &exercise.equipment
            )
        );
    }

    #[rstest]
    #[case::name(
        Exercise { name: " ".into(), ..record("A") },
        ExerciseError::InvalidName(domain::NameError::Empty)
    )]
    #[case::muscle_group(
        Exercise { muscle_groups: vec!["legs".into()], ..record("A") },
        ExerciseError::InvalidTag(domain::ParseTagError {
            kind: "muscle group",
            value: "legs".into()
        })
    )]
    #[case::equipment(
        Exercise { equipment: vec!["sled".into()], ..record("A") },
        ExerciseError::InvalidTag(domain::ParseTagError {
            kind: "equipment",
            value: "sled".into()
        })
    )]
    #[case::difficulty(
        Exercise { difficulty: "elite".into(), ..record("A") },
        ExerciseError::InvalidTag(domain::ParseTagError {
            kind: "difficulty",
            value: "elite".into()
        })
    )]
    #[case::ratio(
        Exercise { baseline_strength_ratio: -1.0, ..record("A") },
        ExerciseError::InvalidRatio(-1.0)
    )]
    fn test_exercise_try_from_invalid(#[case] record: Exercise, #[case] expected: ExerciseError) {
        assert_eq!(domain::Exercise::try_from(record), Err(expected));
    }

    #[test]
    fn test_exercise_serde() {
        let record = serde_json::from_str::<Exercise>(
            r#"{
                "name": "Push-up",
                "muscleGroups": ["chest"],
                "equipment": ["bodyweight"],
                "difficulty": "beginner",
                "baselineStrengthRatio": 0
            }"#,
        )
        .unwrap();

        assert_eq!(record.name, "Push-up");
        assert!(record.alternatives.is_empty());
        assert_eq!(
            serde_json::to_value(&record).unwrap()["baselineStrengthRatio"],
            serde_json::json!(0.0)
        );
    }

    #[test]
    fn test_exercise_from_builtin() {
        let builtin = domain::catalog()
            .iter()
            .find(|e| e.id.as_str() == "barbell-bench-press")
            .unwrap();

        let exercise = domain::Exercise::try_from(Exercise::from(builtin)).unwrap();

        assert_eq!(exercise.id, builtin.id);
        assert_eq!(exercise.primary_muscles, builtin.primary_muscles);
        assert_eq!(exercise.alternatives, builtin.alternatives);
    }

    #[test]
    fn test_read_exercises() {
        let file = catalog_file(CATALOG_JSON);

        let exercises = block_on(JsonCatalog::new(file.path()).read_exercises()).unwrap();

        assert_eq!(
            exercises
                .iter()
                .map(|e| e.id.to_string())
                .collect::<Vec<_>>(),
            vec!["barbell-back-squat", "goblet-squat", "push-up"]
        );
    }

    #[test]
    fn test_read_exercises_skips_invalid_records() {
        let file = catalog_file(INVALID_CATALOG_JSON);

        let exercises = block_on(JsonCatalog::new(file.path()).read_exercises()).unwrap();

        assert_eq!(
            exercises
                .iter()
                .map(|e| e.name.to_string())
                .collect::<Vec<_>>(),
            vec!["Plank"]
        );
    }

    #[rstest]
    #[case::malformed("{\"name\": \"Plank\"}")]
    #[case::truncated("[{\"name\": ")]
    #[case::empty("")]
    fn test_read_exercises_malformed(#[case] content: &str) {
        let file = catalog_file(content);

        assert!(
            block_on(JsonCatalog::new(file.path()).read_exercises())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_read_exercises_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(
            block_on(JsonCatalog::new(dir.path().join("exercises.json")).read_exercises())
                .unwrap()
                .is_empty()
        );
    }
}
