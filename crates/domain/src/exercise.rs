use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    slice::Iter,
};

use derive_more::{AsRef, Deref, Display};

use crate::{Name, name::slugify};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, crate::ReadError>;
    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, crate::ReadError>;
    async fn get_alternatives(&self, id: &ExerciseID) -> Result<Vec<Exercise>, crate::ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, crate::ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub description: String,
    pub primary_muscles: Vec<MuscleGroup>,
    pub secondary_muscles: Vec<MuscleGroup>,
    pub equipment: Vec<Equipment>,
    pub difficulty: Difficulty,
    pub baseline_strength_ratio: f32,
    pub alternatives: Vec<ExerciseID>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub unilateral: bool,
}

impl Exercise {
    #[must_use]
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.primary_muscles.contains(&muscle) || self.secondary_muscles.contains(&muscle)
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.primary_muscles.len() > 1
            || self.primary_muscles.iter().any(|m| {
                matches!(
                    m,
                    MuscleGroup::Back | MuscleGroup::Chest | MuscleGroup::Quads
                )
            })
    }

    #[must_use]
    pub fn uses_any(&self, equipment: &BTreeSet<Equipment>) -> bool {
        self.equipment.iter().any(|e| equipment.contains(e))
    }

    #[must_use]
    pub fn alternatives<'a>(
        &self,
        exercises: &'a BTreeMap<ExerciseID, Exercise>,
    ) -> Vec<&'a Exercise> {
        self.alternatives
            .iter()
            .filter_map(|id| exercises.get(id))
            .collect()
    }
}

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn from_name(name: &Name) -> Self {
        Self(name.slug())
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(slugify(value))
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Traps,
    Lats,
    Core,
    FullBody,
}

impl MuscleGroup {
    pub const FULL_BODY_SPLIT: [MuscleGroup; 10] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::Abs,
    ];
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 15] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Abs,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Traps,
            MuscleGroup::Lats,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    Machine,
    Cable,
    Bodyweight,
    ResistanceBand,
    MedicineBall,
    StabilityBall,
    FoamRoller,
    Bench,
    PullUpBar,
    Trx,
    Other,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 14] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::Bodyweight,
            Equipment::ResistanceBand,
            Equipment::MedicineBall,
            Equipment::StabilityBall,
            Equipment::FoamRoller,
            Equipment::Bench,
            Equipment::PullUpBar,
            Equipment::Trx,
            Equipment::Other,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::StabilityBall => "Stability Ball",
            Equipment::FoamRoller => "Foam Roller",
            Equipment::Bench => "Bench",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::Trx => "TRX",
            Equipment::Other => "Other",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscles: HashSet<MuscleGroup>,
    pub equipment: HashSet<Equipment>,
    pub difficulty: HashSet<Difficulty>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| {
                e.name
                    .as_ref()
                    .to_lowercase()
                    .contains(self.name.to_lowercase().trim())
                    && (self.muscles.is_empty() || self.muscles.iter().all(|m| e.targets(*m)))
                    && (self.equipment.is_empty()
                        || self.equipment.iter().any(|eq| e.equipment.contains(eq)))
                    && (self.difficulty.is_empty() || self.difficulty.contains(&e.difficulty))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.muscles.is_empty()
            && self.equipment.is_empty()
            && self.difficulty.is_empty()
    }
}

/// Muscle groups that occur as primary or secondary group in any of the given exercises.
#[must_use]
pub fn used_muscle_groups<'a>(
    exercises: impl Iterator<Item = &'a Exercise>,
) -> BTreeSet<MuscleGroup> {
    exercises
        .flat_map(|e| e.primary_muscles.iter().chain(e.secondary_muscles.iter()))
        .copied()
        .collect()
}

#[must_use]
pub fn used_equipment<'a>(exercises: impl Iterator<Item = &'a Exercise>) -> BTreeSet<Equipment> {
    exercises.flat_map(|e| e.equipment.iter()).copied().collect()
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
