use std::{
    collections::{BTreeSet, HashMap},
    ops::RangeInclusive,
};

use rand::{Rng, seq::SliceRandom};

use crate::{
    Difficulty, Equipment, Exercise, ExerciseID, ExperienceLevel, FitnessGoal, MuscleGroup,
    PhaseType, RPE, Reps, Set, Time, UserProfile, WorkoutExercise, recommended_weight,
    set_weight,
};

const WARMUP_ALLOWANCE: i64 = 5;
const COOLDOWN_ALLOWANCE: i64 = 5;
const EXECUTION_SECONDS: u32 = 30;
const MIN_EXERCISES: i64 = 3;

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn generate_workout<G: Rng + ?Sized>(
        &self,
        request: &WorkoutRequest,
        profile: &UserProfile,
        rng: &mut G,
    ) -> Result<WorkoutPlan, crate::ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRequest {
    pub goal: FitnessGoal,
    pub experience: ExperienceLevel,
    pub equipment: BTreeSet<Equipment>,
    /// Time available for the whole session in minutes.
    pub minutes: u32,
    pub week_in_cycle: i32,
    /// Muscle groups to focus on. If empty, a full body split is used.
    pub muscle_groups: Vec<MuscleGroup>,
    pub excluded: Vec<ExerciseID>,
}

impl WorkoutRequest {
    #[must_use]
    pub fn target_muscle_groups(&self) -> Vec<MuscleGroup> {
        if self.muscle_groups.is_empty() {
            MuscleGroup::FULL_BODY_SPLIT.to_vec()
        } else {
            self.muscle_groups.clone()
        }
    }

    fn admits(&self, exercise: &Exercise) -> bool {
        exercise.uses_any(&self.equipment)
            && exercise.difficulty <= max_difficulty(self.experience)
            && !self.excluded.contains(&exercise.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDefinition {
    pub sets: RangeInclusive<u32>,
    pub reps: RangeInclusive<u32>,
    /// Rest between sets in seconds.
    pub rest: RangeInclusive<u32>,
    pub rpe: RangeInclusive<RPE>,
}

impl PhaseDefinition {
    fn average_sets(&self) -> f64 {
        f64::from(self.sets.start() + self.sets.end()) / 2.0
    }
}

#[must_use]
pub fn phase_definition(phase: PhaseType) -> &'static PhaseDefinition {
    match phase {
        PhaseType::Strength => &STRENGTH,
        PhaseType::Hypertrophy => &HYPERTROPHY,
        PhaseType::Endurance => &ENDURANCE,
        PhaseType::Deload => &DELOAD,
    }
}

static STRENGTH: PhaseDefinition = PhaseDefinition {
    sets: 3..=5,
    reps: 3..=6,
    rest: 180..=300,
    rpe: RPE::EIGHT..=RPE::TEN,
};

static HYPERTROPHY: PhaseDefinition = PhaseDefinition {
    sets: 3..=4,
    reps: 8..=12,
    rest: 60..=120,
    rpe: RPE::SEVEN..=RPE::NINE,
};

static ENDURANCE: PhaseDefinition = PhaseDefinition {
    sets: 2..=3,
    reps: 15..=20,
    rest: 30..=60,
    rpe: RPE::SIX..=RPE::EIGHT,
};

static DELOAD: PhaseDefinition = PhaseDefinition {
    sets: 2..=3,
    reps: 8..=12,
    rest: 60..=120,
    rpe: RPE::FIVE..=RPE::SEVEN,
};

/// Training phase of a session.
///
/// Every fourth week is a deload week. The other weeks rotate through the three phases
/// preferred for the goal.
#[must_use]
pub fn phase_for_week(goal: FitnessGoal, week_in_cycle: i32) -> PhaseType {
    let week = i64::from(week_in_cycle);

    if week.rem_euclid(4) == 0 {
        return PhaseType::Deload;
    }

    let priority = match goal {
        FitnessGoal::Strength => [
            PhaseType::Strength,
            PhaseType::Hypertrophy,
            PhaseType::Endurance,
        ],
        FitnessGoal::MuscleGain | FitnessGoal::Maintenance => [
            PhaseType::Hypertrophy,
            PhaseType::Strength,
            PhaseType::Endurance,
        ],
        FitnessGoal::WeightLoss | FitnessGoal::Endurance => [
            PhaseType::Endurance,
            PhaseType::Hypertrophy,
            PhaseType::Strength,
        ],
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = week.rem_euclid(3) as usize;
    priority[index]
}

/// Number of exercises that fit into the available time.
///
/// The estimate assumes the minimal rest of the phase plus the execution time for each
/// set. The result is capped depending on the experience level and is never below three.
#[must_use]
pub fn exercise_count(minutes: u32, phase: PhaseType, experience: ExperienceLevel) -> usize {
    let definition = phase_definition(phase);
    let available_seconds = (i64::from(minutes) - WARMUP_ALLOWANCE - COOLDOWN_ALLOWANCE) * 60;
    let seconds_per_exercise =
        definition.average_sets() * f64::from(definition.rest.start() + EXECUTION_SECONDS);

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let count = (available_seconds as f64 / seconds_per_exercise).floor() as i64;
    let cap = match experience {
        ExperienceLevel::Beginner => 5,
        ExperienceLevel::Intermediate => 7,
        ExperienceLevel::Advanced | ExperienceLevel::Expert => 9,
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count.min(cap).max(MIN_EXERCISES) as usize;
    count
}

/// Choose up to `max` exercises suitable for the request.
///
/// Each target muscle group gets one randomly chosen exercise, preferring exercises that
/// train the group as primary muscle. Remaining slots are filled with random exercises
/// out of all suitable exercises.
pub fn select_exercises<'a, R: Rng + ?Sized>(
    catalog: &'a [Exercise],
    request: &WorkoutRequest,
    max: usize,
    rng: &mut R,
) -> Vec<&'a Exercise> {
    let candidates = catalog
        .iter()
        .filter(|e| request.admits(e))
        .collect::<Vec<_>>();
    let mut selected: Vec<&Exercise> = vec![];

    for muscle in request.target_muscle_groups() {
        let matching = candidates
            .iter()
            .copied()
            .filter(|e| e.targets(muscle))
            .collect::<Vec<_>>();
        let primary = matching
            .iter()
            .copied()
            .filter(|e| e.primary_muscles.contains(&muscle))
            .collect::<Vec<_>>();
        let pool = if primary.is_empty() { &matching } else { &primary };

        if let Some(exercise) = pool.choose(rng) {
            if !selected.iter().any(|s| s.id == exercise.id) {
                selected.push(*exercise);
            }
        }
    }

    while selected.len() < max {
        let remaining = candidates
            .iter()
            .copied()
            .filter(|e| !selected.iter().any(|s| s.id == e.id))
            .collect::<Vec<_>>();

        match remaining.choose(rng) {
            Some(exercise) => selected.push(*exercise),
            None => break,
        }
    }

    selected.truncate(max);
    selected
}

#[derive(Debug, Clone, PartialEq)]
pub struct Protocol {
    pub name: &'static str,
    pub minutes: u32,
    pub instructions: &'static [&'static str],
}

impl Protocol {
    #[must_use]
    pub fn warmup(exercise_count: usize) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let minutes = (5 + exercise_count / 2).min(10) as u32;
        Self {
            name: "Dynamic Warm-up",
            minutes,
            instructions: &[
                "5 minutes light cardio (jogging, jumping jacks, or stationary bike)",
                "Arm circles forward and backward (10 each direction)",
                "Bodyweight squats (15 reps)",
                "Walking lunges (10 per leg)",
                "Push-ups (10 reps)",
                "Light stretching for major muscle groups (30 seconds each)",
            ],
        }
    }

    #[must_use]
    pub fn cooldown() -> Self {
        Self {
            name: "Cooldown & Stretching",
            minutes: 5,
            instructions: &[
                "2 minutes very light cardio to gradually reduce heart rate",
                "Static stretching for all major muscle groups (30-45 seconds each)",
                "Focus on muscles worked during the session",
                "Deep breathing to promote recovery and relaxation",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub phase: PhaseType,
    pub exercises: Vec<WorkoutExercise>,
    pub warmup: Protocol,
    pub cooldown: Protocol,
    /// Estimated minutes including warm-up and cool-down.
    pub estimated_duration: u32,
}

impl WorkoutPlan {
    /// Fill in the weight of all sets based on the profile.
    ///
    /// Exercises that are not part of the catalog keep their weights.
    #[must_use]
    pub fn with_weights(mut self, catalog: &[Exercise], profile: &UserProfile) -> Self {
        let index = catalog
            .iter()
            .map(|e| (&e.id, e))
            .collect::<HashMap<_, _>>();

        for workout_exercise in &mut self.exercises {
            let Some(exercise) = index.get(&workout_exercise.exercise_id) else {
                continue;
            };
            let base_weight = recommended_weight(exercise.baseline_strength_ratio, profile);

            for set in &mut workout_exercise.sets {
                set.weight = set_weight(base_weight, set.reps, set.rpe, set.is_warmup);
            }
        }

        self
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

/// Generate a workout plan without weights.
///
/// All random choices are drawn from `rng`, so the same seed results in the same plan.
pub fn generate_workout<R: Rng + ?Sized>(
    request: &WorkoutRequest,
    catalog: &[Exercise],
    rng: &mut R,
) -> WorkoutPlan {
    let phase = phase_for_week(request.goal, request.week_in_cycle);
    let definition = phase_definition(phase);
    let count = exercise_count(request.minutes, phase, request.experience);

    let mut exercises = vec![];
    for exercise in select_exercises(catalog, request, count, rng) {
        exercises.push(workout_exercise(exercise, definition, rng));
    }

    let warmup = Protocol::warmup(exercises.len());
    let cooldown = Protocol::cooldown();
    let duration = f64::from(warmup.minutes)
        + exercises.iter().map(WorkoutExercise::duration).sum::<f64>()
        + f64::from(cooldown.minutes);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let estimated_duration = duration.ceil() as u32;

    WorkoutPlan {
        phase,
        exercises,
        warmup,
        cooldown,
        estimated_duration,
    }
}

fn workout_exercise<R: Rng + ?Sized>(
    exercise: &Exercise,
    definition: &PhaseDefinition,
    rng: &mut R,
) -> WorkoutExercise {
    let set_count = rng.gen_range(definition.sets.clone());
    let reps = rng.gen_range(definition.reps.clone());
    let rest = rng.gen_range(definition.rest.clone());
    let rpe = RPE::clamped(i64::from(rng.gen_range(
        u8::from(*definition.rpe.start())..=u8::from(*definition.rpe.end()),
    )));

    let mut sets = vec![];

    if exercise.is_compound() {
        sets.push(Set::warmup(Reps::clamped(reps + 5), RPE::FOUR));
        sets.push(Set::warmup(Reps::clamped(reps + 2), RPE::SIX));
    }

    sets.extend((0..set_count).map(|_| Set::working(Reps::clamped(reps), rpe)));

    WorkoutExercise {
        exercise_id: exercise.id.clone(),
        sets,
        rest_between_sets: Time::clamped(rest),
    }
}

fn max_difficulty(experience: ExperienceLevel) -> Difficulty {
    match experience {
        ExperienceLevel::Beginner => Difficulty::Beginner,
        ExperienceLevel::Intermediate => Difficulty::Intermediate,
        ExperienceLevel::Advanced | ExperienceLevel::Expert => Difficulty::Advanced,
    }
}
