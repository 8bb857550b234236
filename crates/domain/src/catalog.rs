use std::{collections::HashSet, sync::LazyLock};

use log::error;

use crate::{Difficulty, Equipment, Exercise, ExerciseID, MuscleGroup, Name};

static CATALOG: LazyLock<Vec<Exercise>> =
    LazyLock::new(|| resolve_alternatives(build_catalog()));

/// Built-in exercises with all alternatives resolved.
#[must_use]
pub fn catalog() -> &'static [Exercise] {
    &CATALOG
}

/// Built-in exercises in definition order.
///
/// Alternatives are kept as defined and may refer to exercises that are not part of the
/// catalog. Use [`resolve_alternatives`] to remove those references.
#[must_use]
pub fn build_catalog() -> Vec<Exercise> {
    EXERCISES
        .iter()
        .filter_map(|definition| match Name::new(definition.name) {
            Ok(name) => Some(definition.exercise(name)),
            Err(err) => {
                error!("invalid exercise name \"{}\": {err}", definition.name);
                None
            }
        })
        .collect()
}

/// Drop all alternatives that do not refer to an exercise of the same catalog.
#[must_use]
pub fn resolve_alternatives(mut exercises: Vec<Exercise>) -> Vec<Exercise> {
    let ids = exercises
        .iter()
        .map(|e| e.id.clone())
        .collect::<HashSet<ExerciseID>>();

    for exercise in &mut exercises {
        exercise.alternatives.retain(|id| ids.contains(id));
    }

    exercises
}

struct ExerciseDefinition {
    name: &'static str,
    description: &'static str,
    primary_muscles: &'static [MuscleGroup],
    secondary_muscles: &'static [MuscleGroup],
    equipment: &'static [Equipment],
    difficulty: Difficulty,
    baseline_strength_ratio: f32,
    alternatives: &'static [&'static str],
    unilateral: bool,
}

impl ExerciseDefinition {
    fn exercise(&self, name: Name) -> Exercise {
        Exercise {
            id: ExerciseID::from_name(&name),
            name,
            description: self.description.to_string(),
            primary_muscles: self.primary_muscles.to_vec(),
            secondary_muscles: self.secondary_muscles.to_vec(),
            equipment: self.equipment.to_vec(),
            difficulty: self.difficulty,
            baseline_strength_ratio: self.baseline_strength_ratio,
            alternatives: self
                .alternatives
                .iter()
                .map(|id| ExerciseID::from(*id))
                .collect(),
            instructions: instructions(self.name),
            tips: tips(self.name, self.primary_muscles, self.equipment),
            unilateral: self.unilateral,
        }
    }
}

/// Step-by-step instructions for an exercise, chosen by the kind of movement in its name.
#[must_use]
pub fn instructions(name: &str) -> Vec<String> {
    let instructions: &[&str] = if name.contains("Squat") {
        &[
            "Stand with feet shoulder-width apart",
            "Brace your core and keep chest up",
            "Bend knees and hips to lower your body",
            "Keep your weight on your heels",
            "Lower until thighs are parallel to ground (or as low as possible with good form)",
            "Drive through heels to return to standing position",
        ]
    } else if name.contains("Bench Press") {
        &[
            "Lie on bench with feet flat on floor",
            "Grip the bar slightly wider than shoulder width",
            "Unrack the bar and position it above chest",
            "Lower the bar to mid-chest level",
            "Press the bar back up to starting position",
        ]
    } else if name.contains("Deadlift") {
        &[
            "Stand with feet hip-width apart, barbell over mid-foot",
            "Bend at hips and knees, grip bar just outside legs",
            "Keep chest up, spine neutral",
            "Drive through heels, extending hips and knees",
            "Keep bar close to body throughout the movement",
            "Stand fully upright at the top, shoulders back",
        ]
    } else {
        &[
            "Set up with proper form and body alignment",
            "Brace core for stability throughout movement",
            "Perform the movement with controlled tempo",
            "Focus on muscle contraction during the exercise",
            "Complete the full range of motion if possible",
        ]
    };

    instructions.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn tips(
    name: &str,
    primary_muscles: &[MuscleGroup],
    equipment: &[Equipment],
) -> Vec<String> {
    let mut tips = vec![
        "Focus on mind-muscle connection",
        "Maintain proper breathing throughout",
        "Don't sacrifice form for heavier weight",
        "Control the eccentric (lowering) portion",
    ];

    if primary_muscles.contains(&MuscleGroup::Chest) {
        tips.push("Focus on squeezing your chest at the top of the movement");
    }
    if primary_muscles.contains(&MuscleGroup::Back) {
        tips.push("Pull with your elbows, not your hands");
    }
    if primary_muscles.contains(&MuscleGroup::Quads)
        || primary_muscles.contains(&MuscleGroup::Hamstrings)
    {
        tips.push("Keep your knees tracking over your toes");
    }
    if equipment.contains(&Equipment::Barbell) {
        tips.push("Ensure even grip width on both sides of the barbell");
    }
    if equipment.contains(&Equipment::Dumbbell) && name.contains("Press") {
        tips.push("Using dumbbells allows for greater range of motion than a barbell");
    }

    tips.into_iter().map(ToString::to_string).collect()
}

const EXERCISES: [ExerciseDefinition; 25] = [
    ExerciseDefinition {
        name: "Barbell Back Squat",
        description: "A compound lower body exercise that targets the quadriceps, hamstrings, and glutes.",
        primary_muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Core],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 1.5,
        alternatives: &["front-squat", "goblet-squat", "hack-squat"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Front Squat",
        description: "A squat variation that emphasizes the quadriceps with the barbell held across the front deltoids.",
        primary_muscles: &[MuscleGroup::Quads],
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Core, MuscleGroup::Shoulders],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 1.2,
        alternatives: &["back-squat", "goblet-squat", "hack-squat"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Barbell Bench Press",
        description: "A compound upper body pushing exercise that primarily targets the chest.",
        primary_muscles: &[MuscleGroup::Chest],
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 1.0,
        alternatives: &["dumbbell-bench-press", "incline-bench-press", "push-up"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Incline Bench Press",
        description: "A bench press variation performed on an inclined bench to emphasize the upper chest.",
        primary_muscles: &[MuscleGroup::Chest],
        secondary_muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 0.8,
        alternatives: &["dumbbell-incline-bench-press", "barbell-bench-press"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Barbell Deadlift",
        description: "A fundamental compound exercise that targets the posterior chain.",
        primary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::Back],
        secondary_muscles: &[
            MuscleGroup::Quads,
            MuscleGroup::Core,
            MuscleGroup::Traps,
            MuscleGroup::Forearms,
        ],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 1.75,
        alternatives: &["romanian-deadlift", "trap-bar-deadlift", "sumo-deadlift"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Romanian Deadlift",
        description: "A deadlift variation that emphasizes the hamstrings and glutes with less knee flexion.",
        primary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        secondary_muscles: &[MuscleGroup::Back, MuscleGroup::Forearms],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 1.25,
        alternatives: &["barbell-deadlift", "stiff-leg-deadlift", "good-morning"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Barbell Row",
        description: "A compound pulling exercise for the back where the torso is bent forward.",
        primary_muscles: &[MuscleGroup::Back, MuscleGroup::Lats],
        secondary_muscles: &[MuscleGroup::Biceps, MuscleGroup::Shoulders, MuscleGroup::Forearms],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 0.7,
        alternatives: &["dumbbell-row", "cable-row", "pull-up"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Overhead Press",
        description: "A vertical pressing movement that targets the shoulders.",
        primary_muscles: &[MuscleGroup::Shoulders],
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Traps, MuscleGroup::Core],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 0.65,
        alternatives: &["dumbbell-overhead-press", "push-press", "seated-barbell-press"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Dumbbell Bench Press",
        description: "A bench press variation using dumbbells for more range of motion.",
        primary_muscles: &[MuscleGroup::Chest],
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.8,
        alternatives: &["barbell-bench-press", "push-up", "machine-chest-press"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Dumbbell Row",
        description: "A unilateral back exercise performed with one arm at a time.",
        primary_muscles: &[MuscleGroup::Back, MuscleGroup::Lats],
        secondary_muscles: &[MuscleGroup::Biceps, MuscleGroup::Shoulders, MuscleGroup::Forearms],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        difficulty: Difficulty::Beginner,
        // per arm
        baseline_strength_ratio: 0.4,
        alternatives: &["barbell-row", "cable-row", "machine-row"],
        unilateral: true,
    },
    ExerciseDefinition {
        name: "Dumbbell Shoulder Press",
        description: "An overhead pressing movement using dumbbells for shoulder development.",
        primary_muscles: &[MuscleGroup::Shoulders],
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Traps],
        equipment: &[Equipment::Dumbbell],
        difficulty: Difficulty::Beginner,
        // per arm
        baseline_strength_ratio: 0.3,
        alternatives: &["barbell-overhead-press", "machine-shoulder-press"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Goblet Squat",
        description: "A beginner-friendly squat variation holding a single dumbbell or kettlebell.",
        primary_muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Core],
        equipment: &[Equipment::Dumbbell, Equipment::Kettlebell],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.5,
        alternatives: &["barbell-back-squat", "front-squat", "bodyweight-squat"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Push-up",
        description: "A fundamental bodyweight exercise for the upper body.",
        primary_muscles: &[MuscleGroup::Chest],
        secondary_muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps, MuscleGroup::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.0,
        alternatives: &["bench-press", "incline-push-up", "decline-push-up"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Pull-up",
        description: "A vertical pulling movement using bodyweight.",
        primary_muscles: &[MuscleGroup::Back, MuscleGroup::Lats],
        secondary_muscles: &[MuscleGroup::Biceps, MuscleGroup::Forearms, MuscleGroup::Shoulders],
        equipment: &[Equipment::Bodyweight, Equipment::PullUpBar],
        difficulty: Difficulty::Intermediate,
        baseline_strength_ratio: 0.0,
        alternatives: &["chin-up", "lat-pulldown", "assisted-pull-up"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Bodyweight Squat",
        description: "A lower body exercise using only bodyweight for resistance.",
        primary_muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.0,
        alternatives: &["goblet-squat", "back-squat", "split-squat"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Lunge",
        description: "A unilateral lower body exercise that develops balance and strength.",
        primary_muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.0,
        alternatives: &["split-squat", "walking-lunge", "bulgarian-split-squat"],
        unilateral: true,
    },
    ExerciseDefinition {
        name: "Lat Pulldown",
        description: "A machine exercise that mimics the pull-up motion.",
        primary_muscles: &[MuscleGroup::Back, MuscleGroup::Lats],
        secondary_muscles: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
        equipment: &[Equipment::Machine, Equipment::Cable],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.7,
        alternatives: &["pull-up", "seated-row", "straight-arm-pulldown"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Leg Press",
        description: "A machine-based lower body pushing exercise.",
        primary_muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 2.0,
        alternatives: &["hack-squat", "barbell-squat", "dumbbell-squat"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Chest Press Machine",
        description: "A machine-based pushing exercise for the chest.",
        primary_muscles: &[MuscleGroup::Chest],
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.9,
        alternatives: &["bench-press", "dumbbell-bench-press", "push-up"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Bicep Curl",
        description: "An isolation exercise for the biceps.",
        primary_muscles: &[MuscleGroup::Biceps],
        secondary_muscles: &[MuscleGroup::Forearms],
        equipment: &[Equipment::Dumbbell, Equipment::Barbell, Equipment::Cable],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.3,
        alternatives: &["hammer-curl", "preacher-curl", "chin-up"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Tricep Pushdown",
        description: "An isolation exercise for the triceps using a cable machine.",
        primary_muscles: &[MuscleGroup::Triceps],
        secondary_muscles: &[],
        equipment: &[Equipment::Cable],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.3,
        alternatives: &["skull-crusher", "tricep-dip", "overhead-tricep-extension"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Leg Extension",
        description: "An isolation exercise for the quadriceps.",
        primary_muscles: &[MuscleGroup::Quads],
        secondary_muscles: &[],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.5,
        alternatives: &["leg-press", "squat", "lunge"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Leg Curl",
        description: "An isolation exercise for the hamstrings.",
        primary_muscles: &[MuscleGroup::Hamstrings],
        secondary_muscles: &[],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.5,
        alternatives: &["romanian-deadlift", "glute-ham-raise", "good-morning"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Lateral Raise",
        description: "An isolation exercise for the lateral deltoids.",
        primary_muscles: &[MuscleGroup::Shoulders],
        secondary_muscles: &[],
        equipment: &[Equipment::Dumbbell, Equipment::Cable],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.1,
        alternatives: &["front-raise", "upright-row", "overhead-press"],
        unilateral: false,
    },
    ExerciseDefinition {
        name: "Calf Raise",
        description: "An isolation exercise for the calves.",
        primary_muscles: &[MuscleGroup::Calves],
        secondary_muscles: &[],
        equipment: &[Equipment::Machine, Equipment::Dumbbell, Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        baseline_strength_ratio: 0.8,
        alternatives: &["seated-calf-raise", "donkey-calf-raise"],
        unilateral: false,
    },
];
