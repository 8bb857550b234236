use std::{
    collections::{HashMap, VecDeque},
    fmt::{self, Write},
    ops::RangeInclusive,
};

use ironplan_app::{Settings, log};
use ironplan_domain::{
    Exercise, ExerciseFilter, ExperienceLevel, FitnessGoal, MeasurementSystem, Property, RPE,
    UserProfile, WorkoutPlan, adjust_for_goal, adjust_weight_for_rpe, baseline_weight,
    deload_parameters, periodization_block, progression, rpe_variations, used_equipment,
    used_muscle_groups, week_parameters,
};

pub fn calculate(name: &str, ratio: f32, profile: &UserProfile) -> Result<String, fmt::Error> {
    let unit = profile.measurement_system.unit();
    let baseline = baseline_weight(
        ratio,
        profile.bodyweight,
        profile.gender,
        profile.age,
        profile.experience,
        profile.measurement_system,
    );
    let adjusted = adjust_for_goal(baseline, profile.goal);

    let mut out = String::new();
    writeln!(out, "{name} for {profile}")?;
    writeln!(out, "Baseline weight:      {baseline} {unit}")?;
    writeln!(out, "Goal-adjusted weight: {adjusted:.1} {unit}")?;
    writeln!(out)?;
    writeln!(out, "RPE  Weight")?;
    for (rpe, weight) in rpe_variations(adjusted) {
        writeln!(out, "{:>3}  {weight} {unit}", u8::from(rpe))?;
    }
    Ok(out)
}

pub fn exercise_list(
    exercises: &[Exercise],
    filter: &ExerciseFilter,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let matches = filter.exercises(exercises.iter());

    for exercise in &matches {
        writeln!(
            out,
            "{:<26} {} ({}; {}; {})",
            exercise.id.as_str(),
            exercise.name,
            exercise.difficulty.name(),
            names(&exercise.primary_muscles),
            names(&exercise.equipment),
        )?;
    }

    if matches.is_empty() {
        writeln!(out, "No matching exercises")?;
    }

    Ok(out)
}

/// Tags that can be used to filter the given exercises.
pub fn catalog_tags(exercises: &[Exercise]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Muscle groups:")?;
    for muscle in used_muscle_groups(exercises.iter()) {
        writeln!(out, "  {:<16} {}", muscle.as_ref(), muscle.name())?;
    }
    writeln!(out, "Equipment:")?;
    for equipment in used_equipment(exercises.iter()) {
        writeln!(out, "  {:<16} {}", equipment.as_ref(), equipment.name())?;
    }
    Ok(out)
}

pub fn exercise_details(
    exercise: &Exercise,
    alternatives: &[Exercise],
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} ({})", exercise.name, exercise.id.as_str())?;
    if !exercise.description.is_empty() {
        writeln!(out, "{}", exercise.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Difficulty:        {}", exercise.difficulty.name())?;
    writeln!(out, "Primary muscles:   {}", names(&exercise.primary_muscles))?;
    if !exercise.secondary_muscles.is_empty() {
        writeln!(out, "Secondary muscles: {}", names(&exercise.secondary_muscles))?;
    }
    writeln!(out, "Equipment:         {}", names(&exercise.equipment))?;
    writeln!(
        out,
        "Strength ratio:    {} x bodyweight",
        exercise.baseline_strength_ratio
    )?;
    if exercise.unilateral {
        writeln!(out, "Unilateral:        yes")?;
    }

    writeln!(out, "\nInstructions")?;
    for (i, instruction) in exercise.instructions.iter().enumerate() {
        writeln!(out, "  {}. {instruction}", i + 1)?;
    }
    writeln!(out, "\nTips")?;
    for tip in &exercise.tips {
        writeln!(out, "  - {tip}")?;
    }

    if !alternatives.is_empty() {
        writeln!(out, "\nAlternatives")?;
        for alternative in alternatives {
            writeln!(
                out,
                "  - {} ({})",
                alternative.name,
                alternative.id.as_str()
            )?;
        }
    }

    Ok(out)
}

pub fn workout(
    plan: &WorkoutPlan,
    week_in_cycle: i32,
    exercises: &[Exercise],
    system: MeasurementSystem,
) -> Result<String, fmt::Error> {
    let unit = system.unit();
    let names = exercises
        .iter()
        .map(|e| (&e.id, e.name.as_ref().as_str()))
        .collect::<HashMap<_, &str>>();

    let mut out = String::new();
    writeln!(
        out,
        "{} phase, week {week_in_cycle} ({} min)",
        plan.phase.name(),
        plan.estimated_duration
    )?;

    writeln!(out, "\n{} ({} min)", plan.warmup.name, plan.warmup.minutes)?;
    for instruction in plan.warmup.instructions {
        writeln!(out, "  - {instruction}")?;
    }

    for (i, workout_exercise) in plan.exercises.iter().enumerate() {
        let name = names
            .get(&workout_exercise.exercise_id)
            .copied()
            .unwrap_or(workout_exercise.exercise_id.as_str());
        writeln!(
            out,
            "\n{}. {name} (rest {} s)",
            i + 1,
            workout_exercise.rest_between_sets
        )?;
        for set in &workout_exercise.sets {
            writeln!(
                out,
                "   {:<8} {:>2} x {} {unit} @ RPE {}",
                if set.is_warmup { "warm-up" } else { "working" },
                u32::from(set.reps),
                set.weight,
                set.rpe
            )?;
        }
    }

    if plan.exercises.is_empty() {
        writeln!(out, "\nNo exercises match the available equipment")?;
    }

    writeln!(out, "\n{} ({} min)", plan.cooldown.name, plan.cooldown.minutes)?;
    for instruction in plan.cooldown.instructions {
        writeln!(out, "  - {instruction}")?;
    }

    Ok(out)
}

pub fn progress(
    current_weight: f32,
    experience: ExperienceLevel,
    success_rate: f32,
    rpe: f32,
    system: MeasurementSystem,
    rated: Option<(RPE, RPE)>,
) -> Result<String, fmt::Error> {
    let unit = system.unit();
    let next = progression(current_weight, experience, success_rate, rpe, system);

    let mut out = String::new();
    writeln!(
        out,
        "Next week: {next} {unit} ({:+} {unit})",
        next - current_weight
    )?;
    if let Some((actual, target)) = rated {
        writeln!(
            out,
            "Next session after RPE {actual} instead of {target}: {:.1} {unit}",
            adjust_weight_for_rpe(current_weight, actual, target)
        )?;
    }
    Ok(out)
}

pub fn cycle(goal: FitnessGoal, weeks: u32, current_week: i32) -> Result<String, fmt::Error> {
    let block = periodization_block(weeks);

    let mut out = String::new();
    writeln!(out, "{} cycle, {weeks} weeks", goal.name())?;
    writeln!(out)?;
    writeln!(out, "  Week  Phase         Intensity  Sets  Reps   RPE")?;

    for week in &block {
        let week_number = i32::try_from(week.week_number).unwrap_or(i32::MAX);
        let parameters = week_parameters(goal, week_number);
        writeln!(
            out,
            "{} {:>4}  {:<12} {:>9.0}%  {:<5} {:<6} {}",
            if week_number == current_week { ">" } else { " " },
            week.week_number,
            parameters.phase.name(),
            parameters.intensity * 100.0,
            range(&parameters.sets),
            range(&parameters.reps),
            range(&parameters.rpe),
        )?;
    }

    let deload_weeks = block
        .iter()
        .filter(|w| w.deload)
        .map(|w| w.week_number.to_string())
        .collect::<Vec<_>>();

    if !deload_weeks.is_empty() {
        let deload = deload_parameters();
        writeln!(out)?;
        writeln!(out, "Deload weeks: {}", deload_weeks.join(", "))?;
        writeln!(
            out,
            "  Reduce intensity by {:.0}% and volume by {:.0}%",
            deload.intensity_reduction * 100.0,
            deload.volume_reduction * 100.0
        )?;
        writeln!(out, "  Focus: {}", deload.focus_areas.join(", "))?;
    }

    Ok(out)
}

pub fn settings(settings: &Settings) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Measurement system:  {}", settings.measurement_system)?;
    writeln!(out, "Bodyweight:          {}", settings.bodyweight)?;
    writeln!(out, "Gender:              {}", settings.gender)?;
    writeln!(out, "Age:                 {}", settings.age)?;
    writeln!(out, "Experience:          {}", settings.experience)?;
    writeln!(out, "Goal:                {}", settings.goal)?;
    writeln!(out, "Equipment:           {}", settings.equipment.join(", "))?;
    writeln!(out, "Minutes per workout: {}", settings.minutes_per_workout)?;
    writeln!(out, "Workouts per week:   {}", settings.workouts_per_week)?;
    writeln!(out, "Cycle week:          {}", settings.cycle_week)?;

    match settings.profile() {
        Ok(profile) => writeln!(out, "\nProfile: {profile}")?,
        Err(err) => writeln!(out, "\nProfile is incomplete: {err}")?,
    }

    Ok(out)
}

pub fn log_entries(entries: &VecDeque<log::Entry>, limit: usize) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for entry in entries.iter().take(limit) {
        writeln!(out, "{} {:<5} {}", entry.time, entry.level, entry.message)?;
    }
    Ok(out)
}

fn names<P: Property>(values: &[P]) -> String {
    values
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn range<T: fmt::Display + PartialEq>(range: &RangeInclusive<T>) -> String {
    if range.start() == range.end() {
        range.start().to_string()
    } else {
        format!("{}-{}", range.start(), range.end())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use ironplan_domain::{
        Age, Bodyweight, Equipment, Gender, MuscleGroup, PhaseType, Reps, Set, Time,
        WorkoutExercise, catalog,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            bodyweight: Bodyweight::new(70.0).unwrap(),
            gender: Gender::Male,
            age: Age::new(30).unwrap(),
            experience: ExperienceLevel::Intermediate,
            measurement_system: MeasurementSystem::Metric,
            goal: FitnessGoal::Strength,
        }
    }

    #[test]
    fn test_calculate() {
        assert_eq!(
            calculate("Barbell Back Squat", 1.5, &profile()).unwrap(),
            "Barbell Back Squat for 70 kg, male intermediate, age 30, strength (metric)\n\
             Baseline weight:      85 kg\n\
             Goal-adjusted weight: 93.5 kg\n\
             \n\
             RPE  Weight\n  \
               6  95 kg\n  \
               7  97 kg\n  \
               8  99 kg\n  \
               9  101 kg\n \
              10  103 kg\n"
        );
    }

    #[test]
    fn test_exercise_list() {
        let filter = ExerciseFilter {
            name: "squat".into(),
            equipment: HashSet::from([Equipment::Bodyweight]),
            ..ExerciseFilter::default()
        };

        assert_eq!(
            exercise_list(catalog(), &filter).unwrap(),
            format!(
                "{:<26} Bodyweight Squat (Beginner; Quads, Glutes; Bodyweight)\n",
                "bodyweight-squat"
            )
        );
    }

    #[test]
    fn test_exercise_list_no_match() {
        let filter = ExerciseFilter {
            muscles: HashSet::from([MuscleGroup::FullBody]),
            ..ExerciseFilter::default()
        };

        assert_eq!(
            exercise_list(catalog(), &filter).unwrap(),
            "No matching exercises\n"
        );
    }

    #[test]
    fn test_catalog_tags() {
        let exercises = catalog()
            .iter()
            .filter(|e| e.id.as_str() == "push-up")
            .cloned()
            .collect::<Vec<_>>();

        assert_eq!(
            catalog_tags(&exercises).unwrap(),
            "Muscle groups:\n  \
               chest            Chest\n  \
               shoulders        Shoulders\n  \
               triceps          Triceps\n  \
               core             Core\n\
             Equipment:\n  \
               bodyweight       Bodyweight\n"
        );
    }

    #[test]
    fn test_exercise_details() {
        let exercise = catalog()
            .iter()
            .find(|e| e.id.as_str() == "dumbbell-row")
            .unwrap();
        let alternatives = catalog()
            .iter()
            .filter(|e| exercise.alternatives.contains(&e.id))
            .cloned()
            .collect::<Vec<_>>();

        let details = exercise_details(exercise, &alternatives).unwrap();

        assert!(details.starts_with("Dumbbell Row (dumbbell-row)\n"));
        assert!(details.contains("Unilateral:        yes\n"));
        assert!(details.contains("\nAlternatives\n  - Barbell Row (barbell-row)\n"));
    }

    #[test]
    fn test_workout() {
        let plan = WorkoutPlan {
            phase: PhaseType::Strength,
            exercises: vec![
                WorkoutExercise {
                    exercise_id: "barbell-row".into(),
                    sets: vec![
                        Set {
                            weight: 30.0,
                            ..Set::warmup(Reps::clamped(9), RPE::FOUR)
                        },
                        Set {
                            weight: 60.0,
                            ..Set::working(Reps::clamped(4), RPE::EIGHT)
                        },
                    ],
                    rest_between_sets: Time::clamped(150),
                },
                WorkoutExercise {
                    exercise_id: "hack-squat".into(),
                    sets: vec![Set::working(Reps::clamped(5), RPE::SEVEN)],
                    rest_between_sets: Time::clamped(120),
                },
            ],
            warmup: ironplan_domain::Protocol::warmup(2),
            cooldown: ironplan_domain::Protocol::cooldown(),
            estimated_duration: 21,
        };

        let output = workout(&plan, 2, catalog(), MeasurementSystem::Metric).unwrap();

        assert!(output.starts_with("Strength phase, week 2 (21 min)\n\nDynamic Warm-up (6 min)\n"));
        assert!(output.contains(
            "\n1. Barbell Row (rest 150 s)\n   \
             warm-up   9 x 30 kg @ RPE 4\n   \
             working   4 x 60 kg @ RPE 8\n"
        ));
        assert!(output.contains("\n2. hack-squat (rest 120 s)\n"));
        assert!(output.contains("\nCooldown & Stretching (5 min)\n"));
    }

    #[test]
    fn test_progress() {
        assert_eq!(
            progress(
                100.0,
                ExperienceLevel::Beginner,
                1.0,
                6.5,
                MeasurementSystem::Metric,
                Some((RPE::SIX, RPE::EIGHT))
            )
            .unwrap(),
            "Next week: 107.5 kg (+7.5 kg)\n\
             Next session after RPE 6 instead of 8: 105.0 kg\n"
        );
    }

    #[test]
    fn test_cycle() {
        let output = cycle(FitnessGoal::Strength, 8, 2).unwrap();
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Strength cycle, 8 weeks");
        assert_eq!(lines.len(), 3 + 8 + 4);
        assert!(lines[4].starts_with(">    2  "));
        assert!(lines[6].contains("Deload"));
        assert!(lines[10].contains("Deload"));
        assert_eq!(lines[12], "Deload weeks: 4, 8");
        assert_eq!(lines[13], "  Reduce intensity by 30% and volume by 40%");
    }

    #[test]
    fn test_cycle_without_deload() {
        let output = cycle(FitnessGoal::Endurance, 3, 1).unwrap();

        assert_eq!(output.lines().count(), 3 + 3);
        assert!(!output.contains("Deload weeks"));
    }

    #[test]
    fn test_settings() {
        let output = settings(&Settings::default()).unwrap();

        assert!(output.contains("Equipment:           bodyweight, dumbbell\n"));
        assert!(
            output.ends_with("\nProfile: 75 kg, male beginner, age 30, maintenance (metric)\n")
        );
    }

    #[test]
    fn test_settings_invalid_profile() {
        let output = settings(&Settings {
            age: 0,
            ..Settings::default()
        })
        .unwrap();

        assert!(output.ends_with(
            "\nProfile is incomplete: invalid age: Age must be in the range 1 to 120\n"
        ));
    }

    #[test]
    fn test_log_entries() {
        let entries = VecDeque::from([
            log::Entry {
                time: "Oct 19 08:00:02".into(),
                level: ::log::Level::Warn,
                message: "skipping exercise".into(),
            },
            log::Entry {
                time: "Oct 19 08:00:01".into(),
                level: ::log::Level::Error,
                message: "failed to read catalog".into(),
            },
        ]);

        assert_eq!(
            log_entries(&entries, 1).unwrap(),
            "Oct 19 08:00:02 WARN  skipping exercise\n"
        );
    }
}
