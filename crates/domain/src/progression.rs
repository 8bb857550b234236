use std::fmt;

use crate::{ExperienceLevel, RPE, WorkoutExercise};

const RECENT_WORKOUTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseProgression {
    /// Relative weight increase per workout.
    pub rate: f32,
    /// Readiness for progression between 0 and 100.
    pub readiness: f32,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    NeedMoreData,
    IncreaseWeight,
    KeepWeight,
    FocusOnTechnique,
    ReduceWeight,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recommendation::NeedMoreData => "Need more workout data to calculate progression",
            Recommendation::IncreaseWeight => {
                "Ready for progression. Increase weight for next workout."
            }
            Recommendation::KeepWeight => "Making progress. Continue with current weight.",
            Recommendation::FocusOnTechnique => {
                "Adapting to current load. Focus on form and technique."
            }
            Recommendation::ReduceWeight => {
                "Struggling with current weight. Consider reducing weight slightly."
            }
        })
    }
}

/// Progression analysis based on the recorded sets of the last three workouts of an
/// exercise.
///
/// Only completed working sets are considered. Sets without a recorded RPE are ignored
/// for the average RPE, which defaults to 7.
#[must_use]
pub fn exercise_progression(
    history: &[WorkoutExercise],
    experience: ExperienceLevel,
) -> ExerciseProgression {
    if history.len() < 2 {
        return ExerciseProgression {
            rate: 0.0,
            readiness: 0.0,
            recommendation: Recommendation::NeedMoreData,
        };
    }

    let recent = &history[history.len().saturating_sub(RECENT_WORKOUTS)..];
    let sets = recent
        .iter()
        .flat_map(WorkoutExercise::working_sets)
        .filter(|s| s.completed)
        .collect::<Vec<_>>();

    #[allow(clippy::cast_precision_loss)]
    let success_rate = if sets.is_empty() {
        0.0
    } else {
        sets.iter().filter(|s| s.is_successful()).count() as f32 / sets.len() as f32
    };
    let average_rpe = RPE::avg(&sets.iter().filter_map(|s| s.actual_rpe).collect::<Vec<_>>())
        .unwrap_or(7.0);

    let mut rate = match experience {
        ExperienceLevel::Beginner => 0.025,
        ExperienceLevel::Intermediate => 0.015,
        ExperienceLevel::Advanced => 0.0075,
        ExperienceLevel::Expert => 0.005,
    };

    if success_rate < 0.7 {
        rate *= 0.5;
    } else if success_rate > 0.9 {
        rate *= 1.5;
    }

    if average_rpe < 7.0 {
        rate *= 1.2;
    } else if average_rpe > 8.0 {
        rate *= 0.8;
    }

    let readiness = (success_rate * 70.0 + (10.0 - average_rpe) * 3.0).clamp(0.0, 100.0);
    let recommendation = if readiness > 80.0 {
        Recommendation::IncreaseWeight
    } else if readiness > 60.0 {
        Recommendation::KeepWeight
    } else if readiness > 40.0 {
        Recommendation::FocusOnTechnique
    } else {
        Recommendation::ReduceWeight
    };

    ExerciseProgression {
        rate,
        readiness,
        recommendation,
    }
}

/// Weight for the next session after a set was rated differently than planned.
#[must_use]
pub fn adjust_weight_for_rpe(current_weight: f32, actual_rpe: RPE, target_rpe: RPE) -> f32 {
    let difference = i16::from(u8::from(actual_rpe)) - i16::from(u8::from(target_rpe));

    current_weight
        * match difference {
            ..=-2 => 1.05,
            -1 => 1.025,
            0 => 1.0,
            1 => 0.975,
            2.. => 0.95,
        }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWeek {
    pub week_number: u32,
    pub deload: bool,
}

/// Training block of the given length with a deload in every fourth week.
#[must_use]
pub fn periodization_block(weeks: u32) -> Vec<BlockWeek> {
    (1..=weeks)
        .map(|week_number| BlockWeek {
            week_number,
            deload: week_number % 4 == 0,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeloadParameters {
    pub intensity_reduction: f32,
    pub volume_reduction: f32,
    pub focus_areas: &'static [&'static str],
}

#[must_use]
pub fn deload_parameters() -> DeloadParameters {
    DeloadParameters {
        intensity_reduction: 0.3,
        volume_reduction: 0.4,
        focus_areas: &["Mobility work", "Active recovery", "Technique refinement"],
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Reps, Set, Time};

    use super::*;

    fn set(reps: u32, actual_reps: Option<u32>, actual_rpe: Option<RPE>) -> Set {
        Set {
            completed: actual_reps.is_some(),
            actual_reps: actual_reps.map(Reps::clamped),
            actual_rpe,
            ..Set::working(Reps::clamped(reps), RPE::EIGHT)
        }
    }

    fn workout(sets: Vec<Set>) -> WorkoutExercise {
        WorkoutExercise {
            exercise_id: "barbell-row".into(),
            sets,
            rest_between_sets: Time::clamped(90),
        }
    }

    fn successful_workout(rpe: RPE) -> WorkoutExercise {
        workout(vec![
            Set {
                completed: true,
                ..Set::warmup(Reps::clamped(13), RPE::FOUR)
            },
            set(8, Some(8), Some(rpe)),
            set(8, Some(9), Some(rpe)),
            set(8, Some(8), Some(rpe)),
        ])
    }

    fn failed_workout() -> WorkoutExercise {
        workout(vec![
            set(8, Some(5), Some(RPE::NINE)),
            set(8, Some(4), Some(RPE::NINE)),
            set(8, None, None),
        ])
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single_workout(vec![successful_workout(RPE::SEVEN)])]
    fn test_exercise_progression_need_more_data(#[case] history: Vec<WorkoutExercise>) {
        assert_eq!(
            exercise_progression(&history, ExperienceLevel::Beginner),
            ExerciseProgression {
                rate: 0.0,
                readiness: 0.0,
                recommendation: Recommendation::NeedMoreData,
            }
        );
    }

    #[rstest]
    #[case::easy(
        vec![successful_workout(RPE::SIX), successful_workout(RPE::SIX)],
        ExperienceLevel::Intermediate,
        0.027,
        82.0,
        Recommendation::IncreaseWeight
    )]
    #[case::on_target(
        vec![successful_workout(RPE::SEVEN), successful_workout(RPE::SEVEN)],
        ExperienceLevel::Intermediate,
        0.0225,
        79.0,
        Recommendation::KeepWeight
    )]
    #[case::mixed(
        vec![
            workout(vec![set(8, Some(8), Some(RPE::EIGHT)), set(8, Some(6), Some(RPE::EIGHT))]),
            workout(vec![set(8, Some(8), Some(RPE::EIGHT)), set(8, Some(7), Some(RPE::EIGHT))]),
        ],
        ExperienceLevel::Advanced,
        0.00375,
        41.0,
        Recommendation::FocusOnTechnique
    )]
    #[case::failed(
        vec![failed_workout(), failed_workout()],
        ExperienceLevel::Beginner,
        0.01,
        3.0,
        Recommendation::ReduceWeight
    )]
    #[case::only_recent_workouts(
        vec![
            failed_workout(),
            successful_workout(RPE::SIX),
            successful_workout(RPE::SIX),
            successful_workout(RPE::SIX),
        ],
        ExperienceLevel::Intermediate,
        0.027,
        82.0,
        Recommendation::IncreaseWeight
    )]
    #[case::nothing_completed(
        vec![workout(vec![set(8, None, None)]), workout(vec![set(8, None, None)])],
        ExperienceLevel::Expert,
        0.0025,
        9.0,
        Recommendation::ReduceWeight
    )]
    fn test_exercise_progression(
        #[case] history: Vec<WorkoutExercise>,
        #[case] experience: ExperienceLevel,
        #[case] rate: f32,
        #[case] readiness: f32,
        #[case] recommendation: Recommendation,
    ) {
        let progression = exercise_progression(&history, experience);

        assert_approx_eq!(progression.rate, rate, 1e-5);
        assert_approx_eq!(progression.readiness, readiness, 1e-3);
        assert_eq!(progression.recommendation, recommendation);
    }

    #[rstest]
    #[case(RPE::EIGHT, RPE::EIGHT, 100.0)]
    #[case(RPE::SEVEN, RPE::EIGHT, 102.5)]
    #[case(RPE::SIX, RPE::EIGHT, 105.0)]
    #[case(RPE::ONE, RPE::EIGHT, 105.0)]
    #[case(RPE::NINE, RPE::EIGHT, 97.5)]
    #[case(RPE::TEN, RPE::EIGHT, 95.0)]
    fn test_adjust_weight_for_rpe(
        #[case] actual: RPE,
        #[case] target: RPE,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(adjust_weight_for_rpe(100.0, actual, target), expected, 1e-4);
    }

    #[test]
    fn test_periodization_block() {
        let block = periodization_block(9);

        assert_eq!(block.len(), 9);
        assert_eq!(
            block
                .iter()
                .filter(|w| w.deload)
                .map(|w| w.week_number)
                .collect::<Vec<_>>(),
            vec![4, 8]
        );
        assert_eq!(
            block[0],
            BlockWeek {
                week_number: 1,
                deload: false
            }
        );
        assert!(periodization_block(0).is_empty());
    }

    #[test]
    fn test_deload_parameters() {
        let parameters = deload_parameters();

        assert_approx_eq!(parameters.intensity_reduction, 0.3);
        assert_approx_eq!(parameters.volume_reduction, 0.4);
        assert_eq!(parameters.focus_areas.len(), 3);
    }

    #[test]
    fn test_recommendation_display() {
        assert_eq!(
            Recommendation::IncreaseWeight.to_string(),
            "Ready for progression. Increase weight for next workout."
        );
    }
}
