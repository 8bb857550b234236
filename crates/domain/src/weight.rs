use crate::{
    Age, Bodyweight, ExperienceLevel, FitnessGoal, Gender, MeasurementSystem, RPE, Reps,
    UserProfile,
};

const MIN_AGE_FACTOR: f32 = 0.5;

/// Recommended load for an exercise, derived from the bodyweight multiple the exercise
/// typically allows and the lifter's profile.
///
/// The result is rounded to the nearest 2.5 kg or 5 lbs.
#[must_use]
pub fn baseline_weight(
    exercise_ratio: f32,
    bodyweight: Bodyweight,
    gender: Gender,
    age: Age,
    experience: ExperienceLevel,
    measurement_system: MeasurementSystem,
) -> f32 {
    let weight = f32::from(bodyweight)
        * exercise_ratio
        * gender_factor(gender)
        * age_factor(age)
        * experience_factor(experience);

    match measurement_system {
        MeasurementSystem::Metric => round_to(weight, 2.5),
        MeasurementSystem::Imperial => round_to(weight, 5.0),
    }
}

#[must_use]
pub fn adjust_for_goal(base_weight: f32, goal: FitnessGoal) -> f32 {
    base_weight * goal_factor(goal)
}

/// Baseline weight adjusted for the goal of the given profile.
#[must_use]
pub fn recommended_weight(exercise_ratio: f32, profile: &UserProfile) -> f32 {
    adjust_for_goal(
        baseline_weight(
            exercise_ratio,
            profile.bodyweight,
            profile.gender,
            profile.age,
            profile.experience,
            profile.measurement_system,
        ),
        profile.goal,
    )
}

/// Load for a single set.
///
/// Warm-up sets ramp up in three tiers depending on the rep target. Working sets are
/// heavier for low rep targets, lighter for high rep targets and scale with the RPE.
#[must_use]
pub fn set_weight(base_weight: f32, target_reps: Reps, target_rpe: RPE, is_warmup: bool) -> f32 {
    let reps = u32::from(target_reps);

    if is_warmup {
        return base_weight
            * if reps > 8 {
                0.5
            } else if reps > 5 {
                0.7
            } else {
                0.9
            };
    }

    #[allow(clippy::cast_precision_loss)]
    let rep_factor = if reps <= 5 {
        1.1 + 0.02 * (5 - reps) as f32
    } else if reps >= 15 {
        0.9 - 0.01 * (reps - 15) as f32
    } else {
        1.0
    };
    let rpe_factor = 0.7 + f32::from(target_rpe) * 0.03;

    base_weight * rep_factor * rpe_factor
}

/// Weight for the next week.
///
/// The weekly progression rate depends on the experience level and is scaled by the
/// perceived exertion and the share of successful sets. The increment is rounded to
/// plate-friendly steps that depend on the current load.
#[must_use]
pub fn progression(
    current_weight: f32,
    experience: ExperienceLevel,
    success_rate: f32,
    rpe: f32,
    measurement_system: MeasurementSystem,
) -> f32 {
    let mut rate = match experience {
        ExperienceLevel::Beginner => 0.05,
        ExperienceLevel::Intermediate => 0.025,
        ExperienceLevel::Advanced => 0.0125,
        ExperienceLevel::Expert => 0.006_25,
    };

    if rpe < 7.0 {
        rate *= 1.2;
    } else if rpe > 8.0 {
        rate *= 0.8;
    }

    if success_rate < 0.8 {
        rate *= 0.75;
    } else if success_rate > 0.95 {
        rate *= 1.2;
    }

    let increment = match measurement_system {
        MeasurementSystem::Metric => {
            if current_weight < 20.0 {
                1.0
            } else {
                2.5
            }
        }
        MeasurementSystem::Imperial => {
            if current_weight < 45.0 {
                2.5
            } else {
                5.0
            }
        }
    };

    current_weight + round_to(current_weight * rate, increment)
}

/// Goal-adjusted weight scaled for RPE 6 to 10, rounded to whole units.
#[must_use]
pub fn rpe_variations(adjusted_weight: f32) -> Vec<(RPE, f32)> {
    [RPE::SIX, RPE::SEVEN, RPE::EIGHT, RPE::NINE, RPE::TEN]
        .into_iter()
        .map(|rpe| {
            (
                rpe,
                (adjusted_weight * (0.9 + f32::from(rpe) * 0.02)).round(),
            )
        })
        .collect()
}

fn gender_factor(gender: Gender) -> f32 {
    match gender {
        Gender::Male => 1.0,
        Gender::Female | Gender::Other => 0.8,
    }
}

#[allow(clippy::cast_precision_loss)]
fn age_factor(age: Age) -> f32 {
    let age = u32::from(age);
    if age > 30 {
        (1.0 - (age - 30) as f32 * 0.005).max(MIN_AGE_FACTOR)
    } else if age < 18 {
        0.8
    } else {
        1.0
    }
}

fn experience_factor(experience: ExperienceLevel) -> f32 {
    match experience {
        ExperienceLevel::Beginner => 0.6,
        ExperienceLevel::Intermediate => 0.8,
        ExperienceLevel::Advanced => 1.0,
        ExperienceLevel::Expert => 1.2,
    }
}

fn goal_factor(goal: FitnessGoal) -> f32 {
    match goal {
        FitnessGoal::WeightLoss => 0.8,
        FitnessGoal::MuscleGain => 0.9,
        FitnessGoal::Strength => 1.1,
        FitnessGoal::Endurance => 0.7,
        FitnessGoal::Maintenance => 1.0,
    }
}

fn round_to(value: f32, increment: f32) -> f32 {
    (value / increment).round() * increment
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Property;

    use super::*;

    fn bodyweight(value: f32) -> Bodyweight {
        Bodyweight::new(value).unwrap()
    }

    fn age(value: u32) -> Age {
        Age::new(value).unwrap()
    }

    fn reps(value: u32) -> Reps {
        Reps::new(value).unwrap()
    }

    #[rstest]
    #[case::intermediate_male(1.5, 70.0, Gender::Male, 30, ExperienceLevel::Intermediate, MeasurementSystem::Metric, 85.0)]
    #[case::female_over_thirty(1.0, 180.0, Gender::Female, 40, ExperienceLevel::Beginner, MeasurementSystem::Imperial, 80.0)]
    #[case::youth(1.0, 60.0, Gender::Male, 16, ExperienceLevel::Advanced, MeasurementSystem::Metric, 47.5)]
    #[case::other_expert(1.0, 80.0, Gender::Other, 25, ExperienceLevel::Expert, MeasurementSystem::Metric, 77.5)]
    #[case::bodyweight_exercise(0.0, 80.0, Gender::Male, 25, ExperienceLevel::Expert, MeasurementSystem::Metric, 0.0)]
    fn test_baseline_weight(
        #[case] ratio: f32,
        #[case] weight: f32,
        #[case] gender: Gender,
        #[case] years: u32,
        #[case] experience: ExperienceLevel,
        #[case] system: MeasurementSystem,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(
            baseline_weight(ratio, bodyweight(weight), gender, age(years), experience, system),
            expected
        );
    }

    #[rstest]
    fn test_baseline_weight_monotonic_in_experience(
        #[values(0.3, 0.8, 1.5, 2.0)] ratio: f32,
        #[values(50.0, 82.5, 140.0)] weight: f32,
        #[values(16, 30, 65)] years: u32,
        #[values(MeasurementSystem::Metric, MeasurementSystem::Imperial)] system: MeasurementSystem,
    ) {
        let weights = ExperienceLevel::iter()
            .map(|experience| {
                baseline_weight(
                    ratio,
                    bodyweight(weight),
                    Gender::Female,
                    age(years),
                    *experience,
                    system,
                )
            })
            .collect::<Vec<_>>();

        assert!(weights.windows(2).all(|w| w[0] <= w[1]), "{weights:?}");
    }

    #[rstest]
    #[case(FitnessGoal::Strength, 93.5)]
    #[case(FitnessGoal::WeightLoss, 68.0)]
    #[case(FitnessGoal::MuscleGain, 76.5)]
    #[case(FitnessGoal::Endurance, 59.5)]
    #[case(FitnessGoal::Maintenance, 85.0)]
    fn test_adjust_for_goal(#[case] goal: FitnessGoal, #[case] expected: f32) {
        assert_approx_eq!(adjust_for_goal(85.0, goal), expected, 1e-4);
    }

    #[test]
    fn test_recommended_weight() {
        let profile = UserProfile {
            bodyweight: bodyweight(70.0),
            gender: Gender::Male,
            age: age(30),
            experience: ExperienceLevel::Intermediate,
            measurement_system: MeasurementSystem::Metric,
            goal: FitnessGoal::Strength,
        };

        assert_approx_eq!(recommended_weight(1.5, &profile), 93.5, 1e-4);
    }

    #[rstest]
    #[case::high_reps(10, 0.5)]
    #[case::nine_reps(9, 0.5)]
    #[case::eight_reps(8, 0.7)]
    #[case::six_reps(6, 0.7)]
    #[case::five_reps(5, 0.9)]
    #[case::low_reps(3, 0.9)]
    fn test_set_weight_warmup(#[case] target_reps: u32, #[case] factor: f32) {
        assert_approx_eq!(
            set_weight(100.0, reps(target_reps), RPE::FOUR, true),
            100.0 * factor,
            1e-4
        );
    }

    #[rstest]
    #[case::five_reps(5, RPE::TEN, 110.0)]
    #[case::three_reps(3, RPE::EIGHT, 107.16)]
    #[case::ten_reps(10, RPE::SEVEN, 91.0)]
    #[case::fifteen_reps(15, RPE::SEVEN, 81.9)]
    #[case::twenty_reps(20, RPE::SIX, 74.8)]
    fn test_set_weight_working(#[case] target_reps: u32, #[case] rpe: RPE, #[case] expected: f32) {
        assert_approx_eq!(set_weight(100.0, reps(target_reps), rpe, false), expected, 1e-3);
    }

    #[test]
    fn test_set_weight_warmup_ignores_rpe() {
        assert_eq!(
            set_weight(80.0, reps(7), RPE::ONE, true),
            set_weight(80.0, reps(7), RPE::TEN, true)
        );
    }

    #[rstest]
    #[case::intermediate(100.0, ExperienceLevel::Intermediate, 0.9, 8.0, MeasurementSystem::Metric, 102.5)]
    #[case::easy_and_successful(100.0, ExperienceLevel::Beginner, 1.0, 6.0, MeasurementSystem::Metric, 107.5)]
    #[case::light_metric(15.0, ExperienceLevel::Beginner, 0.9, 8.0, MeasurementSystem::Metric, 16.0)]
    #[case::hard_and_failing(200.0, ExperienceLevel::Advanced, 0.5, 9.0, MeasurementSystem::Imperial, 200.0)]
    #[case::light_imperial(40.0, ExperienceLevel::Beginner, 0.9, 7.0, MeasurementSystem::Imperial, 42.5)]
    fn test_progression(
        #[case] current: f32,
        #[case] experience: ExperienceLevel,
        #[case] success_rate: f32,
        #[case] rpe: f32,
        #[case] system: MeasurementSystem,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(
            progression(current, experience, success_rate, rpe, system),
            expected
        );
    }

    #[test]
    fn test_rpe_variations() {
        assert_eq!(
            rpe_variations(100.0),
            vec![
                (RPE::SIX, 102.0),
                (RPE::SEVEN, 104.0),
                (RPE::EIGHT, 106.0),
                (RPE::NINE, 108.0),
                (RPE::TEN, 110.0),
            ]
        );
    }

    #[rstest]
    #[case(17, 0.8)]
    #[case(18, 1.0)]
    #[case(30, 1.0)]
    #[case(50, 0.9)]
    #[case(120, 0.55)]
    fn test_age_factor(#[case] years: u32, #[case] expected: f32) {
        assert_approx_eq!(age_factor(age(years)), expected);
    }
}
