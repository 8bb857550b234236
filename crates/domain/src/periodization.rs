use std::{ops::RangeInclusive, slice::Iter};

use crate::{FitnessGoal, Property, RPE};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum PhaseType {
    Strength,
    Hypertrophy,
    Endurance,
    Deload,
}

impl Property for PhaseType {
    fn iter() -> Iter<'static, PhaseType> {
        static PHASES: [PhaseType; 4] = [
            PhaseType::Strength,
            PhaseType::Hypertrophy,
            PhaseType::Endurance,
            PhaseType::Deload,
        ];
        PHASES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            PhaseType::Strength => "Strength",
            PhaseType::Hypertrophy => "Hypertrophy",
            PhaseType::Endurance => "Endurance",
            PhaseType::Deload => "Deload",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodizationWeek {
    pub week_number: u8,
    pub phase: PhaseType,
    /// Share of maximal effort.
    pub intensity: f32,
    pub sets: RangeInclusive<u32>,
    pub reps: RangeInclusive<u32>,
    pub rpe: RangeInclusive<RPE>,
}

/// Parameters of a week in the repeating four-week cycle of the given goal.
///
/// Week 1 and week 5 map to the same entry. Zero and negative weeks wrap around
/// backwards, so week 0 is the deload week of the previous cycle.
#[must_use]
pub fn week_parameters(goal: FitnessGoal, week_in_cycle: i32) -> &'static PeriodizationWeek {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (i64::from(week_in_cycle) - 1).rem_euclid(4) as usize;
    &cycle(goal)[index]
}

fn cycle(goal: FitnessGoal) -> &'static [PeriodizationWeek; 4] {
    match goal {
        FitnessGoal::Strength => &STRENGTH,
        FitnessGoal::MuscleGain => &MUSCLE_GAIN,
        FitnessGoal::WeightLoss => &WEIGHT_LOSS,
        FitnessGoal::Endurance => &ENDURANCE,
        FitnessGoal::Maintenance => &MAINTENANCE,
    }
}

static STRENGTH: [PeriodizationWeek; 4] = [
    PeriodizationWeek {
        week_number: 1,
        phase: PhaseType::Hypertrophy,
        intensity: 0.75,
        sets: 3..=4,
        reps: 8..=12,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 2,
        phase: PhaseType::Strength,
        intensity: 0.85,
        sets: 4..=5,
        reps: 4..=6,
        rpe: RPE::EIGHT..=RPE::NINE,
    },
    PeriodizationWeek {
        week_number: 3,
        phase: PhaseType::Strength,
        intensity: 0.9,
        sets: 3..=4,
        reps: 2..=4,
        rpe: RPE::NINE..=RPE::TEN,
    },
    PeriodizationWeek {
        week_number: 4,
        phase: PhaseType::Deload,
        intensity: 0.65,
        sets: 2..=3,
        reps: 6..=8,
        rpe: RPE::FIVE..=RPE::SEVEN,
    },
];

static MUSCLE_GAIN: [PeriodizationWeek; 4] = [
    PeriodizationWeek {
        week_number: 1,
        phase: PhaseType::Hypertrophy,
        intensity: 0.75,
        sets: 3..=4,
        reps: 8..=12,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 2,
        phase: PhaseType::Hypertrophy,
        intensity: 0.8,
        sets: 4..=5,
        reps: 8..=12,
        rpe: RPE::EIGHT..=RPE::NINE,
    },
    PeriodizationWeek {
        week_number: 3,
        phase: PhaseType::Strength,
        intensity: 0.85,
        sets: 3..=4,
        reps: 6..=8,
        rpe: RPE::EIGHT..=RPE::NINE,
    },
    PeriodizationWeek {
        week_number: 4,
        phase: PhaseType::Deload,
        intensity: 0.65,
        sets: 2..=3,
        reps: 10..=15,
        rpe: RPE::SIX..=RPE::SEVEN,
    },
];

static WEIGHT_LOSS: [PeriodizationWeek; 4] = [
    PeriodizationWeek {
        week_number: 1,
        phase: PhaseType::Endurance,
        intensity: 0.65,
        sets: 2..=3,
        reps: 15..=20,
        rpe: RPE::SIX..=RPE::SEVEN,
    },
    PeriodizationWeek {
        week_number: 2,
        phase: PhaseType::Hypertrophy,
        intensity: 0.7,
        sets: 3..=4,
        reps: 10..=15,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 3,
        phase: PhaseType::Endurance,
        intensity: 0.7,
        sets: 2..=3,
        reps: 15..=20,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 4,
        phase: PhaseType::Deload,
        intensity: 0.6,
        sets: 2..=3,
        reps: 10..=15,
        rpe: RPE::FIVE..=RPE::SIX,
    },
];

static ENDURANCE: [PeriodizationWeek; 4] = [
    PeriodizationWeek {
        week_number: 1,
        phase: PhaseType::Endurance,
        intensity: 0.65,
        sets: 2..=3,
        reps: 15..=20,
        rpe: RPE::SIX..=RPE::SEVEN,
    },
    PeriodizationWeek {
        week_number: 2,
        phase: PhaseType::Endurance,
        intensity: 0.7,
        sets: 3..=4,
        reps: 15..=20,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 3,
        phase: PhaseType::Hypertrophy,
        intensity: 0.75,
        sets: 3..=4,
        reps: 8..=12,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 4,
        phase: PhaseType::Deload,
        intensity: 0.6,
        sets: 2..=3,
        reps: 12..=15,
        rpe: RPE::FIVE..=RPE::SIX,
    },
];

static MAINTENANCE: [PeriodizationWeek; 4] = [
    PeriodizationWeek {
        week_number: 1,
        phase: PhaseType::Hypertrophy,
        intensity: 0.75,
        sets: 3..=4,
        reps: 8..=12,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 2,
        phase: PhaseType::Strength,
        intensity: 0.8,
        sets: 3..=4,
        reps: 5..=8,
        rpe: RPE::SEVEN..=RPE::EIGHT,
    },
    PeriodizationWeek {
        week_number: 3,
        phase: PhaseType::Endurance,
        intensity: 0.7,
        sets: 2..=3,
        reps: 12..=15,
        rpe: RPE::SIX..=RPE::SEVEN,
    },
    PeriodizationWeek {
        week_number: 4,
        phase: PhaseType::Deload,
        intensity: 0.65,
        sets: 2..=3,
        reps: 8..=12,
        rpe: RPE::FIVE..=RPE::SIX,
    },
];
