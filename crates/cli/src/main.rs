#![warn(clippy::pedantic)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use futures::executor::block_on;
use ironplan_app::{Settings, SettingsService, log::Service as _};
use ironplan_domain::{
    Age, Bodyweight, Difficulty, Equipment, ExerciseFilter, ExerciseID, ExerciseService,
    ExperienceLevel, FitnessGoal, Gender, MeasurementSystem, MuscleGroup, RPE, WorkoutService,
};
use ironplan_storage::{BuiltinCatalog, Catalog, JsonCatalog, file::Config};
use log::{LevelFilter, debug};
use rand::{SeedableRng, rngs::StdRng};

mod args;
mod commands;

#[derive(Parser, Debug)]
#[command(name = "ironplan", version, about = "Plan strength training workouts")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Exercise catalog as JSON file instead of the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory containing settings and log
    #[arg(long, global = true, env = "IRONPLAN_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommended weights for an exercise or a bodyweight ratio
    Calculate(CalculateArgs),
    /// Browse the exercise catalog
    Exercises(ExercisesArgs),
    /// Generate a workout with weights
    Generate(GenerateArgs),
    /// Weight for next week
    Progress(ProgressArgs),
    /// Periodization block with the parameters of each week
    Cycle(CycleArgs),
    /// Show or change settings
    Settings(SettingsArgs),
    /// Recent log entries
    Log {
        #[arg(long, short = 'n', default_value_t = 20)]
        limit: usize,
    },
}

/// Overrides of the stored profile.
#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// Bodyweight in the configured unit
    #[arg(long, value_parser = args::bodyweight)]
    bodyweight: Option<Bodyweight>,
    #[arg(long, value_parser = args::gender)]
    gender: Option<Gender>,
    #[arg(long, value_parser = args::age)]
    age: Option<Age>,
    #[arg(long, value_parser = args::experience)]
    experience: Option<ExperienceLevel>,
    #[arg(long, value_parser = args::goal)]
    goal: Option<FitnessGoal>,
    /// Measurement system (metric, imperial)
    #[arg(long, value_parser = args::measurement_system)]
    units: Option<MeasurementSystem>,
}

impl ProfileArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(bodyweight) = self.bodyweight {
            settings.bodyweight = f32::from(bodyweight);
        }
        if let Some(gender) = self.gender {
            settings.gender = gender.to_string();
        }
        if let Some(age) = self.age {
            settings.age = u32::from(age);
        }
        if let Some(experience) = self.experience {
            settings.experience = experience.to_string();
        }
        if let Some(goal) = self.goal {
            settings.goal = goal.to_string();
        }
        if let Some(units) = self.units {
            settings.measurement_system = units.to_string();
        }
    }

    fn is_empty(&self) -> bool {
        self.bodyweight.is_none()
            && self.gender.is_none()
            && self.age.is_none()
            && self.experience.is_none()
            && self.goal.is_none()
            && self.units.is_none()
    }
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Exercise ID, e.g. barbell-back-squat
    #[arg(required_unless_present = "ratio", conflicts_with = "ratio")]
    exercise: Option<String>,
    /// Load as multiple of bodyweight
    #[arg(long, value_parser = args::ratio)]
    ratio: Option<f32>,
    #[command(flatten)]
    profile: ProfileArgs,
}

#[derive(Args, Debug)]
struct ExercisesArgs {
    /// Show details and alternatives of a single exercise
    id: Option<String>,
    /// Part of the exercise name
    #[arg(long, short)]
    search: Option<String>,
    #[arg(long = "muscle", value_parser = args::muscle_group, value_delimiter = ',')]
    muscles: Vec<MuscleGroup>,
    #[arg(long, value_parser = args::equipment, value_delimiter = ',')]
    equipment: Vec<Equipment>,
    #[arg(long, value_parser = args::difficulty, value_delimiter = ',')]
    difficulty: Vec<Difficulty>,
    /// List the muscle groups and equipment of the catalog
    #[arg(long, conflicts_with = "id")]
    tags: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    profile: ProfileArgs,
    /// Available time in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=600))]
    minutes: Option<u32>,
    /// Week of the training cycle
    #[arg(long, allow_negative_numbers = true)]
    week: Option<i32>,
    /// Available equipment, replaces the stored equipment
    #[arg(long, value_parser = args::equipment, value_delimiter = ',')]
    equipment: Vec<Equipment>,
    /// Muscle groups to focus on
    #[arg(long = "muscle", value_parser = args::muscle_group, value_delimiter = ',')]
    muscles: Vec<MuscleGroup>,
    /// Exercise IDs to leave out
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,
    /// Seed for a reproducible workout
    #[arg(long)]
    seed: Option<u64>,
    /// Store the following week as current cycle week
    #[arg(long)]
    advance: bool,
}

#[derive(Args, Debug)]
struct ProgressArgs {
    /// Weight lifted this week
    #[arg(long, value_parser = args::weight)]
    weight: f32,
    /// Share of sets with all target reps
    #[arg(long, default_value = "1.0", value_parser = args::success_rate)]
    success_rate: f32,
    /// Average RPE of this week
    #[arg(long, default_value = "7.5", value_parser = args::average_rpe)]
    rpe: f32,
    #[arg(long, value_parser = args::experience)]
    experience: Option<ExperienceLevel>,
    #[arg(long, value_parser = args::measurement_system)]
    units: Option<MeasurementSystem>,
    /// RPE of the last set
    #[arg(long, value_parser = args::rpe, requires = "target_rpe")]
    actual_rpe: Option<RPE>,
    /// Planned RPE of the last set
    #[arg(long, value_parser = args::rpe, requires = "actual_rpe")]
    target_rpe: Option<RPE>,
}

#[derive(Args, Debug)]
struct CycleArgs {
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=52))]
    weeks: u32,
    #[arg(long, value_parser = args::goal)]
    goal: Option<FitnessGoal>,
}

#[derive(Args, Debug)]
struct SettingsArgs {
    #[command(flatten)]
    profile: ProfileArgs,
    #[arg(long, value_parser = args::equipment, value_delimiter = ',')]
    equipment: Vec<Equipment>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=600))]
    minutes: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=14))]
    workouts_per_week: Option<u32>,
    /// Current week of the training cycle
    #[arg(long, allow_negative_numbers = true, conflicts_with = "next_week")]
    week: Option<i32>,
    /// Move to the next week of the training cycle
    #[arg(long)]
    next_week: bool,
}

impl SettingsArgs {
    fn apply(&self, settings: &mut Settings) -> bool {
        if self.profile.is_empty()
            && self.equipment.is_empty()
            && self.minutes.is_none()
            && self.workouts_per_week.is_none()
            && self.week.is_none()
            && !self.next_week
        {
            return false;
        }

        self.profile.apply(settings);
        if !self.equipment.is_empty() {
            settings.equipment = self.equipment.iter().map(ToString::to_string).collect();
        }
        if let Some(minutes) = self.minutes {
            settings.minutes_per_workout = minutes;
        }
        if let Some(workouts_per_week) = self.workouts_per_week {
            settings.workouts_per_week = workouts_per_week;
        }
        if let Some(week) = self.week {
            settings.cycle_week = week;
        }
        if self.next_week {
            settings.advance_week();
        }

        true
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::new(config_dir(cli.config_dir.clone())?);

    init_logger(&config, cli.verbose)?;

    print!("{}", run(cli, &config)?);

    Ok(())
}

fn init_logger(config: &Config, verbose: u8) -> anyhow::Result<()> {
    ironplan_app::log::init(Arc::new(Mutex::new(config.log())), log_level(verbose))
        .map_err(|err| anyhow::anyhow!("failed to initialize logger: {err}"))
}

fn config_dir(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => directories::ProjectDirs::from("org", "ironplan", "ironplan")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .context("failed to determine configuration directory"),
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let catalog = match cli.catalog {
        Some(path) => Catalog::Json(JsonCatalog::new(path)),
        None => Catalog::Builtin(BuiltinCatalog),
    };
    let exercises = ironplan_domain::Service::new(catalog);
    let app = ironplan_app::Service::new(config.clone());
    let mut settings = block_on(app.get_settings()).context("failed to read settings")?;

    let output = match cli.command {
        Command::Calculate(args) => {
            args.profile.apply(&mut settings);
            let profile = settings.profile()?;
            let (name, ratio) = match (args.exercise, args.ratio) {
                (Some(id), _) => {
                    let exercise = block_on(exercises.get_exercise(&ExerciseID::from(id.as_str())))
                        .with_context(|| format!("unknown exercise \"{id}\""))?;
                    (exercise.name.to_string(), exercise.baseline_strength_ratio)
                }
                (None, Some(ratio)) => (format!("Ratio {ratio}"), ratio),
                (None, None) => bail!("either an exercise or --ratio is required"),
            };
            commands::calculate(&name, ratio, &profile)?
        }
        Command::Exercises(args) => match args.id {
            Some(id) => {
                let id = ExerciseID::from(id.as_str());
                let exercise = block_on(exercises.get_exercise(&id))
                    .with_context(|| format!("unknown exercise \"{id}\""))?;
                let alternatives = block_on(exercises.get_alternatives(&id))?;
                commands::exercise_details(&exercise, &alternatives)?
            }
            None if args.tags => commands::catalog_tags(&block_on(exercises.get_exercises())?)?,
            None => {
                let filter = ExerciseFilter {
                    name: args.search.unwrap_or_default(),
                    muscles: args.muscles.into_iter().collect(),
                    equipment: args.equipment.into_iter().collect(),
                    difficulty: args.difficulty.into_iter().collect(),
                };
                commands::exercise_list(&block_on(exercises.get_exercises())?, &filter)?
            }
        },
        Command::Generate(args) => {
            args.profile.apply(&mut settings);
            if let Some(minutes) = args.minutes {
                settings.minutes_per_workout = minutes;
            }
            if let Some(week) = args.week {
                settings.cycle_week = week;
            }
            if !args.equipment.is_empty() {
                settings.equipment = args.equipment.iter().map(ToString::to_string).collect();
            }

            let profile = settings.profile()?;
            let mut request = settings.workout_request()?;
            request.muscle_groups = args.muscles;
            request.excluded = args
                .exclude
                .iter()
                .map(|id| ExerciseID::from(id.as_str()))
                .collect();

            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let plan = block_on(exercises.generate_workout(&request, &profile, &mut rng))?;
            let output = commands::workout(
                &plan,
                request.week_in_cycle,
                &block_on(exercises.get_exercises())?,
                profile.measurement_system,
            )?;

            if args.advance {
                let mut stored = block_on(app.get_settings())?;
                stored.cycle_week = request.week_in_cycle;
                stored.advance_week();
                debug!("advancing to week {}", stored.cycle_week);
                block_on(app.set_settings(stored)).context("failed to save settings")?;
            }

            output
        }
        Command::Progress(args) => {
            let experience = args.experience.map_or_else(|| settings.experience(), Ok)?;
            let system = args
                .units
                .map_or_else(|| settings.measurement_system(), Ok)?;
            commands::progress(
                args.weight,
                experience,
                args.success_rate,
                args.rpe,
                system,
                args.actual_rpe.zip(args.target_rpe),
            )?
        }
        Command::Cycle(args) => {
            let goal = args.goal.map_or_else(|| settings.goal(), Ok)?;
            commands::cycle(goal, args.weeks, settings.cycle_week)?
        }
        Command::Settings(args) => {
            if args.apply(&mut settings) {
                block_on(app.set_settings(settings.clone())).context("failed to save settings")?;
                debug!("saved settings to {}", config.settings_path().display());
            }
            commands::settings(&settings)?
        }
        Command::Log { limit } => commands::log_entries(
            &ironplan_app::Service::new(config.log()).get_log_entries()?,
            limit,
        )?,
    };

    Ok(output)
}
