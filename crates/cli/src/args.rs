use ironplan_domain::{
    Age, AgeError, Bodyweight, BodyweightError, Difficulty, Equipment, ExperienceLevel,
    FitnessGoal, Gender, MeasurementSystem, MuscleGroup, ParseTagError, RPE, RPEError, parse_tag,
};

pub fn goal(value: &str) -> Result<FitnessGoal, ParseTagError> {
    parse_tag("fitness goal", value)
}

pub fn experience(value: &str) -> Result<ExperienceLevel, ParseTagError> {
    parse_tag("experience level", value)
}

pub fn gender(value: &str) -> Result<Gender, ParseTagError> {
    parse_tag("gender", value)
}

pub fn measurement_system(value: &str) -> Result<MeasurementSystem, ParseTagError> {
    parse_tag("measurement system", value)
}

pub fn equipment(value: &str) -> Result<Equipment, ParseTagError> {
    parse_tag("equipment", value)
}

pub fn muscle_group(value: &str) -> Result<MuscleGroup, ParseTagError> {
    parse_tag("muscle group", value)
}

pub fn difficulty(value: &str) -> Result<Difficulty, ParseTagError> {
    parse_tag("difficulty", value)
}

pub fn bodyweight(value: &str) -> Result<Bodyweight, BodyweightError> {
    Bodyweight::try_from(value)
}

pub fn age(value: &str) -> Result<Age, AgeError> {
    Age::try_from(value)
}

pub fn rpe(value: &str) -> Result<RPE, RPEError> {
    RPE::try_from(value)
}

/// Average RPE of several sets, between 1 and 10.
pub fn average_rpe(value: &str) -> Result<f32, String> {
    match value.trim().parse::<f32>() {
        Ok(rpe) if (1.0..=10.0).contains(&rpe) => Ok(rpe),
        Ok(_) => Err("RPE must be in the range 1.0 to 10.0".to_string()),
        Err(_) => Err("RPE must be a decimal".to_string()),
    }
}

pub fn success_rate(value: &str) -> Result<f32, String> {
    match value.trim().parse::<f32>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => Ok(rate),
        Ok(_) => Err("success rate must be in the range 0.0 to 1.0".to_string()),
        Err(_) => Err("success rate must be a decimal".to_string()),
    }
}

pub fn ratio(value: &str) -> Result<f32, String> {
    match value.trim().parse::<f32>() {
        Ok(ratio) if ratio >= 0.0 && ratio.is_finite() => Ok(ratio),
        Ok(_) => Err("ratio must not be negative".to_string()),
        Err(_) => Err("ratio must be a decimal".to_string()),
    }
}

pub fn weight(value: &str) -> Result<f32, String> {
    match value.trim().parse::<f32>() {
        Ok(weight) if weight > 0.0 && weight < 1000.0 => Ok(weight),
        Ok(_) => Err("weight must be greater than 0 and less than 1000".to_string()),
        Err(_) => Err("weight must be a decimal".to_string()),
    }
}
