pub const CATALOG_JSON: &str = r#"[
    {
        "name": "Barbell Back Squat",
        "muscleGroups": ["quads", "glutes", "hamstrings"],
        "equipment": ["barbell"],
        "difficulty": "intermediate",
        "baselineStrengthRatio": 1.5,
        "alternatives": ["Goblet Squat", "leg-press"]
    },
    {
        "name": "Goblet Squat",
        "muscleGroups": ["quads", "glutes"],
        "equipment": ["dumbbell", "kettlebell"],
        "difficulty": "beginner",
        "baselineStrengthRatio": 0.4,
        "alternatives": ["barbell-back-squat"]
    },
    {
        "name": "Push-up",
        "muscleGroups": ["chest", "triceps"],
        "equipment": ["bodyweight"],
        "difficulty": "beginner",
        "baselineStrengthRatio": 0
    }
]"#;

pub const INVALID_CATALOG_JSON: &str = r#"[
    {
        "name": "Sled Push",
        "muscleGroups": ["quads"],
        "equipment": ["sled"],
        "difficulty": "advanced",
        "baselineStrengthRatio": 1.0,
        "alternatives": []
    },
    {
        "name": "Walking Lunge",
        "muscleGroups": ["legs"],
        "equipment": ["bodyweight"],
        "difficulty": "beginner",
        "baselineStrengthRatio": 0
    },
    {
        "name": "Plank",
        "muscleGroups": ["core"],
        "equipment": ["bodyweight"],
        "difficulty": "beginner",
        "baselineStrengthRatio": 0
    }
]"#;
