// ABOUTME: Workout plan catalog and text formatter for the workout specialist
// ABOUTME: (goal, level) selects the program; equipment selects the exercise list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Write as _};

use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{Equipment, ExperienceLevel, FitnessGoal, WorkoutPlanRequest};
use tracing::debug;

/// Whether a program is built around lifting or conditioning work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingFocus {
    /// Strength and hypertrophy work
    Resistance,
    /// Cardio and metabolic work
    Conditioning,
}

impl TrainingFocus {
    /// Focus of a goal's program
    #[must_use]
    pub const fn for_goal(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::WeightLoss | FitnessGoal::Endurance | FitnessGoal::Performance => {
                Self::Conditioning
            }
            FitnessGoal::MuscleGain
            | FitnessGoal::Strength
            | FitnessGoal::Maintenance
            | FitnessGoal::GeneralFitness => Self::Resistance,
        }
    }
}

/// Program headline, completed with the number of training days
const fn program_headline(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::WeightLoss => "fat burning program with cardio and strength training",
        FitnessGoal::MuscleGain => "muscle building program with progressive overload",
        FitnessGoal::Strength => "strength training program focusing on compound movements",
        FitnessGoal::Endurance => "cardiovascular endurance program",
        FitnessGoal::GeneralFitness => "balanced fitness routine for overall health",
        FitnessGoal::Maintenance => "maintenance program that holds current fitness",
        FitnessGoal::Performance => "sport performance program with power and conditioning",
    }
}

/// Weekly structure for a goal at an experience level
const fn program_structure(goal: FitnessGoal, level: ExperienceLevel) -> &'static str {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    match (goal, level) {
        (FitnessGoal::WeightLoss, Beginner) => {
            "full-body circuits with brisk walking or cycling between sessions"
        }
        (FitnessGoal::WeightLoss, Intermediate) => {
            "upper/lower strength days plus two interval cardio sessions"
        }
        (FitnessGoal::WeightLoss, Advanced) => {
            "strength supersets, HIIT finishers and one long steady-state session"
        }
        (FitnessGoal::MuscleGain, Beginner) => "full-body sessions, 3 sets of 8-12 reps",
        (FitnessGoal::MuscleGain, Intermediate) => {
            "upper/lower split, 3-4 sets of 8-12 reps with weekly load increases"
        }
        (FitnessGoal::MuscleGain, Advanced) => {
            "push/pull/legs split with high-volume accessory work and deload every 5th week"
        }
        (FitnessGoal::Strength, Beginner) => "linear progression on squat, bench press and deadlift",
        (FitnessGoal::Strength, Intermediate) => {
            "heavy/light weekly undulation on the main lifts, 3-5 reps"
        }
        (FitnessGoal::Strength, Advanced) => {
            "block periodization: accumulation, intensification and peaking phases"
        }
        (FitnessGoal::Endurance, Beginner) => "run/walk intervals building to 30 continuous minutes",
        (FitnessGoal::Endurance, Intermediate) => {
            "easy aerobic base, one tempo session and one long session per week"
        }
        (FitnessGoal::Endurance, Advanced) => {
            "polarized training: 80% easy volume, 20% threshold and VO2max intervals"
        }
        (FitnessGoal::GeneralFitness, Beginner) => {
            "full-body strength plus 20 minutes of moderate cardio"
        }
        (FitnessGoal::GeneralFitness, Intermediate) => {
            "alternating strength and cardio days with one mobility session"
        }
        (FitnessGoal::GeneralFitness, Advanced) => {
            "mixed-modal training combining lifting, intervals and skill work"
        }
        (FitnessGoal::Maintenance, Beginner) => "two full-body sessions and daily walking",
        (FitnessGoal::Maintenance, Intermediate) => {
            "full-body strength at current loads plus steady cardio"
        }
        (FitnessGoal::Maintenance, Advanced) => {
            "reduced-volume split that keeps intensity on the main lifts"
        }
        (FitnessGoal::Performance, Beginner) => {
            "movement skills, basic plyometrics and aerobic conditioning"
        }
        (FitnessGoal::Performance, Intermediate) => {
            "power training, sprint intervals and sport-specific conditioning"
        }
        (FitnessGoal::Performance, Advanced) => {
            "periodized power, speed and repeated-sprint work around the competition calendar"
        }
    }
}

const fn equipment_note(equipment: Equipment) -> &'static str {
    match equipment {
        Equipment::None => "Bodyweight exercises only - no equipment needed",
        Equipment::Basic => "Using dumbbells, resistance bands, and bodyweight exercises",
        Equipment::Gym => "Full gym equipment available - machines, free weights, cardio",
        Equipment::HomeGym => "Home gym setup with weights, machines, and accessories",
    }
}

/// Exercise list for a focus and equipment combination
#[must_use]
pub const fn exercise_list(focus: TrainingFocus, equipment: Equipment) -> &'static [&'static str] {
    match (focus, equipment) {
        (TrainingFocus::Resistance, Equipment::None) => &[
            "Push-ups",
            "Bodyweight squats",
            "Reverse lunges",
            "Pike push-ups",
            "Glute bridges",
            "Plank",
        ],
        (TrainingFocus::Resistance, Equipment::Basic) => &[
            "Dumbbell goblet squat",
            "Dumbbell bench or floor press",
            "One-arm dumbbell row",
            "Dumbbell Romanian deadlift",
            "Band pull-aparts",
            "Dumbbell shoulder press",
        ],
        (TrainingFocus::Resistance, Equipment::Gym) => &[
            "Barbell back squat",
            "Barbell bench press",
            "Deadlift",
            "Lat pulldown",
            "Leg press",
            "Cable row",
        ],
        (TrainingFocus::Resistance, Equipment::HomeGym) => &[
            "Rack squat",
            "Bench press",
            "Trap bar deadlift",
            "Pull-ups",
            "Dumbbell incline press",
            "Cable or band face pulls",
        ],
        (TrainingFocus::Conditioning, Equipment::None) => &[
            "Burpees",
            "Jumping jacks",
            "Mountain climbers",
            "High knees",
            "Jump squats",
            "Brisk walking or running",
        ],
        (TrainingFocus::Conditioning, Equipment::Basic) => &[
            "Dumbbell thrusters",
            "Jump rope intervals",
            "Kettlebell or dumbbell swings",
            "Band-resisted sprints",
            "Renegade rows",
            "Running or cycling",
        ],
        (TrainingFocus::Conditioning, Equipment::Gym) => &[
            "Rowing machine intervals",
            "Treadmill tempo runs",
            "Assault bike sprints",
            "Sled pushes",
            "Stair climber",
            "Circuit on machines",
        ],
        (TrainingFocus::Conditioning, Equipment::HomeGym) => &[
            "Stationary bike intervals",
            "Kettlebell complexes",
            "Barbell complexes",
            "Rower or ski-erg",
            "Box jumps",
            "Battle ropes",
        ],
    }
}

const fn level_recommendations(level: ExperienceLevel) -> [&'static str; 4] {
    match level {
        ExperienceLevel::Beginner => [
            "Start with lighter weights and focus on form",
            "Leave 2-3 reps in reserve on every set",
            "Include warm-up and cool-down in each session",
            "Track progress weekly",
        ],
        ExperienceLevel::Intermediate => [
            "Gradually increase intensity over time",
            "Log loads and reps to guide progression",
            "Include warm-up and cool-down in each session",
            "Schedule a lighter week every 4-6 weeks",
        ],
        ExperienceLevel::Advanced => [
            "Periodize intensity and volume across training blocks",
            "Monitor recovery markers and adjust load accordingly",
            "Include warm-up and cool-down in each session",
            "Plan deloads before fatigue accumulates",
        ],
    }
}

/// Render a workout plan
///
/// The request type already guarantees `days_per_week` is 1-7, so every
/// request has a plan.
///
/// # Errors
///
/// Returns an error only if writing to the output buffer fails
pub fn format_workout_plan(req: &WorkoutPlanRequest) -> AppResult<String> {
    let goal = req.goal();
    let level = req.level();
    let days = req.days_per_week();
    let focus = TrainingFocus::for_goal(goal);

    let mut out = String::new();
    render(&mut out, *req, focus)
        .map_err(|e| AppError::internal(format!("Failed to render workout plan: {e}")))?;

    debug!(
        goal = goal.as_str(),
        level = level.as_str(),
        days,
        "Formatted workout plan"
    );
    Ok(out)
}

fn render(out: &mut String, req: WorkoutPlanRequest, focus: TrainingFocus) -> fmt::Result {
    let goal = req.goal();
    let level = req.level();
    let days = req.days_per_week();

    writeln!(out, "WORKOUT PLAN CREATED:")?;
    writeln!(out, "Goal: {}", goal.label())?;
    writeln!(out, "Level: {}", level.label())?;
    writeln!(out, "Schedule: {days} days per week")?;
    writeln!(out, "Equipment: {}", equipment_note(req.equipment()))?;
    writeln!(out)?;
    writeln!(out, "Program: {days}-day {}", program_headline(goal))?;
    writeln!(
        out,
        "Structure: {} ({})",
        program_structure(goal, level),
        level.as_str()
    )?;
    writeln!(out)?;
    writeln!(out, "Exercises:")?;
    for exercise in exercise_list(focus, req.equipment()) {
        writeln!(out, "- {exercise}")?;
    }
    writeln!(out)?;
    writeln!(out, "Key Components:")?;
    for component in [
        "Progressive overload principles",
        "Proper form and technique focus",
        "Adequate recovery periods",
        "Injury prevention strategies",
        "Flexibility and mobility work",
    ] {
        writeln!(out, "- {component}")?;
    }
    writeln!(out)?;
    writeln!(out, "Recommendations:")?;
    for tip in level_recommendations(level) {
        writeln!(out, "- {tip}")?;
    }
    writeln!(out)?;
    write!(
        out,
        "Duration: 8-12 weeks with regular assessments and adjustments"
    )
}
