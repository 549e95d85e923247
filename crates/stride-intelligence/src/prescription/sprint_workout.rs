// ABOUTME: Sprint workout selection from status band, fatigue index, and optional TSB context
// ABOUTME: Re-activation path for stale signals takes priority over the status-band branches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::readiness::ReadinessScorer;
use stride_core::models::{MainSetBlock, SprintWorkout, StatusBand, WorkoutKind};
use tracing::debug;

/// Optional load context for workout selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprintContext {
    /// Current training stress balance
    pub training_stress_balance: f64,
}

struct BlockTemplate {
    name: &'static str,
    repetitions: u32,
    meters_per_rep: u32,
    distance: &'static str,
    rest: &'static str,
    intensity: &'static str,
    cue: &'static str,
}

struct SessionTemplate {
    kind: WorkoutKind,
    name: &'static str,
    warmup: &'static [&'static str],
    main_set: &'static [BlockTemplate],
    cooldown: &'static [&'static str],
}

const MAX_VELOCITY_SESSION: SessionTemplate = SessionTemplate {
    kind: WorkoutKind::MaxVelocity,
    name: "Max Velocity Development",
    warmup: &[
        "10 min jog and dynamic mobility",
        "A-skips, B-skips, straight-leg bounds 2 x 20m",
        "3 x 60m build-ups at 70/80/90%",
    ],
    main_set: &[
        BlockTemplate {
            name: "Block Starts",
            repetitions: 5,
            meters_per_rep: 30,
            distance: "30m",
            rest: "3 min",
            intensity: "100%",
            cue: "Push the ground back, rise gradually",
        },
        BlockTemplate {
            name: "Flying Sprints",
            repetitions: 4,
            meters_per_rep: 50,
            distance: "20m build + 30m fly",
            rest: "4 min",
            intensity: "100% in the fly zone",
            cue: "Tall hips, front-side mechanics, relaxed face",
        },
        BlockTemplate {
            name: "Speed Maintenance",
            repetitions: 2,
            meters_per_rep: 60,
            distance: "60m",
            rest: "6 min",
            intensity: "95%",
            cue: "Hold form through the line",
        },
    ],
    cooldown: &["10 min walk and easy jog", "Static stretching for hamstrings and hip flexors"],
};

const TECHNICAL_SESSION: SessionTemplate = SessionTemplate {
    kind: WorkoutKind::Technical,
    name: "Technical Speed Session",
    warmup: &[
        "10 min jog and dynamic mobility",
        "Ankle dribbles and A-march 2 x 20m",
    ],
    main_set: &[
        BlockTemplate {
            name: "Wicket Runs",
            repetitions: 4,
            meters_per_rep: 30,
            distance: "30m",
            rest: "2 min",
            intensity: "85-90%",
            cue: "Consistent step length over the wickets",
        },
        BlockTemplate {
            name: "Sprint Drills",
            repetitions: 3,
            meters_per_rep: 20,
            distance: "20m",
            rest: "1 min",
            intensity: "Technical",
            cue: "Quality contacts under the hips",
        },
        BlockTemplate {
            name: "Relaxed Strides",
            repetitions: 3,
            meters_per_rep: 50,
            distance: "50m",
            rest: "Walk back",
            intensity: "75%",
            cue: "Smooth rhythm, no straining",
        },
    ],
    cooldown: &["10 min easy jog", "Foam rolling for calves and quads"],
};

const RECOVERY_SESSION: SessionTemplate = SessionTemplate {
    kind: WorkoutKind::Recovery,
    name: "Recovery Day",
    warmup: &["5 min easy walk"],
    main_set: &[
        BlockTemplate {
            name: "Aerobic Flush",
            repetitions: 1,
            meters_per_rep: 0,
            distance: "20 min",
            rest: "None",
            intensity: "Easy, conversational",
            cue: "Bike or pool, keep heart rate low",
        },
        BlockTemplate {
            name: "Mobility Circuit",
            repetitions: 2,
            meters_per_rep: 0,
            distance: "10 min",
            rest: "As needed",
            intensity: "Gentle",
            cue: "Hips, ankles, thoracic spine",
        },
    ],
    cooldown: &["Breathing work 5 min", "Prioritize sleep tonight"],
};

const REACTIVATION_SESSION: SessionTemplate = SessionTemplate {
    kind: WorkoutKind::Reactivation,
    name: "Neural Re-Activation",
    warmup: &[
        "12 min jog and dynamic mobility",
        "A-skips and fast-leg drills 2 x 20m",
        "2 x 50m build-ups at 80/90%",
    ],
    main_set: &[
        BlockTemplate {
            name: "Progressive Accelerations",
            repetitions: 4,
            meters_per_rep: 30,
            distance: "30m",
            rest: "2-3 min",
            intensity: "85% building to 95%",
            cue: "Aggressive arm drive, each rep faster than the last",
        },
        BlockTemplate {
            name: "Flying Runs",
            repetitions: 3,
            meters_per_rep: 40,
            distance: "20m build + 20m fly",
            rest: "4 min",
            intensity: "95-100% in the fly zone",
            cue: "Stay tall and let the speed come",
        },
    ],
    cooldown: &["10 min easy jog", "Light stretching"],
};

/// Sprint workout rule table
pub struct SprintWorkoutSelector;

impl SprintWorkoutSelector {
    /// Choose the session for today's readiness
    ///
    /// With context, a stale signal selects the re-activation session regardless of
    /// band. Otherwise green gets max velocity, amber gets technical work, and red
    /// gets recovery only.
    #[must_use]
    pub fn select(
        status_band: StatusBand,
        fatigue_index: f64,
        context: Option<SprintContext>,
    ) -> SprintWorkout {
        let percent = format!("{:.1}%", fatigue_index * 100.0);

        if let Some(ctx) = context {
            if ReadinessScorer::is_stale_signal(status_band, ctx.training_stress_balance) {
                debug!(
                    status = %status_band,
                    fatigue_index,
                    training_stress_balance = ctx.training_stress_balance,
                    "Stale signal, selecting re-activation workout"
                );
                let rationale = format!(
                    "Fatigue index {percent} reads {status_band}, \
                     but TSB of {:+.1} shows you are rested. \
                     The dip reflects detraining rather than fatigue, so progressive accelerations \
                     and flying runs restore neural drive.",
                    ctx.training_stress_balance
                );
                return build(status_band, &REACTIVATION_SESSION, rationale);
            }
        }

        match status_band {
            StatusBand::Green => build(
                status_band,
                &MAX_VELOCITY_SESSION,
                format!(
                    "Fatigue index {percent} is at baseline. \
                     The nervous system is primed for maximal velocity work."
                ),
            ),
            StatusBand::Amber => build(
                status_band,
                &TECHNICAL_SESSION,
                format!(
                    "Fatigue index {percent} shows mild suppression. \
                     Keep technique sharp without maximal efforts."
                ),
            ),
            StatusBand::Red => build(
                status_band,
                &RECOVERY_SESSION,
                format!(
                    "Fatigue index {percent} signals neuromuscular suppression. \
                     No sprinting today; recover."
                ),
            ),
        }
    }
}

fn build(status: StatusBand, template: &SessionTemplate, rationale: String) -> SprintWorkout {
    let sprint_volume_meters: u32 = template
        .main_set
        .iter()
        .map(|b| b.repetitions * b.meters_per_rep)
        .sum();
    let total_volume = if sprint_volume_meters == 0 {
        "0 m sprint volume (recovery only)".to_owned()
    } else {
        format!("{sprint_volume_meters} m sprint volume")
    };

    SprintWorkout {
        status,
        kind: template.kind,
        name: template.name.to_owned(),
        rationale,
        warmup: to_strings(template.warmup),
        main_set: template
            .main_set
            .iter()
            .map(|b| MainSetBlock {
                name: b.name.to_owned(),
                repetitions: b.repetitions,
                distance: b.distance.to_owned(),
                rest: b.rest.to_owned(),
                intensity: b.intensity.to_owned(),
                cue: b.cue.to_owned(),
            })
            .collect(),
        cooldown: to_strings(template.cooldown),
        sprint_volume_meters,
        total_volume,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
