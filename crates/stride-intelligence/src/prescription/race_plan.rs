// ABOUTME: Multi-event race planning with phase windows and post-race recovery conflicts
// ABOUTME: Nearest event drives the master plan; later events are deferred, shared, or caveated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::numeric::round_to;
use crate::race_estimator::RaceTimeEstimator;
use stride_core::constants::prescription::{
    FINAL_TAPER_MAX_DAYS, RACE_PREP_MAX_DAYS, RACE_SPECIFIC_MAX_DAYS, RECOVERY_DAYS_100,
    RECOVERY_DAYS_200, RECOVERY_DAYS_400, RECOVERY_DAYS_OTHER, SHARPEN_MAX_DAYS,
};
use stride_core::constants::race::{
    REACTION_TIME_S, SUSTAIN_FRACTION_100, SUSTAIN_FRACTION_200, SUSTAIN_FRACTION_400,
    SUSTAIN_FRACTION_LONG,
};
use stride_core::models::{PlanRole, RaceEvent, RacePlan, TrainingPhase};
use tracing::debug;

/// Multi-event race planner
pub struct RacePlanner;

impl RacePlanner {
    /// Phase for an event `days_until` days away
    #[must_use]
    pub const fn phase_for_days(days_until: u32) -> TrainingPhase {
        if days_until <= RACE_PREP_MAX_DAYS {
            TrainingPhase::RacePrep
        } else if days_until <= FINAL_TAPER_MAX_DAYS {
            TrainingPhase::FinalTaper
        } else if days_until <= RACE_SPECIFIC_MAX_DAYS {
            TrainingPhase::RaceSpecific
        } else if days_until <= SHARPEN_MAX_DAYS {
            TrainingPhase::Sharpen
        } else {
            TrainingPhase::Build
        }
    }

    /// Days of recovery needed after racing `distance_meters`
    #[must_use]
    pub const fn recovery_days(distance_meters: u32) -> u32 {
        match distance_meters {
            100 => RECOVERY_DAYS_100,
            200 => RECOVERY_DAYS_200,
            400 => RECOVERY_DAYS_400,
            _ => RECOVERY_DAYS_OTHER,
        }
    }

    /// Distance-only prediction used for planning
    ///
    /// Ignores the training profile and readiness; `None` when the peak velocity is
    /// not positive.
    #[must_use]
    pub fn simple_prediction(distance_meters: u32, peak_velocity: f64, age: u32) -> Option<f64> {
        if peak_velocity.is_nan() || peak_velocity <= 0.0 || distance_meters == 0 {
            return None;
        }
        let fraction = match distance_meters {
            0..=100 => SUSTAIN_FRACTION_100,
            101..=200 => SUSTAIN_FRACTION_200,
            201..=400 => SUSTAIN_FRACTION_400,
            _ => SUSTAIN_FRACTION_LONG,
        };
        let avg_speed = peak_velocity * fraction * RaceTimeEstimator::age_factor(age);
        let seconds = f64::from(distance_meters) / avg_speed + REACTION_TIME_S;
        seconds.is_finite().then(|| round_to(seconds, 2))
    }

    /// Plan every event against the nearest one
    ///
    /// Events are re-sorted by `days_until` (stable), so the nearest event is always
    /// primary regardless of input order.
    #[must_use]
    pub fn plan(events: &[RaceEvent], peak_velocity: f64, age: u32) -> Vec<RacePlan> {
        let mut ordered: Vec<&RaceEvent> = events.iter().collect();
        ordered.sort_by_key(|e| e.days_until);

        let Some((&primary, secondaries)) = ordered.split_first() else {
            return Vec::new();
        };

        let mut plans = Vec::with_capacity(ordered.len());
        let primary_phase = Self::phase_for_days(primary.days_until);
        plans.push(RacePlan {
            event: primary.clone(),
            role: PlanRole::Primary,
            current_phase: primary_phase,
            post_recovery_phase: None,
            effective_training_days: None,
            predicted_seconds: Self::simple_prediction(primary.distance_meters, peak_velocity, age),
            focus: phase_focus(primary_phase).to_owned(),
            notes: Vec::new(),
        });

        let recovery = Self::recovery_days(primary.distance_meters);
        for &event in secondaries {
            plans.push(Self::plan_secondary(primary, event, recovery, peak_velocity, age));
        }
        plans
    }

    fn plan_secondary(
        primary: &RaceEvent,
        event: &RaceEvent,
        recovery_days: u32,
        peak_velocity: f64,
        age: u32,
    ) -> RacePlan {
        let effective_days = event
            .days_until
            .saturating_sub(primary.days_until)
            .saturating_sub(recovery_days);
        let predicted_seconds = Self::simple_prediction(event.distance_meters, peak_velocity, age);

        let (current_phase, post_recovery_phase, focus, notes) =
            if primary.days_until <= RACE_SPECIFIC_MAX_DAYS {
                let forward = Self::phase_for_days(effective_days);
                debug!(
                    event = %event.name,
                    primary = %primary.name,
                    effective_days,
                    "Deferring secondary event behind imminent primary race"
                );
                (
                    TrainingPhase::Deferred,
                    Some(forward),
                    format!(
                        "No independent high-intensity work until recovered from {}",
                        primary.name
                    ),
                    vec![
                        format!(
                            "{} is {} days out; allow {} recovery days after it",
                            primary.name, primary.days_until, recovery_days
                        ),
                        format!(
                            "Then {} with {} effective training days",
                            forward.label(),
                            effective_days
                        ),
                    ],
                )
            } else if primary.days_until > SHARPEN_MAX_DAYS {
                (
                    TrainingPhase::Build,
                    None,
                    phase_focus(TrainingPhase::Build).to_owned(),
                    vec![format!(
                        "Complementary to {}: both events share the Build phase",
                        primary.name
                    )],
                )
            } else {
                let own = Self::phase_for_days(event.days_until);
                (
                    own,
                    None,
                    phase_focus(own).to_owned(),
                    vec![format!(
                        "Reduce volume 20-30% while {} is in {}",
                        primary.name,
                        Self::phase_for_days(primary.days_until).label()
                    )],
                )
            };

        RacePlan {
            event: event.clone(),
            role: PlanRole::Secondary,
            current_phase,
            post_recovery_phase,
            effective_training_days: Some(effective_days),
            predicted_seconds,
            focus,
            notes,
        }
    }
}

const fn phase_focus(phase: TrainingPhase) -> &'static str {
    match phase {
        TrainingPhase::Build => "General strength, acceleration mechanics, and aerobic support",
        TrainingPhase::Sharpen => "Max velocity and speed endurance at race intensities",
        TrainingPhase::RaceSpecific => "Race-pace reps and block starts with full recovery",
        TrainingPhase::FinalTaper => "Cut volume, keep intensity, stay sharp",
        TrainingPhase::RacePrep => "Activation only: short accelerations and rest",
        TrainingPhase::Deferred => "Hold until the primary race is done",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(RacePlanner::phase_for_days(3), TrainingPhase::RacePrep);
        assert_eq!(RacePlanner::phase_for_days(4), TrainingPhase::FinalTaper);
        assert_eq!(RacePlanner::phase_for_days(14), TrainingPhase::RaceSpecific);
        assert_eq!(RacePlanner::phase_for_days(28), TrainingPhase::Sharpen);
        assert_eq!(RacePlanner::phase_for_days(29), TrainingPhase::Build);
    }

    #[test]
    fn test_simple_prediction_without_peak() {
        assert!(RacePlanner::simple_prediction(100, 0.0, 30).is_none());
    }
}
