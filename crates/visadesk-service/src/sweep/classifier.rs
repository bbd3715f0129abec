//! Threshold classification for one employee.
//!
//! Classification is a pure function of (today, expiry date, state map):
//! no I/O, no hidden state. The sweep engine applies the resulting plan
//! and persists the updated map.

use chrono::{DateTime, NaiveDate, Utc};

use visadesk_entity::employee::status::ThresholdState;
use visadesk_entity::employee::threshold::Threshold;

/// What the sweep should do for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    /// The single threshold to dispatch.
    pub fire: Threshold,
    /// Missed thresholds to mark as handled without dispatching.
    ///
    /// When an employee enters the window late (e.g. created with 25 days
    /// remaining), the boundaries already behind them are suppressed so
    /// they can never fire afterwards. Exactly one notification goes out
    /// per employee per sweep.
    pub suppress: Vec<Threshold>,
    /// Days until expiry at classification time (negative once expired).
    pub days_remaining: i64,
}

/// Calendar days from `today` until `expiry`.
pub fn days_remaining(today: NaiveDate, expiry: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Classify one employee and produce a dispatch plan.
///
/// Returns `None` when no boundary has been reached yet, or when the
/// reached boundary is already marked in the state map (the idempotence
/// guarantee across repeated sweeps).
pub fn plan_employee(
    today: NaiveDate,
    expiry: NaiveDate,
    state: &ThresholdState,
) -> Option<SweepPlan> {
    let days = days_remaining(today, expiry);
    let nearest = Threshold::nearest(days)?;

    if state.is_marked(nearest) {
        return None;
    }

    let suppress = match nearest {
        // Expired is terminal: day-count markers are no longer relevant.
        Threshold::Expired => Vec::new(),
        _ => Threshold::DAY_THRESHOLDS
            .iter()
            .copied()
            .take_while(|t| *t != nearest)
            .filter(|t| !state.is_marked(*t))
            .collect(),
    };

    Some(SweepPlan {
        fire: nearest,
        suppress,
        days_remaining: days,
    })
}

/// Apply a plan to a state map: the fired threshold and every suppressed
/// one get their markers set. Returns the updated map.
pub fn apply_plan(state: &ThresholdState, plan: &SweepPlan, at: DateTime<Utc>) -> ThresholdState {
    let mut next = state.clone();
    next.mark(plan.fire, at);
    for t in &plan.suppress {
        next.mark(*t, at);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn thirty_days_out_fires_the_30_day_boundary() {
        let plan = plan_employee(
            date(2024, 1, 1),
            date(2024, 1, 31),
            &ThresholdState::empty(),
        )
        .unwrap();
        assert_eq!(plan.fire, Threshold::Days30);
        assert_eq!(plan.suppress, vec![Threshold::Days60]);
        assert_eq!(plan.days_remaining, 30);
    }

    #[test]
    fn late_entry_fires_only_the_nearest_boundary() {
        // 10 days remaining, nothing sent: 15 fires, 60 and 30 suppress.
        let plan = plan_employee(
            date(2024, 1, 1),
            date(2024, 1, 11),
            &ThresholdState::empty(),
        )
        .unwrap();
        assert_eq!(plan.fire, Threshold::Days15);
        assert_eq!(plan.suppress, vec![Threshold::Days60, Threshold::Days30]);
    }

    #[test]
    fn beyond_the_widest_boundary_nothing_fires() {
        assert!(
            plan_employee(
                date(2024, 1, 1),
                date(2024, 6, 1),
                &ThresholdState::empty()
            )
            .is_none()
        );
    }

    #[test]
    fn marked_boundary_does_not_refire() {
        let mut state = ThresholdState::empty();
        state.mark(Threshold::Days30, Utc::now());
        assert!(plan_employee(date(2024, 1, 1), date(2024, 1, 31), &state).is_none());
    }

    #[test]
    fn expired_fires_once_and_stays_silent() {
        let today = date(2024, 2, 1);
        let expiry = date(2024, 1, 1);

        let plan = plan_employee(today, expiry, &ThresholdState::empty()).unwrap();
        assert_eq!(plan.fire, Threshold::Expired);
        assert!(plan.suppress.is_empty());
        assert_eq!(plan.days_remaining, -31);

        let state = apply_plan(&ThresholdState::empty(), &plan, Utc::now());
        assert!(plan_employee(today, expiry, &state).is_none());
    }

    #[test]
    fn applying_a_plan_makes_the_next_sweep_idempotent() {
        let today = date(2024, 1, 1);
        let expiry = date(2024, 1, 31);

        let plan = plan_employee(today, expiry, &ThresholdState::empty()).unwrap();
        let state = apply_plan(&ThresholdState::empty(), &plan, Utc::now());

        assert!(state.is_marked(Threshold::Days30));
        assert!(state.is_marked(Threshold::Days60)); // suppressed, never fires late
        assert!(plan_employee(today, expiry, &state).is_none());
    }

    #[test]
    fn cycle_walks_each_boundary_exactly_once() {
        let expiry = date(2024, 3, 1);
        let mut state = ThresholdState::empty();
        let mut fired = Vec::new();

        // Sweep daily from 70 days out until a month past expiry.
        let mut today = date(2023, 12, 22);
        while today <= date(2024, 4, 1) {
            if let Some(plan) = plan_employee(today, expiry, &state) {
                fired.push(plan.fire);
                state = apply_plan(&state, &plan, Utc::now());
            }
            today = today.succ_opt().unwrap();
        }

        assert_eq!(
            fired,
            vec![
                Threshold::Days60,
                Threshold::Days30,
                Threshold::Days15,
                Threshold::Days7,
                Threshold::Days1,
                Threshold::Expired,
            ]
        );
    }

    #[test]
    fn day_zero_belongs_to_the_one_day_boundary() {
        let plan = plan_employee(date(2024, 1, 1), date(2024, 1, 1), &ThresholdState::empty())
            .unwrap();
        assert_eq!(plan.fire, Threshold::Days1);
        assert_eq!(plan.days_remaining, 0);
    }
}
