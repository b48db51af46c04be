//! crates/recipe_assistant_core/src/cook.rs
//!
//! The cook session state machine.
//!
//! A session is created `Active` on step 1 and leaves that state exactly once,
//! either by being ended (`Completed`) or by being superseded when another
//! session starts (`Aborted`). Step navigation clamps instead of rejecting.
//! Timers store only their absolute end time; remaining time is derived.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{CookSession, CookStatus, CookTimer, Recipe};

/// Errors raised by cook session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookError {
    #[error("cook session is {0:?}, not active")]
    NotActive(CookStatus),
    #[error("timer {0} not found")]
    TimerNotFound(Uuid),
    #[error("step {requested} is outside 1..={step_count}")]
    StepOutOfRange { requested: usize, step_count: usize },
}

/// A request to move the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    Next,
    Previous,
    By(i64),
    JumpTo(i64),
}

/// Clamps a requested 1-based step index into `[1, step_count]`.
/// A recipe without steps still has step 1 as its only position.
pub fn clamp_step(requested: i64, step_count: usize) -> usize {
    let last = i64::try_from(step_count.max(1)).unwrap_or(i64::MAX);
    // `last` fits back into usize since it came from one.
    requested.clamp(1, last) as usize
}

/// Seconds left on `timer` at `now`, never negative.
pub fn remaining(timer: &CookTimer, now: DateTime<Utc>) -> i64 {
    (timer.target_end_time - now).num_seconds().max(0)
}

impl CookSession {
    /// A fresh active session on step 1. Superseding any previous session is
    /// the repository's job.
    pub fn start(recipe: &Recipe, servings: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id: recipe.id,
            servings,
            started_at: now,
            current_step_index: 1,
            timers: Vec::new(),
            status: CookStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CookStatus::Active
    }

    fn ensure_active(&self) -> Result<(), CookError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(CookError::NotActive(self.status))
        }
    }

    /// Moves the current step, clamped to the recipe's step range, and
    /// returns the new index.
    pub fn advance(&mut self, step_move: StepMove, step_count: usize) -> Result<usize, CookError> {
        self.ensure_active()?;

        let current = i64::try_from(self.current_step_index).unwrap_or(i64::MAX);
        let requested = match step_move {
            StepMove::Next => current.saturating_add(1),
            StepMove::Previous => current.saturating_sub(1),
            StepMove::By(delta) => current.saturating_add(delta),
            StepMove::JumpTo(index) => index,
        };

        self.current_step_index = clamp_step(requested, step_count);
        Ok(self.current_step_index)
    }

    /// Appends a timer ending `duration_seconds` after `now`.
    pub fn add_timer(
        &mut self,
        step_index: usize,
        label: String,
        duration_seconds: u32,
        step_count: usize,
        now: DateTime<Utc>,
    ) -> Result<CookTimer, CookError> {
        self.ensure_active()?;
        if step_index == 0 || step_index > step_count.max(1) {
            return Err(CookError::StepOutOfRange {
                requested: step_index,
                step_count,
            });
        }

        let timer = CookTimer {
            id: Uuid::new_v4(),
            step_index,
            label,
            target_end_time: now + Duration::seconds(i64::from(duration_seconds)),
            remaining_seconds: None,
        };
        self.timers.push(timer.clone());
        Ok(timer)
    }

    /// Removes a timer by id. Allowed in any state so finished sessions can
    /// still be cleaned up.
    pub fn remove_timer(&mut self, timer_id: Uuid) -> Result<CookTimer, CookError> {
        let position = self
            .timers
            .iter()
            .position(|timer| timer.id == timer_id)
            .ok_or(CookError::TimerNotFound(timer_id))?;
        Ok(self.timers.remove(position))
    }

    /// `Active -> Completed`. Ending an already completed session is a no-op;
    /// an aborted session cannot be ended.
    pub fn end(&mut self) -> Result<(), CookError> {
        match self.status {
            CookStatus::Active => {
                self.status = CookStatus::Completed;
                Ok(())
            }
            CookStatus::Completed => Ok(()),
            CookStatus::Aborted => Err(CookError::NotActive(CookStatus::Aborted)),
        }
    }

    /// `Active -> Aborted`, used when another session supersedes this one.
    pub fn abort(&mut self) {
        if self.is_active() {
            self.status = CookStatus::Aborted;
        }
    }

    /// A copy with every timer's remaining time filled in for display.
    pub fn with_remaining(&self, now: DateTime<Utc>) -> Self {
        let mut view = self.clone();
        for timer in &mut view.timers {
            timer.remaining_seconds = Some(remaining(timer, now));
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;

    fn started() -> (CookSession, usize) {
        let (_, recipes) = seed::sample_kitchen();
        let recipe = &recipes[0];
        (CookSession::start(recipe, 4, Utc::now()), recipe.steps.len())
    }

    #[test]
    fn starts_active_on_first_step() {
        let (session, _) = started();
        assert_eq!(session.status, CookStatus::Active);
        assert_eq!(session.current_step_index, 1);
        assert!(session.timers.is_empty());
    }

    #[test]
    fn advance_clamps_both_ends() {
        let (mut session, steps) = started();
        assert_eq!(session.advance(StepMove::Previous, steps), Ok(1));
        assert_eq!(session.advance(StepMove::Next, steps), Ok(2));
        assert_eq!(session.advance(StepMove::By(100), steps), Ok(steps));
        assert_eq!(session.advance(StepMove::Next, steps), Ok(steps));
        assert_eq!(session.advance(StepMove::JumpTo(3), steps), Ok(3));
        assert_eq!(session.advance(StepMove::JumpTo(-7), steps), Ok(1));
        assert_eq!(session.advance(StepMove::By(i64::MIN), steps), Ok(1));
    }

    #[test]
    fn stepless_recipe_stays_on_step_one() {
        let (mut session, _) = started();
        assert_eq!(session.advance(StepMove::Next, 0), Ok(1));
        assert_eq!(session.advance(StepMove::JumpTo(5), 0), Ok(1));
    }

    #[test]
    fn finished_sessions_reject_navigation() {
        let (mut session, steps) = started();
        session.end().unwrap();
        assert_eq!(
            session.advance(StepMove::Next, steps),
            Err(CookError::NotActive(CookStatus::Completed))
        );
        assert_eq!(session.current_step_index, 1);
    }

    #[test]
    fn timers_derive_remaining_time() {
        let (mut session, steps) = started();
        let now = Utc::now();
        let timer = session
            .add_timer(1, "Boil water".to_string(), 600, steps, now)
            .unwrap();

        assert_eq!(timer.target_end_time, now + Duration::seconds(600));
        assert_eq!(remaining(&timer, now), 600);
        assert_eq!(remaining(&timer, now + Duration::seconds(599)), 1);
        assert_eq!(remaining(&timer, now + Duration::seconds(3600)), 0);

        let view = session.with_remaining(now + Duration::seconds(60));
        assert_eq!(view.timers[0].remaining_seconds, Some(540));
        assert_eq!(session.timers[0].remaining_seconds, None);
    }

    #[test]
    fn timer_step_must_exist() {
        let (mut session, steps) = started();
        let err = session
            .add_timer(steps + 1, "late".to_string(), 10, steps, Utc::now())
            .unwrap_err();
        assert_eq!(
            err,
            CookError::StepOutOfRange {
                requested: steps + 1,
                step_count: steps
            }
        );
        assert!(session.add_timer(0, "zero".to_string(), 10, steps, Utc::now()).is_err());
    }

    #[test]
    fn removing_unknown_timer_leaves_list_unchanged() {
        let (mut session, steps) = started();
        let kept = session
            .add_timer(4, "Simmer".to_string(), 1200, steps, Utc::now())
            .unwrap();
        let before = session.timers.clone();

        let missing = Uuid::new_v4();
        assert_eq!(session.remove_timer(missing), Err(CookError::TimerNotFound(missing)));
        assert_eq!(session.timers, before);

        assert_eq!(session.remove_timer(kept.id).map(|t| t.id), Ok(kept.id));
        assert!(session.timers.is_empty());
    }

    #[test]
    fn end_is_idempotent_but_not_for_aborted() {
        let (mut session, _) = started();
        assert_eq!(session.end(), Ok(()));
        assert_eq!(session.status, CookStatus::Completed);
        assert_eq!(session.end(), Ok(()));
        assert_eq!(session.status, CookStatus::Completed);

        let (mut superseded, _) = started();
        superseded.abort();
        assert_eq!(superseded.status, CookStatus::Aborted);
        assert_eq!(superseded.end(), Err(CookError::NotActive(CookStatus::Aborted)));
        assert_eq!(superseded.status, CookStatus::Aborted);
    }

    #[test]
    fn abort_does_not_touch_completed_sessions() {
        let (mut session, _) = started();
        session.end().unwrap();
        session.abort();
        assert_eq!(session.status, CookStatus::Completed);
    }

    proptest! {
        #[test]
        fn advance_never_leaves_step_range(
            steps in 0usize..40,
            moves in proptest::collection::vec(any::<i64>(), 1..20),
        ) {
            let (mut session, _) = started();
            for (i, delta) in moves.into_iter().enumerate() {
                let step_move = if i % 2 == 0 { StepMove::By(delta) } else { StepMove::JumpTo(delta) };
                let index = session.advance(step_move, steps).unwrap();
                prop_assert!(index >= 1);
                prop_assert!(index <= steps.max(1));
                prop_assert_eq!(index, session.current_step_index);
            }
        }
    }
}
