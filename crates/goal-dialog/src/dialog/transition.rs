//! The pure transition function
//!
//! `(state, event, scratch) -> (next state, effects)`. No I/O happens here;
//! persistence is expressed as effects that the runner executes. Unexpected
//! events leave the state unchanged with no effects.

use crate::messages;

use super::event::{DialogEvent, EditMode};
use super::scratch::Scratch;
use super::state::DialogState;

/// A side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a plain text response
    Reply(String),
    /// Persist the wizard's goal for the current user
    PersistGoal { name: String, target: i64 },
    /// Increment a goal's progress counter
    AddProgress { goal_id: i64, delta: i64 },
    /// Overwrite a goal's progress counter
    SetProgress { goal_id: i64, value: i64 },
}

/// The outcome of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: DialogState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn go(next: DialogState) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    fn with(next: DialogState, effect: Effect) -> Self {
        Self {
            next,
            effects: vec![effect],
        }
    }

    fn reply(next: DialogState, text: &str) -> Self {
        Self::with(next, Effect::Reply(text.to_string()))
    }
}

/// Advance the dialog by one event
pub fn transition(state: DialogState, event: DialogEvent, scratch: &mut Scratch) -> Step {
    use DialogState::{
        AddGoalName, AddGoalTarget, ConfirmGoal, EditGoal, EnterProgress, GoalsOverview,
    };

    match (state, event) {
        (GoalsOverview, DialogEvent::GoalSelected(id)) => {
            scratch.selected_goal = Some(id);
            Step::go(EditGoal)
        }
        (GoalsOverview, DialogEvent::AddGoalRequested) => Step::go(AddGoalName),

        (AddGoalName, DialogEvent::Text(text)) => {
            let name = text.trim();
            if name.is_empty() {
                Step::reply(AddGoalName, messages::NAME_REQUIRED)
            } else {
                scratch.new_goal_name = Some(name.to_string());
                Step::go(AddGoalTarget)
            }
        }

        (AddGoalTarget, DialogEvent::Text(text)) => match text.trim().parse::<i64>() {
            Ok(target) => {
                scratch.new_goal_target = Some(target);
                Step::go(ConfirmGoal)
            }
            Err(_) => Step::reply(AddGoalTarget, messages::TARGET_NOT_A_NUMBER),
        },

        (ConfirmGoal, DialogEvent::Confirmed) => {
            let name = scratch.new_goal_name.take().unwrap_or_default();
            let target = scratch.new_goal_target.take().unwrap_or(0);
            if !name.is_empty() && target > 0 {
                Step::with(GoalsOverview, Effect::PersistGoal { name, target })
            } else {
                // Rejected client-side: nothing is persisted.
                Step::reply(GoalsOverview, messages::GOAL_ADD_FAILED)
            }
        }
        (ConfirmGoal, DialogEvent::Cancelled) => {
            scratch.clear_wizard();
            Step::go(GoalsOverview)
        }

        (EditGoal, DialogEvent::EditModeChosen(mode)) => {
            scratch.edit_mode = Some(mode);
            Step::go(EnterProgress)
        }

        (EnterProgress, DialogEvent::Text(text)) => {
            let Ok(value) = text.trim().parse::<i64>() else {
                return Step::reply(EnterProgress, messages::NOT_A_NUMBER);
            };
            let Some(goal_id) = scratch.selected_goal else {
                return Step::reply(EnterProgress, messages::NO_GOAL_SELECTED);
            };
            match scratch.edit_mode {
                Some(EditMode::Add) => {
                    Step::with(GoalsOverview, Effect::AddProgress { goal_id, delta: value })
                }
                Some(EditMode::Set) => {
                    Step::with(GoalsOverview, Effect::SetProgress { goal_id, value })
                }
                None => Step::go(GoalsOverview),
            }
        }

        // Anything else is ignored in place.
        (state, _) => Step::go(state),
    }
}
