//! Conversation runner
//!
//! Owns one user's dialog state and scratch, maps transport payloads to
//! dialog events, executes effects against the service layer, and renders
//! each state's entry view.

use goal_service::GoalService;

use crate::messages;
use crate::transport::{Choice, Outbound, Payload};

use super::event::{DialogEvent, EditMode};
use super::scratch::Scratch;
use super::state::DialogState;
use super::transition::{transition, Effect};

/// One user's live conversation
#[derive(Debug, Default)]
pub struct Conversation {
    state: DialogState,
    scratch: Scratch,
}

impl Conversation {
    /// Create a fresh conversation at the overview state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dialog state
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Reset to the overview and render it (the flow's entry command)
    ///
    /// Discards any in-flight wizard state.
    pub async fn enter(&mut self, external_id: i64, service: &GoalService<'_>) -> Vec<Outbound> {
        self.state = DialogState::GoalsOverview;
        self.scratch = Scratch::default();
        self.render(external_id, service).await.into_iter().collect()
    }

    /// Advance the conversation by one inbound payload
    pub async fn handle(
        &mut self,
        external_id: i64,
        payload: &Payload,
        service: &GoalService<'_>,
    ) -> Vec<Outbound> {
        let Some(event) = event_from_payload(payload) else {
            return Vec::new();
        };

        let step = transition(self.state, event, &mut self.scratch);
        let state_changed = step.next != self.state;

        let mut responses = Vec::new();
        for effect in step.effects {
            responses.push(self.execute(external_id, effect, service).await);
        }

        self.state = step.next;
        if state_changed {
            if let Some(view) = self.render(external_id, service).await {
                responses.push(view);
            }
        }

        responses
    }

    /// Execute one effect and produce the response describing its outcome
    async fn execute(
        &self,
        external_id: i64,
        effect: Effect,
        service: &GoalService<'_>,
    ) -> Outbound {
        match effect {
            Effect::Reply(text) => Outbound::text(text),
            Effect::PersistGoal { name, target } => {
                if service.add_goal(external_id, &name, target).await.is_some() {
                    Outbound::text(messages::GOAL_ADDED)
                } else {
                    Outbound::text(messages::GOAL_ADD_FAILED)
                }
            }
            Effect::AddProgress { goal_id, delta } => {
                if service.add_progress(goal_id, delta).await {
                    Outbound::text(format!("Added {delta} to the goal progress."))
                } else {
                    Outbound::text(messages::GOAL_NOT_FOUND)
                }
            }
            Effect::SetProgress { goal_id, value } => {
                if service.set_progress(goal_id, value).await {
                    Outbound::text(format!("Goal progress set to {value}."))
                } else {
                    Outbound::text(messages::GOAL_NOT_FOUND)
                }
            }
        }
    }

    /// Render the entry view of the current state
    async fn render(&mut self, external_id: i64, service: &GoalService<'_>) -> Option<Outbound> {
        match self.state {
            DialogState::GoalsOverview => {
                let goals = service.list_goals(external_id).await;
                self.scratch.cache_goals(&goals);

                let text = if goals.is_empty() {
                    messages::NO_GOALS.to_string()
                } else {
                    goals
                        .iter()
                        .map(|goal| format!("- {}, progress: {}", goal.name, goal.progress_summary()))
                        .collect::<Vec<_>>()
                        .join("\n")
                };

                let mut choices: Vec<Choice> = goals
                    .iter()
                    .map(|goal| Choice::new(format!("goal:{}", goal.id), goal.name.clone()))
                    .collect();
                choices.push(Choice::new("add_goal", messages::ADD_GOAL_LABEL));

                Some(Outbound::with_choices(text, choices))
            }

            DialogState::AddGoalName => Some(Outbound::text(messages::ADD_GOAL_PROMPT)),

            DialogState::AddGoalTarget => Some(Outbound::text(messages::TARGET_PROMPT)),

            DialogState::ConfirmGoal => {
                let name = self.scratch.new_goal_name.clone().unwrap_or_default();
                let target = self.scratch.new_goal_target.unwrap_or(0);
                Some(Outbound::with_choices(
                    format!(
                        "{}\nGoal: {name}\nTarget: {target}",
                        messages::CONFIRM_QUESTION
                    ),
                    vec![
                        Choice::new("confirm", messages::CONFIRM_LABEL),
                        Choice::new("cancel", messages::CANCEL_LABEL),
                    ],
                ))
            }

            DialogState::EditGoal => match self.scratch.selected_snapshot() {
                Some(goal) => Some(Outbound::with_choices(
                    format!(
                        "Goal: {}, progress: {}/{}",
                        goal.name, goal.current_value, goal.selected_value
                    ),
                    vec![
                        Choice::new("add_progress", messages::ADD_PROGRESS_LABEL),
                        Choice::new("set_progress", messages::SET_PROGRESS_LABEL),
                    ],
                )),
                None => Some(Outbound::text(messages::GOAL_NOT_FOUND)),
            },

            DialogState::EnterProgress => match self.scratch.selected_snapshot() {
                Some(goal) => {
                    let text = match self.scratch.edit_mode {
                        Some(EditMode::Set) => format!(
                            "Current progress is {}. What should it be now?",
                            goal.current_value
                        ),
                        _ => format!(
                            "Current progress is {}. How much should be added?",
                            goal.current_value
                        ),
                    };
                    Some(Outbound::text(text))
                }
                None => Some(Outbound::text(messages::GOAL_NOT_FOUND)),
            },
        }
    }
}

/// Map a transport payload to a dialog event
fn event_from_payload(payload: &Payload) -> Option<DialogEvent> {
    match payload {
        Payload::Text { text } => Some(DialogEvent::Text(text.clone())),
        Payload::Button { id } => match id.as_str() {
            "add_goal" => Some(DialogEvent::AddGoalRequested),
            "confirm" => Some(DialogEvent::Confirmed),
            "cancel" => Some(DialogEvent::Cancelled),
            "add_progress" => Some(DialogEvent::EditModeChosen(EditMode::Add)),
            "set_progress" => Some(DialogEvent::EditModeChosen(EditMode::Set)),
            other => other
                .strip_prefix("goal:")
                .and_then(|raw| raw.parse().ok())
                .map(DialogEvent::GoalSelected),
        },
        Payload::Unreachable => None,
    }
}
