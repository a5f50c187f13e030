//! Dialog states

/// The named states of the goal conversation flow
///
/// The flow always starts at `GoalsOverview` and cycles back to it when a
/// wizard or progress entry completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Summary of the user's goals with a selection menu
    #[default]
    GoalsOverview,
    /// Prompt for a free-text goal description
    AddGoalName,
    /// Prompt for an integer target value
    AddGoalTarget,
    /// Show the pending goal and offer confirm/cancel
    ConfirmGoal,
    /// Show the selected goal's progress and offer add/set
    EditGoal,
    /// Prompt for an integer, phrased per the chosen edit mode
    EnterProgress,
}
