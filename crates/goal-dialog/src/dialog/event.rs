//! Dialog events - the inputs the state machine reacts to

/// How an entered number mutates the selected goal's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Increment the counter by the entered delta
    Add,
    /// Overwrite the counter with the entered value
    Set,
}

/// An input to the dialog state machine
///
/// Transport payloads (free text, button presses) are mapped to these before
/// the transition function runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// Free-text message
    Text(String),
    /// An existing goal was picked from the overview menu
    GoalSelected(i64),
    /// The "add goal" menu item was picked
    AddGoalRequested,
    /// The pending goal was confirmed
    Confirmed,
    /// The pending goal was discarded
    Cancelled,
    /// Add-or-set progress was chosen for the selected goal
    EditModeChosen(EditMode),
}
