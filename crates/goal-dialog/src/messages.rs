//! User-facing message texts and button labels

pub const START_REPLY: &str = "Send /goal to set up your monthly goals.";
pub const HELP_TEXT: &str = "This bot tracks monthly goals. Send /goal to review or add goals.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Send /goal to manage your goals.";
pub const RUN_GOAL_HINT: &str = "Send /goal to manage your goals.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";

pub const NO_GOALS: &str = "No goals set for this month yet.";
pub const ADD_GOAL_LABEL: &str = "Add goal";
pub const ADD_GOAL_PROMPT: &str = "Enter your goal.\n\
    For example, run 10 km or attend boxing practice.\n\
    One goal is one kind of activity with one way to track progress.";
pub const NAME_REQUIRED: &str = "Please enter a goal description.";

pub const TARGET_PROMPT: &str = "Enter a numeric target for the goal.";
pub const TARGET_NOT_A_NUMBER: &str = "Please enter a numeric target value.";

pub const CONFIRM_QUESTION: &str = "Are you sure you want to add this goal?";
pub const CONFIRM_LABEL: &str = "Confirm";
pub const CANCEL_LABEL: &str = "Cancel";
pub const GOAL_ADDED: &str = "Goal added!";
pub const GOAL_ADD_FAILED: &str = "Could not add the goal. Please try again.";

pub const ADD_PROGRESS_LABEL: &str = "Add progress";
pub const SET_PROGRESS_LABEL: &str = "Set progress";
pub const GOAL_NOT_FOUND: &str = "Goal not found.";
pub const NO_GOAL_SELECTED: &str = "No goal selected.";
pub const NOT_A_NUMBER: &str = "Please enter a valid number.";
