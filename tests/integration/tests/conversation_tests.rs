//! End-to-end conversation tests against the in-memory store

use goal_dialog::messages;
use integration_tests::TestBot;

#[tokio::test]
async fn test_full_goal_scenario() {
    let bot = TestBot::new();

    // First contact registers the user.
    let replies = bot.send_text(42, "Alex", "/start").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, messages::START_REPLY);
    let user = bot.store.stored_user(42).unwrap();
    assert_eq!(user.display_name, "Alex");
    assert!(!user.is_blocked);

    // Entering the flow renders an empty overview with an "add goal" menu.
    let replies = bot.send_text(42, "Alex", "/goal").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, messages::NO_GOALS);
    assert_eq!(replies[0].choices.len(), 1);
    assert_eq!(replies[0].choices[0].id, "add_goal");

    // Creation wizard: name, target, confirm.
    let replies = bot.press(42, "add_goal").await;
    assert_eq!(replies[0].text, messages::ADD_GOAL_PROMPT);

    let replies = bot.send_text(42, "Alex", "Run 50km").await;
    assert_eq!(replies[0].text, messages::TARGET_PROMPT);

    let replies = bot.send_text(42, "Alex", "50").await;
    assert!(replies[0].text.contains("Run 50km"));
    assert!(replies[0].text.contains("50"));
    let ids: Vec<&str> = replies[0].choices.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["confirm", "cancel"]);

    let replies = bot.press(42, "confirm").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].text, messages::GOAL_ADDED);
    assert!(replies[1].text.contains("Run 50km, progress: 0/50"));

    // Exactly one goal, owned by user 42.
    assert_eq!(bot.store.goal_count(), 1);
    let goal = bot.store.stored_goal(1).unwrap();
    assert_eq!(goal.name, "Run 50km");
    assert_eq!(goal.selected_value, 50);
    assert_eq!(goal.current_value, 0);
    assert_eq!(goal.user_id, user.id);

    // Add progress 10, then 5.
    let replies = bot.press(42, "goal:1").await;
    assert!(replies[0].text.contains("Run 50km"));
    let replies = bot.press(42, "add_progress").await;
    assert_eq!(replies[0].text, "Current progress is 0. How much should be added?");
    let replies = bot.send_text(42, "Alex", "10").await;
    assert_eq!(replies[0].text, "Added 10 to the goal progress.");
    assert_eq!(bot.store.stored_goal(1).unwrap().current_value, 10);

    bot.press(42, "goal:1").await;
    bot.press(42, "add_progress").await;
    let replies = bot.send_text(42, "Alex", "5").await;
    assert_eq!(replies[0].text, "Added 5 to the goal progress.");
    assert_eq!(bot.store.stored_goal(1).unwrap().current_value, 15);

    // Overwrite to 30.
    bot.press(42, "goal:1").await;
    let replies = bot.press(42, "set_progress").await;
    assert_eq!(replies[0].text, "Current progress is 15. What should it be now?");
    let replies = bot.send_text(42, "Alex", "30").await;
    assert_eq!(replies[0].text, "Goal progress set to 30.");
    assert_eq!(bot.store.stored_goal(1).unwrap().current_value, 30);

    // The overview reflects the final state.
    assert!(replies[1].text.contains("Run 50km, progress: 30/50"));
}

#[tokio::test]
async fn test_invalid_target_input_keeps_state_and_persists_nothing() {
    let bot = TestBot::new();
    bot.send_text(42, "Alex", "/start").await;
    bot.send_text(42, "Alex", "/goal").await;
    bot.press(42, "add_goal").await;
    bot.send_text(42, "Alex", "Run 50km").await;

    let replies = bot.send_text(42, "Alex", "abc").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, messages::TARGET_NOT_A_NUMBER);
    assert_eq!(bot.store.goal_count(), 0);

    // Still at the target prompt: a valid number now advances to confirm.
    let replies = bot.send_text(42, "Alex", "50").await;
    assert!(replies[0].text.contains(messages::CONFIRM_QUESTION));
}

#[tokio::test]
async fn test_invalid_progress_input_reprompts() {
    let bot = TestBot::new();
    bot.send_text(42, "Alex", "/start").await;
    bot.send_text(42, "Alex", "/goal").await;
    bot.press(42, "add_goal").await;
    bot.send_text(42, "Alex", "Run 50km").await;
    bot.send_text(42, "Alex", "50").await;
    bot.press(42, "confirm").await;

    bot.press(42, "goal:1").await;
    bot.press(42, "add_progress").await;
    let replies = bot.send_text(42, "Alex", "abc").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, messages::NOT_A_NUMBER);
    assert_eq!(bot.store.stored_goal(1).unwrap().current_value, 0);
}

#[tokio::test]
async fn test_cancel_discards_pending_goal() {
    let bot = TestBot::new();
    bot.send_text(42, "Alex", "/start").await;
    bot.send_text(42, "Alex", "/goal").await;
    bot.press(42, "add_goal").await;
    bot.send_text(42, "Alex", "Run 50km").await;
    bot.send_text(42, "Alex", "50").await;

    let replies = bot.press(42, "cancel").await;
    assert_eq!(bot.store.goal_count(), 0);
    // Back at the overview.
    assert_eq!(replies.last().unwrap().text, messages::NO_GOALS);
}

#[tokio::test]
async fn test_goal_command_resets_in_flight_wizard() {
    let bot = TestBot::new();
    bot.send_text(42, "Alex", "/start").await;
    bot.send_text(42, "Alex", "/goal").await;
    bot.press(42, "add_goal").await;
    bot.send_text(42, "Alex", "Run 50km").await;

    // Re-entering the flow discards the wizard.
    let replies = bot.send_text(42, "Alex", "/goal").await;
    assert_eq!(replies[0].text, messages::NO_GOALS);

    // Text at the overview is ignored, not treated as a target.
    let replies = bot.send_text(42, "Alex", "50").await;
    assert!(replies.is_empty());
    assert_eq!(bot.store.goal_count(), 0);
}

#[tokio::test]
async fn test_text_without_live_conversation_hints_at_goal_command() {
    let bot = TestBot::new();
    bot.send_text(42, "Alex", "/start").await;

    let replies = bot.send_text(42, "Alex", "hello").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, messages::RUN_GOAL_HINT);
}

#[tokio::test]
async fn test_unreachable_blocks_user_and_drops_session() {
    let bot = TestBot::new();
    bot.send_text(42, "Alex", "/start").await;
    bot.send_text(42, "Alex", "/goal").await;

    let replies = bot.unreachable(42).await;
    assert!(replies.is_empty());
    assert!(bot.store.stored_user(42).unwrap().is_blocked);

    // The session is gone; plain text now just hints.
    let replies = bot.send_text(42, "Alex", "hello").await;
    assert_eq!(replies[0].text, messages::RUN_GOAL_HINT);

    // First contact clears the block again.
    bot.send_text(42, "Alex", "/start").await;
    assert!(!bot.store.stored_user(42).unwrap().is_blocked);
    assert_eq!(bot.store.user_count(), 1);
}

#[tokio::test]
async fn test_storage_failure_surfaces_as_generic_error() {
    let bot = TestBot::new();
    bot.store.set_fail(true);

    let replies = bot.send_text(42, "Alex", "/start").await;
    assert_eq!(replies[0].text, messages::SOMETHING_WENT_WRONG);
    assert_eq!(bot.store.user_count(), 0);
}

#[tokio::test]
async fn test_help_and_unknown_commands() {
    let bot = TestBot::new();

    let replies = bot.send_text(42, "Alex", "/help").await;
    assert_eq!(replies[0].text, messages::HELP_TEXT);

    let replies = bot.send_text(42, "Alex", "/bogus").await;
    assert_eq!(replies[0].text, messages::UNKNOWN_COMMAND);
}

#[tokio::test]
async fn test_concurrent_users_have_independent_sessions() {
    let bot = TestBot::new();
    bot.send_text(1, "Alex", "/start").await;
    bot.send_text(2, "Blake", "/start").await;
    bot.send_text(1, "Alex", "/goal").await;
    bot.send_text(2, "Blake", "/goal").await;

    // User 1 walks the wizard; user 2's conversation stays at the overview.
    bot.press(1, "add_goal").await;
    bot.send_text(1, "Alex", "Run 50km").await;
    bot.send_text(1, "Alex", "50").await;
    bot.press(1, "confirm").await;

    assert_eq!(bot.store.goal_count(), 1);
    let replies = bot.send_text(2, "Blake", "50").await;
    assert!(replies.is_empty(), "stray text at user 2's overview is ignored");
    assert_eq!(bot.store.stored_goal(1).unwrap().user_id, bot.store.stored_user(1).unwrap().id);
}
