//! # Scenario Tests
//!
//! The user-visible walkthroughs of the deposit page.

use super::*;
use crate::error::INSUFFICIENT_BALANCE;
use crate::links::ExplorerLinks;

#[tokio::test]
async fn test_amount_above_balance_blocks_confirm() {
    // Arrange
    let mut form = loaded_form("2.5").await;

    // Act
    form.set_amount("3");

    // Assert
    assert_eq!(form.error_message(), INSUFFICIENT_BALANCE);
    assert!(!form.can_confirm());
}

#[tokio::test]
async fn test_successful_deposit_links_hash() {
    // Arrange
    let mut form = loaded_form("2.5").await;
    let submitter = ScriptedSubmitter::succeeding("0xabc");
    form.set_amount("1");
    assert_eq!(form.error_message(), "");
    assert!(form.can_confirm());

    // Act
    let mode = confirm(&mut form, &submitter)
        .await
        .expect("Confirm should settle");

    // Assert
    assert_eq!(mode, ViewMode::Success);
    let links = StakingConfig::default().links();
    let link = form.result_link(&links).expect("Success should carry a link");
    assert!(link.contains("0xabc"));

    let requests = submitter.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].account, ACCOUNT);
    assert_eq!(requests[0].amount, "1");
}

#[tokio::test]
async fn test_failed_deposit_shows_capitalized_reason() {
    // Arrange
    let mut form = loaded_form("2.5").await;
    let submitter = ScriptedSubmitter::failing(&["insufficient funds"]);
    form.set_amount("1");

    // Act
    let mode = confirm(&mut form, &submitter)
        .await
        .expect("Confirm should settle");

    // Assert
    assert_eq!(mode, ViewMode::Failure);
    assert_eq!(form.failure_message(), Some("Insufficient funds"));
}

#[tokio::test]
async fn test_retry_after_failure() {
    let mut form = loaded_form("2.5").await;
    form.set_amount("1");
    confirm(&mut form, &ScriptedSubmitter::failing(&["user rejected transaction"]))
        .await
        .expect("First confirm should settle");

    // Try Again keeps the amount and does not resubmit on its own
    form.dismiss_failure().expect("Failure should dismiss");
    assert_eq!(form.view_mode(), ViewMode::Entry);
    assert_eq!(form.amount(), "1");

    let submitter = ScriptedSubmitter::succeeding("0xdef");
    let mode = confirm(&mut form, &submitter)
        .await
        .expect("Second confirm should settle");
    assert_eq!(mode, ViewMode::Success);
    assert_eq!(submitter.requests.borrow().len(), 1);
}

#[tokio::test]
async fn test_dismiss_success_navigates_home() {
    // Arrange
    let mut form = loaded_form("2.5").await;
    let navigator = RecordingNavigator::default();
    form.set_amount("1");
    confirm(&mut form, &ScriptedSubmitter::succeeding("0xabc"))
        .await
        .expect("Confirm should settle");

    // Act
    navigator.navigate(form.dismiss_success());

    // Assert
    assert_eq!(navigator.visited.borrow().as_slice(), &[Navigation::Home]);
    assert!(form.result().is_none());
    assert!(form.result_link(&ExplorerLinks::for_network(Network::Sepolia)).is_none());
}

#[tokio::test]
async fn test_back_arrow_keeps_form() {
    let mut form = loaded_form("2.5").await;
    let navigator = RecordingNavigator::default();
    form.set_amount("0.75");

    navigator.navigate(form.go_back());

    assert_eq!(navigator.visited.borrow().as_slice(), &[Navigation::Back]);
    assert_eq!(form.amount(), "0.75");
}

#[tokio::test]
async fn test_second_confirm_while_pending_is_refused() {
    let mut form = loaded_form("2.5").await;
    form.set_amount("1");
    form.begin_submit(ACCOUNT).expect("First submit should start");

    assert!(!form.can_confirm());
    assert_state_error(form.begin_submit(ACCOUNT));
    assert_state_error(form.dismiss_failure());
}

#[tokio::test]
async fn test_max_then_confirm() {
    let mut form = loaded_form("2.5").await;
    let submitter = ScriptedSubmitter::succeeding("0xabc");

    form.set_max_amount();
    assert_eq!(form.amount(), "2.49");

    confirm(&mut form, &submitter)
        .await
        .expect("Confirm should settle");
    assert_eq!(
        submitter.requests.borrow()[0].value_wei,
        "2490000000000000000"
    );
}
