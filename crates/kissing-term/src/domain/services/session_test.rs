use super::*;
use crate::domain::models::ReportStatus;
use crate::domain::services::BoundEstimator;

#[test]
fn it_starts_awaiting_input() {
    let controller = SessionController::default();

    assert_eq!(controller.session().phase, Phase::AwaitingInput);
    assert_eq!(controller.session().dimension, None);
    assert_eq!(controller.session().mode, DisplayMode::Exact);
    assert_eq!(controller.current_report(), &Report::Idle);
}

#[test]
fn it_shows_a_report_after_submission() {
    let mut controller = SessionController::default();
    controller.submit_dimension("8");

    assert_eq!(controller.session().phase, Phase::ShowingReport);
    assert_eq!(controller.session().dimension, Some(8));
    assert_eq!(controller.current_report().status(), ReportStatus::Exact);
}

#[test]
fn it_trims_submitted_text() {
    let mut controller = SessionController::default();
    controller.submit_dimension("  5 ");

    assert_eq!(controller.session().dimension, Some(5));
    assert_eq!(
        controller.current_report().status(),
        ReportStatus::BoundedUnproven
    );
}

#[test]
fn it_rejects_invalid_input_without_touching_the_dimension() {
    let mut controller = SessionController::default();

    for text in ["0", "-3", "abc", "", "4.5", "99999999999999999999"] {
        controller.submit_dimension(text);
        assert_eq!(controller.current_report(), &Report::Invalid, "input {text:?}");
        assert_eq!(controller.session().dimension, None);
        assert_eq!(controller.session().phase, Phase::ShowingReport);
    }

    controller.submit_dimension("24");
    controller.submit_dimension("nope");
    assert_eq!(controller.current_report(), &Report::Invalid);
    assert_eq!(controller.session().dimension, Some(24));
}

#[test]
fn it_requeries_on_mode_change() {
    let mut controller = SessionController::default();
    controller.submit_dimension("8");
    controller.select_mode(DisplayMode::Asymptotic);

    let (lower, upper) = BoundEstimator::estimate(8);
    assert_eq!(
        controller.current_report(),
        &Report::Asymptotic {
            dimension: 8,
            lower,
            upper,
        }
    );

    controller.select_mode(DisplayMode::Exact);
    assert_eq!(controller.current_report().status(), ReportStatus::Exact);
}

#[test]
fn it_requeries_the_last_valid_dimension_after_an_error() {
    let mut controller = SessionController::default();
    controller.submit_dimension("6");
    controller.submit_dimension("-1");
    controller.select_mode(DisplayMode::Exact);

    assert_eq!(
        controller.current_report(),
        &Report::Bounded {
            dimension: 6,
            lower: 72,
            upper: 78,
        }
    );
}

#[test]
fn it_only_records_the_mode_before_any_submission() {
    let mut controller = SessionController::default();
    controller.select_mode(DisplayMode::Asymptotic);

    assert_eq!(controller.session().mode, DisplayMode::Asymptotic);
    assert_eq!(controller.session().phase, Phase::AwaitingInput);
    assert_eq!(controller.current_report(), &Report::Idle);

    controller.submit_dimension("9");
    assert_eq!(controller.current_report().status(), ReportStatus::Asymptotic);
}

#[test]
fn it_quits_without_changing_state() {
    let engine = QueryEngine::default();
    let (session, _) = transition(
        &engine,
        Session::default(),
        &Command::SubmitDimension("3".to_string()),
    );

    let (after, flow) = transition(&engine, session.clone(), &Command::Quit);
    assert_eq!(flow, Flow::Quit);
    assert_eq!(after, session);
}

#[test]
fn it_transitions_as_a_pure_function() {
    let engine = QueryEngine::default();
    let start = Session::new(DisplayMode::Asymptotic);
    let command = Command::SubmitDimension("12".to_string());

    let (first, first_flow) = transition(&engine, start.clone(), &command);
    let (second, second_flow) = transition(&engine, start, &command);

    assert_eq!(first, second);
    assert_eq!(first_flow, Flow::Continue);
    assert_eq!(second_flow, Flow::Continue);
    assert_eq!(first.dimension, Some(12));
}
