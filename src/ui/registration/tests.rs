//! Tests for the registration screen

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use super::{RegistrationScreen, Row, ScreenResult};
use crate::form::catalog::find_service;
use crate::form::fields::{find_static_field, FluidField, PriceField};
use crate::form::{EntryId, FieldRef};
use crate::wizard::{SimulatedSubmitter, WizardPhase, WizardStep};

fn screen() -> RegistrationScreen {
    RegistrationScreen::new(Arc::new(SimulatedSubmitter::new(Duration::from_secs(3))))
}

fn press(screen: &mut RegistrationScreen, code: KeyCode) -> ScreenResult {
    screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(screen: &mut RegistrationScreen, c: char) -> ScreenResult {
    screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(screen: &mut RegistrationScreen, text: &str) {
    for c in text.chars() {
        press(screen, KeyCode::Char(c));
    }
}

fn go_to_step(screen: &mut RegistrationScreen, step: WizardStep) {
    while screen.step() != step {
        press(screen, KeyCode::PageDown);
    }
}

/// Tab forward until the focused row matches
fn focus_on(screen: &mut RegistrationScreen, target: Row) {
    for _ in 0..screen.rows().len() {
        if screen.focused_row() == Some(target) {
            return;
        }
        press(screen, KeyCode::Tab);
    }
    panic!("row {target:?} not reachable");
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn test_new_screen_starts_on_first_field() {
    let screen = screen();
    assert_eq!(screen.step(), WizardStep::GarageInfo);
    assert_eq!(screen.focus(), 0);
    assert_eq!(
        screen.focused_row(),
        Some(Row::Field(FieldRef::Static(
            find_static_field("garageName").unwrap()
        )))
    );
}

#[test]
fn test_typing_updates_form_state() {
    let mut screen = screen();
    type_text(&mut screen, "Speedy Motors");
    assert_eq!(screen.form().static_value("garageName"), "Speedy Motors");

    press(&mut screen, KeyCode::Tab);
    type_text(&mut screen, "Anita");
    press(&mut screen, KeyCode::Backspace);
    assert_eq!(screen.form().static_value("ownerName"), "Anit");
}

#[test]
fn test_focus_clamps_at_both_ends() {
    let mut screen = screen();
    press(&mut screen, KeyCode::BackTab);
    assert_eq!(screen.focus(), 0);

    let last = screen.rows().len() - 1;
    for _ in 0..last + 3 {
        press(&mut screen, KeyCode::Tab);
    }
    assert_eq!(screen.focus(), last);
}

#[test]
fn test_values_survive_step_navigation() {
    let mut screen = screen();
    type_text(&mut screen, "Torque Garage");
    press(&mut screen, KeyCode::PageDown);
    press(&mut screen, KeyCode::PageUp);

    assert_eq!(screen.step(), WizardStep::GarageInfo);
    assert_eq!(screen.form().static_value("garageName"), "Torque Garage");
}

#[test]
fn test_brands_step_starts_with_one_entry() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::AvailableBrands);

    let rows = screen.rows();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], Row::AddFluid);
    assert_eq!(rows[1], Row::RemoveFluid(EntryId(1)));
}

#[test]
fn test_removing_last_entry_leaves_only_add_row() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::AvailableBrands);
    focus_on(&mut screen, Row::RemoveFluid(EntryId(1)));

    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.rows(), vec![Row::AddFluid]);
    assert_eq!(screen.focus(), 0);
    assert!(screen.form().fluids.is_empty());

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("[ + Add Fluid ]"));
    assert!(!text.contains("Fluid 1"));
    assert!(!text.contains("[ Remove ]"));
}

#[test]
fn test_render_empty_staff_list_shows_only_add_button() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::StaffDetails);
    focus_on(&mut screen, Row::RemoveStaff(EntryId(1)));

    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.rows(), vec![Row::AddStaff]);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("[ + Add Staff Member ]"));
    assert!(!text.contains("Staff Member 1"));
    assert!(!text.contains("[ Remove ]"));
}

#[test]
fn test_add_after_remove_uses_fresh_id() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::AvailableBrands);

    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.form().fluids.ids(), vec![EntryId(1), EntryId(2)]);

    focus_on(&mut screen, Row::RemoveFluid(EntryId(1)));
    press(&mut screen, KeyCode::Char(' '));
    press(&mut screen, KeyCode::BackTab);
    press(&mut screen, KeyCode::BackTab);
    assert_eq!(screen.focused_row(), Some(Row::AddFluid));
    press(&mut screen, KeyCode::Enter);

    assert_eq!(screen.form().fluids.ids(), vec![EntryId(2), EntryId(3)]);
    assert_eq!(screen.form().fluids.ordinal(EntryId(2)), Some(1));
}

#[test]
fn test_typing_into_fluid_entry() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::AvailableBrands);
    focus_on(
        &mut screen,
        Row::Field(FieldRef::Fluid(EntryId(1), FluidField::Brand)),
    );

    type_text(&mut screen, "Castrol");
    let fluid = screen.form().fluids.get(EntryId(1)).unwrap();
    assert_eq!(fluid.brand, "Castrol");
}

#[test]
fn test_staff_add_row_is_last() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::StaffDetails);
    let rows = screen.rows();
    assert_eq!(rows.last(), Some(&Row::AddStaff));
    assert_eq!(rows[0], Row::RemoveStaff(EntryId(1)));
}

#[test]
fn test_pick_drop_reveals_and_retains_details() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::PickAndDrop);
    assert_eq!(screen.rows().len(), 1);

    press(&mut screen, KeyCode::Char(' '));
    assert!(screen.form().pick_drop_available());
    assert_eq!(screen.rows().len(), 4);

    press(&mut screen, KeyCode::Tab);
    type_text(&mut screen, "Paid");
    press(&mut screen, KeyCode::BackTab);
    press(&mut screen, KeyCode::Right);

    assert!(!screen.form().pick_drop_available());
    assert_eq!(screen.rows().len(), 1);
    assert_eq!(screen.form().static_value("freeOrPaid"), "Paid");
}

#[test]
fn test_service_toggle_reveals_four_rows() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::PaymentAndServices);
    let before = screen.rows().len();
    let service = find_service("wheel-alignment").unwrap();
    let checkbox = screen
        .rows()
        .into_iter()
        .find(|r| matches!(r, Row::Service { service: s, .. } if s.id == service.id))
        .unwrap();

    focus_on(&mut screen, checkbox);
    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.rows().len(), before + 4);

    press(&mut screen, KeyCode::Tab);
    assert_eq!(
        screen.focused_row(),
        Some(Row::Field(FieldRef::Service(service, PriceField::Hatchback)))
    );
    type_text(&mut screen, "499");

    press(&mut screen, KeyCode::BackTab);
    press(&mut screen, KeyCode::Char(' '));
    assert_eq!(screen.rows().len(), before);
    assert_eq!(
        screen.form().services.pricing(service.id).unwrap().hatchback,
        "499"
    );
}

#[test]
fn test_multiline_field_takes_enter_and_arrows() {
    let mut screen = screen();
    let address = Row::Field(FieldRef::Static(
        find_static_field("workshopAddress").unwrap(),
    ));
    focus_on(&mut screen, address);

    type_text(&mut screen, "Plot 7");
    press(&mut screen, KeyCode::Enter);
    type_text(&mut screen, "MIDC");
    press(&mut screen, KeyCode::Up);

    assert_eq!(screen.focused_row(), Some(address));
    assert_eq!(screen.form().static_value("workshopAddress"), "Plot 7\nMIDC");
}

#[test]
fn test_submit_ignored_before_last_step() {
    let mut screen = screen();
    ctrl(&mut screen, 's');
    assert!(!screen.wizard().show_success_popup());
    assert!(!screen.has_pending_submission());
}

#[test]
fn test_help_toggle_and_close() {
    let mut screen = screen();
    press(&mut screen, KeyCode::F(1));
    assert!(screen.help.visible);

    press(&mut screen, KeyCode::Char('a'));
    assert!(!screen.help.visible);
    assert_eq!(screen.form().static_value("garageName"), "");
}

#[test]
fn test_ctrl_c_quits() {
    let mut screen = screen();
    assert_eq!(ctrl(&mut screen, 'c'), ScreenResult::Quit);
}

#[tokio::test(start_paused = true)]
async fn test_submit_shows_popup_then_completes() {
    let mut screen = screen();
    type_text(&mut screen, "Speedy Motors");
    go_to_step(&mut screen, WizardStep::PaymentAndServices);

    ctrl(&mut screen, 's');
    assert!(screen.wizard().show_success_popup());
    assert_eq!(screen.wizard().phase(), WizardPhase::Submitting);
    settle().await;

    tokio::time::advance(Duration::from_secs(3)).await;
    settle().await;
    assert!(screen.poll_submission());

    assert!(screen.wizard().is_completed());
    assert!(!screen.wizard().show_success_popup());
    assert_eq!(screen.completed_payloads().len(), 1);
    assert_eq!(
        screen.completed_payloads()[0].garage_info["garageName"],
        "Speedy Motors"
    );
}

#[tokio::test(start_paused = true)]
async fn test_popup_swallows_keys_and_dismiss_keeps_completion() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::PaymentAndServices);
    ctrl(&mut screen, 's');
    settle().await;

    press(&mut screen, KeyCode::PageUp);
    assert_eq!(screen.step(), WizardStep::PaymentAndServices);

    press(&mut screen, KeyCode::Char('x'));
    assert!(!screen.wizard().show_success_popup());
    assert_eq!(screen.wizard().phase(), WizardPhase::Submitting);

    tokio::time::advance(Duration::from_secs(3)).await;
    settle().await;
    screen.poll_submission();
    assert!(screen.wizard().is_completed());
}

#[tokio::test(start_paused = true)]
async fn test_register_another_resets_everything() {
    let mut screen = screen();
    type_text(&mut screen, "Old Garage");
    go_to_step(&mut screen, WizardStep::PaymentAndServices);
    ctrl(&mut screen, 's');
    settle().await;
    tokio::time::advance(Duration::from_secs(3)).await;
    settle().await;
    screen.poll_submission();

    press(&mut screen, KeyCode::Enter);
    assert_eq!(screen.step(), WizardStep::GarageInfo);
    assert_eq!(screen.wizard().phase(), WizardPhase::Editing);
    assert_eq!(screen.form().static_value("garageName"), "");
    assert_eq!(screen.form().fluids.ids(), vec![EntryId(1)]);
    assert_eq!(screen.completed_payloads().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_pending_submission() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::PaymentAndServices);
    ctrl(&mut screen, 's');
    settle().await;

    screen.restart();
    assert!(!screen.has_pending_submission());

    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert!(!screen.poll_submission());
    assert!(!screen.wizard().is_completed());
    assert!(screen.completed_payloads().is_empty());
}

#[test]
fn test_completed_view_quit_keys() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::PaymentAndServices);
    let ticket = match screen.wizard.submit() {
        crate::wizard::WizardResult::Submitted(t) => t,
        other => panic!("unexpected {other:?}"),
    };
    screen
        .wizard
        .complete_submission(ticket, Ok(crate::wizard::Ack::new()));

    assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenResult::Quit);
    assert_eq!(press(&mut screen, KeyCode::Esc), ScreenResult::Quit);
}

#[test]
fn test_render_each_step() {
    let mut screen = screen();
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    for step in WizardStep::all() {
        go_to_step(&mut screen, *step);
        terminal.draw(|frame| screen.render(frame)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(step.title()), "missing title {}", step.title());
    }

    let text = buffer_text(&terminal);
    assert!(text.contains("Submit"));
    assert!(text.contains("Payment Details"));
}

#[test]
fn test_render_fluid_headings_follow_position() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::AvailableBrands);
    press(&mut screen, KeyCode::Enter);
    focus_on(&mut screen, Row::RemoveFluid(EntryId(1)));
    press(&mut screen, KeyCode::Enter);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Fluid 1"));
    assert!(!text.contains("Fluid 2"));
}

#[test]
fn test_render_popup_and_completed_view() {
    let mut screen = screen();
    go_to_step(&mut screen, WizardStep::PaymentAndServices);
    let crate::wizard::WizardResult::Submitted(ticket) = screen.wizard.submit() else {
        panic!("expected submission");
    };

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();
    assert!(buffer_text(&terminal).contains("Form Submitted Successfully!"));

    screen
        .wizard
        .complete_submission(ticket, Ok(crate::wizard::Ack::new()));
    terminal.draw(|frame| screen.render(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Registration Successful!"));
    assert!(text.contains("get back to you shortly."));
    assert!(text.contains("Register Another Garage"));
}
