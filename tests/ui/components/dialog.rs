use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todoflow::notify::ToastKind;
use todoflow::ui::components::dialogs::system_dialogs::help_text;
use todoflow::ui::components::DialogComponent;
use todoflow::ui::core::{Action, Component, DialogType};

fn press(dialog: &mut DialogComponent, code: KeyCode) -> Action {
    dialog.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        press(dialog, KeyCode::Char(c));
    }
}

fn open(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(dialog_type));
    assert!(dialog.is_visible());
    dialog
}

#[test]
fn test_task_creation_submits_trimmed_title() {
    let mut dialog = open(DialogType::TaskCreation);
    type_text(&mut dialog, "  Buy milk ");

    match press(&mut dialog, KeyCode::Enter) {
        Action::CreateTask(title) => assert_eq!(title, "Buy milk"),
        other => panic!("expected CreateTask, got {:?}", other),
    }
    assert!(!dialog.is_visible());
    assert_eq!(dialog.input_buffer, "");
}

#[test]
fn test_empty_task_creation_keeps_dialog_open() {
    let mut dialog = open(DialogType::TaskCreation);
    type_text(&mut dialog, "   ");

    assert!(matches!(press(&mut dialog, KeyCode::Enter), Action::Notify(ToastKind::Info, _)));
    assert!(dialog.is_visible());
}

#[test]
fn test_line_editing() {
    let mut dialog = open(DialogType::TaskCreation);
    type_text(&mut dialog, "helo");
    press(&mut dialog, KeyCode::Left);
    type_text(&mut dialog, "l");
    assert_eq!(dialog.input_buffer, "hello");

    press(&mut dialog, KeyCode::Home);
    press(&mut dialog, KeyCode::Delete);
    assert_eq!(dialog.input_buffer, "ello");

    press(&mut dialog, KeyCode::End);
    press(&mut dialog, KeyCode::Backspace);
    assert_eq!(dialog.input_buffer, "ell");
    assert_eq!(dialog.cursor_position, 3);
}

#[test]
fn test_edit_dialog() {
    let edit = DialogType::TaskEdit {
        task_id: "42".to_string(),
        title: "Old".to_string(),
    };

    // Prefilled, and an unchanged title just closes
    let mut dialog = open(edit.clone());
    assert_eq!(dialog.input_buffer, "Old");
    assert!(matches!(press(&mut dialog, KeyCode::Enter), Action::HideDialog));

    let mut dialog = open(edit);
    for _ in 0..3 {
        press(&mut dialog, KeyCode::Backspace);
    }
    type_text(&mut dialog, "New");
    match press(&mut dialog, KeyCode::Enter) {
        Action::EditTask { id, args } => {
            assert_eq!(id, "42");
            assert_eq!(args.title.as_deref(), Some("New"));
            assert!(args.status.is_none());
        }
        other => panic!("expected EditTask, got {:?}", other),
    }
}

#[test]
fn test_delete_confirmation() {
    let confirm = DialogType::DeleteConfirmation {
        task_id: "7".to_string(),
        title: "Old task".to_string(),
    };

    let mut dialog = open(confirm.clone());
    assert!(matches!(press(&mut dialog, KeyCode::Char('x')), Action::None));
    assert!(matches!(press(&mut dialog, KeyCode::Char('y')), Action::DeleteTask(id) if id == "7"));

    let mut dialog = open(confirm);
    assert!(matches!(press(&mut dialog, KeyCode::Char('n')), Action::HideDialog));
}

#[test]
fn test_search_dialog_updates_live() {
    let mut dialog = open(DialogType::TaskSearch {
        query: "mi".to_string(),
    });
    assert_eq!(dialog.input_buffer, "mi");

    assert!(matches!(press(&mut dialog, KeyCode::Char('l')), Action::SetSearch(q) if q == "mil"));
    assert!(matches!(press(&mut dialog, KeyCode::Left), Action::None));
    assert!(matches!(press(&mut dialog, KeyCode::Esc), Action::SetSearch(q) if q.is_empty()));
    assert!(!dialog.is_visible());
}

#[test]
fn test_voice_prompt() {
    let mut dialog = open(DialogType::VoicePrompt);
    assert!(matches!(press(&mut dialog, KeyCode::Enter), Action::HideDialog));

    let mut dialog = open(DialogType::VoicePrompt);
    type_text(&mut dialog, "toggle view");
    assert!(matches!(press(&mut dialog, KeyCode::Enter), Action::VoiceTranscript(t) if t == "toggle view"));
}

#[test]
fn test_scrollable_dialogs() {
    let mut dialog = open(DialogType::Help);
    assert!(matches!(press(&mut dialog, KeyCode::Char('j')), Action::None));
    assert_eq!(dialog.scroll.offset, 1);
    assert!(matches!(press(&mut dialog, KeyCode::Char('x')), Action::None));
    assert!(matches!(press(&mut dialog, KeyCode::Char('?')), Action::HideDialog));

    let mut dialog = open(DialogType::Logs);
    assert!(matches!(press(&mut dialog, KeyCode::Char('G')), Action::HideDialog));

    // Messages close on any key that does not scroll
    let mut dialog = open(DialogType::Error("boom".to_string()));
    assert!(matches!(press(&mut dialog, KeyCode::Down), Action::None));
    assert!(matches!(press(&mut dialog, KeyCode::Char('x')), Action::HideDialog));
}

#[test]
fn test_hide_dialog_resets_state() {
    let mut dialog = open(DialogType::TaskCreation);
    type_text(&mut dialog, "draft");
    assert!(matches!(dialog.update(Action::HideDialog), Action::None));
    assert!(!dialog.is_visible());
    assert_eq!(dialog.input_buffer, "");

    // Other actions pass through untouched
    assert!(matches!(dialog.update(Action::CycleFilter), Action::CycleFilter));
}

#[test]
fn test_help_text_hides_voice_when_unsupported() {
    assert!(help_text(true).lines().any(|line| line.starts_with(':')));
    assert!(!help_text(false).lines().any(|line| line.starts_with(':')));
    assert!(help_text(false).contains("Tab"));
}
