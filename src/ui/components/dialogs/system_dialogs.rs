use super::common::{create_dialog_block, create_instructions_paragraph, render_scrollable_text, shortcuts};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::notify::ToastKind;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
TODOFLOW
========

NAVIGATION
----------
j/k ↑↓      Move selection down/up
Tab         Next filter
1-4         All / To do / In progress / Completed
/           Search title, description and category
Esc         Clear search, or quit when no search is active

TODOS
-----
a           Add a todo
Space/Enter Toggle status (to do → completed, completed → to do)
w           Start working on the selected todo
s           Star or unstar
p           Cycle priority
e           Edit title
d           Delete (with confirmation)

VIEW
----
v           Switch between grid and spatial view
i           Change icon theme
:           Voice command prompt
G           Show logs

GENERAL
-------
?/h         Toggle this help
q, Ctrl+C   Quit

CELEBRATIONS
------------
Completing a todo shows a short burst of confetti. Every fifth completed
todo earns a milestone and finishing the whole list earns an achievement.

SCROLLING
---------
j/k ↑↓      Scroll
PageUp/Down Page
Home/End    Jump to top/bottom
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(
        format!(" {} Delete Todo ", icons.toast(ToastKind::Warning)),
        Color::Red,
    );
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(inner);

    let message = Paragraph::new(format!("Delete \"{}\"?", title))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(block, dialog_area);
    f.render_widget(message, chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[("Enter", Color::Green, " Delete"), shortcuts::ESC_CANCEL]),
        chunks[1],
    );
}

/// Info and error messages share one layout; only the colours and icon differ
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    kind: ToastKind,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let (label, color, height) = match kind {
        ToastKind::Error => ("Error", Color::Red, 12),
        ToastKind::Warning => ("Warning", Color::Yellow, 10),
        ToastKind::Success => ("Success", Color::Green, 10),
        ToastKind::Info => ("Info", Color::Blue, 10),
    };

    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(dialog_area);

    let block = create_dialog_block(format!(" {} {} ", icons.toast(kind), label), color);
    render_scrollable_text(f, chunks[0], block, message, scroll_offset, scrollbar_state);
    f.render_widget(
        create_instructions_paragraph(&[("Any key", Color::Green, " Continue"), shortcuts::SCROLL]),
        chunks[1],
    );
}

/// Help text; the voice prompt entry only appears when voice commands are supported
pub fn help_text(voice_supported: bool) -> String {
    HELP_TEXT
        .lines()
        .filter(|line| voice_supported || !line.starts_with(':'))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    voice_supported: bool,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let help_area = LayoutManager::centered_rect(80, 90, area);
    f.render_widget(Clear, help_area);

    let block = create_dialog_block(" 📖 Help - Esc, ? or h to close ".to_string(), Color::White)
        .title_alignment(Alignment::Center);
    render_scrollable_text(f, help_area, block, &help_text(voice_supported), scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let logs = logger.get_logs();
    let content = if !logger.is_enabled() {
        "Logging is disabled. Set logging.enabled = true in the config file.".to_string()
    } else if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    let block = create_dialog_block(format!(" {} ", DIALOG_TITLE_LOGS), Color::White).title_alignment(Alignment::Center);
    render_scrollable_text(f, logs_area, block, &content, scroll_offset, scrollbar_state);
}
