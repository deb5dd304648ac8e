//! Detail dialogs.
//!
//! One dialog per open detail slot, drawn bottom to top in stacking order
//! and offset slightly so every open dialog stays visible.

use super::constants::{
    DETAIL_CASCADE_STEP, DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT,
};
use super::helpers::{centered_rect, empty_line, key_value_line};
use super::styles::TableStyles;
use crate::model::{ClassroomRecord, Phase, Team, ToolboxOrder};
use crate::state::DetailSlots;
use crate::table::projector::status;
use crate::table::{DetailKind, PLACEHOLDER};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Dialog title.
pub fn dialog_title(kind: DetailKind) -> &'static str {
    match kind {
        DetailKind::Project => "Projekt",
        DetailKind::Team => "Tým",
        DetailKind::Branch => "Pobočka",
        DetailKind::School => "Škola",
        DetailKind::Toolbox => "Toolbox",
    }
}

/// Render every open dialog and return their areas, bottom first.
pub fn render_detail_dialogs(
    frame: &mut Frame,
    details: &DetailSlots,
    styles: &TableStyles,
) -> Vec<Rect> {
    let base = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    let screen = frame.area();

    details
        .open_kinds()
        .into_iter()
        .enumerate()
        .map(|(layer, kind)| {
            let area = cascade(base, layer, screen);
            render_dialog(frame, area, kind, dialog_lines(details, kind, styles), styles);
            area
        })
        .collect()
}

/// `base` shifted right and down for the given layer, kept on screen.
fn cascade(base: Rect, layer: usize, screen: Rect) -> Rect {
    let step = u16::try_from(layer)
        .unwrap_or(u16::MAX)
        .saturating_mul(DETAIL_CASCADE_STEP);
    let x = base
        .x
        .saturating_add(step)
        .min(screen.right().saturating_sub(base.width));
    let y = base
        .y
        .saturating_add(step)
        .min(screen.bottom().saturating_sub(base.height));
    Rect { x, y, ..base }
}

fn render_dialog(
    frame: &mut Frame,
    area: Rect,
    kind: DetailKind,
    lines: Vec<Line<'static>>,
    styles: &TableStyles,
) {
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", dialog_title(kind)))
                .title_bottom(
                    Line::from(Span::styled(" Esc: zavřít ", styles.muted))
                        .alignment(Alignment::Right),
                )
                .borders(Borders::ALL)
                .border_style(styles.dialog_border),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Content of the dialog of `kind`. Empty when the slot is closed.
pub fn dialog_lines(
    details: &DetailSlots,
    kind: DetailKind,
    styles: &TableStyles,
) -> Vec<Line<'static>> {
    match kind {
        DetailKind::Project => details
            .project()
            .map(|record| project_lines(record, styles)),
        DetailKind::Team => details.team().map(|team| team_lines(team, styles)),
        DetailKind::Branch => details.branch().map(|record| branch_lines(record, styles)),
        DetailKind::School => details.school().map(|record| school_lines(record, styles)),
        DetailKind::Toolbox => details
            .toolbox()
            .map(|order| toolbox_lines(order, styles)),
    }
    .unwrap_or_default()
}

fn project_lines(record: &ClassroomRecord, styles: &TableStyles) -> Vec<Line<'static>> {
    let label = styles.label;
    let progress = status(record);
    let semester = record.semester.as_ref().and_then(|s| s.truthy_text());
    let earnings = record.money_goal_amount.as_ref().and_then(|s| s.truthy_text());

    let mut lines = vec![
        key_value_line("Třída", record.classroom_name.as_deref(), label),
        key_value_line("Stav projektu", Some(&progress), label),
        key_value_line("Pololetí", semester.as_deref(), label),
        key_value_line("Název firmy", record.company_name.as_deref(), label),
        key_value_line("V čem děti podnikají", record.business_description.as_deref(), label),
        key_value_line("Výdělek použití", record.business_purpose.as_deref(), label),
        key_value_line("Výdělek (Kč)", earnings.as_deref(), label),
    ];

    let phases = record.phases.as_deref().unwrap_or_default();
    if !phases.is_empty() {
        lines.push(empty_line());
        lines.push(Line::from(Span::styled("Fáze", styles.section)));
        lines.extend(
            phases
                .iter()
                .enumerate()
                .map(|(position, phase)| phase_line(position, phase)),
        );
    }
    lines
}

/// `"  ✓ 1. Plan (5.3.2019)"` for finished phases, `"    2. Build"` otherwise.
fn phase_line(position: usize, phase: &Phase) -> Line<'static> {
    let number = phase
        .number
        .map_or_else(|| (position + 1).to_string(), |n| n.to_string());
    let name = phase.name.as_deref().unwrap_or(PLACEHOLDER);
    let mark = if phase.is_finished() { "✓" } else { " " };
    let date = phase
        .finish_date_display()
        .filter(|_| phase.is_finished())
        .map(|date| format!(" ({date})"))
        .unwrap_or_default();
    Line::from(format!("  {mark} {number}. {name}{date}"))
}

fn team_lines(team: &Team, styles: &TableStyles) -> Vec<Line<'static>> {
    let users = team.users.as_deref().unwrap_or_default();
    if users.is_empty() {
        return vec![Line::from(Span::styled("Tým nemá žádné členy", styles.muted))];
    }

    let mut lines = Vec::new();
    for (index, user) in users.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(user.display_name(), styles.section)));
        lines.push(key_value_line("E-mail", user.email.as_deref(), styles.label));
        lines.push(key_value_line("Region", user.region.as_deref(), styles.label));
        let account = if user.is_activated() {
            "aktivní"
        } else {
            "čeká na aktivaci"
        };
        lines.push(key_value_line("Účet", Some(account), styles.label));
    }
    lines
}

fn branch_lines(record: &ClassroomRecord, styles: &TableStyles) -> Vec<Line<'static>> {
    let label = styles.label;
    vec![
        key_value_line("Adresa", record.branch_address.as_deref(), label),
        empty_line(),
        Line::from(Span::styled("Zástupce pobočky", styles.section)),
        key_value_line("Jméno", record.branch_representative_name.as_deref(), label),
        key_value_line("E-mail", record.branch_representative_email.as_deref(), label),
        key_value_line("Telefon", record.branch_representative_phone.as_deref(), label),
    ]
}

fn school_lines(record: &ClassroomRecord, styles: &TableStyles) -> Vec<Line<'static>> {
    let label = styles.label;
    vec![
        key_value_line("Adresa", record.school_address.as_deref(), label),
        key_value_line("Schůzka", record.school_meeting.as_deref(), label),
        empty_line(),
        Line::from(Span::styled("Ředitel", styles.section)),
        key_value_line("Jméno", record.director_name.as_deref(), label),
        key_value_line("E-mail", record.director_email.as_deref(), label),
        key_value_line("Telefon", record.director_phone.as_deref(), label),
        empty_line(),
        Line::from(Span::styled("Učitel", styles.section)),
        key_value_line("Jméno", record.teacher_name.as_deref(), label),
        key_value_line("E-mail", record.teacher_email.as_deref(), label),
        key_value_line("Telefon", record.teacher_phone.as_deref(), label),
    ]
}

fn toolbox_lines(order: &ToolboxOrder, styles: &TableStyles) -> Vec<Line<'static>> {
    let label = styles.label;
    let children = order.children_count.map(|count| count.to_string());
    vec![
        key_value_line("Stav", order.state.as_deref(), label),
        key_value_line("Příjemce", order.recipient.as_deref(), label),
        key_value_line("Adresa", order.address.as_deref(), label),
        key_value_line("Počet dětí", children.as_deref(), label),
    ]
}

#[cfg(test)]
#[path = "detail_modal_tests.rs"]
mod tests;
