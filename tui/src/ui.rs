//! Rendering.
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  MediDesk   [1] Appointments  [2] Patients  [3] Doctors  ...        │
//!   ├─── filter bar ──────────────────────────────────────────────────────┤
//!   │  Search: smith   Filter: scheduled   Tab: Upcoming                  │
//!   ├─── list ────────────────────────────────────────────────────────────┤
//!   │  rows of the current view                                           │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  Showing N of M ...                  │ toast                        │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! The appointment dialog is drawn centered over the list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use medidesk_contracts::error::DeskResult;
use medidesk_core::{
    filter::{AppointmentTab, ListOutcome},
    stats::bills_total,
};

use crate::{
    app::{App, Mode, ToastKind, View},
    dialog::{AppointmentDialog, DialogField},
};

pub fn ui(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // filter bar
            Constraint::Min(6),    // list
            Constraint::Length(1), // status line
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, outer[0], app);
    render_filter_bar(f, outer[1], app);

    let drawn = if app.view == View::Dashboard {
        render_dashboard(f, outer[2], app)
    } else {
        render_list(f, outer[2], app)
    };
    let status = match drawn {
        Ok(status) => status,
        Err(e) => format!("Failed to load {}: {}", app.view.noun(), e),
    };
    render_status(f, outer[3], app, &status);
    render_footer(f, outer[4], app);

    if let Some(dialog) = &app.dialog {
        render_dialog(f, f.area(), app, dialog);
    }
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn key_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans: Vec<Span> = vec![Span::styled("MediDesk    ", title_style)];

    for (i, view) in View::ALL.iter().enumerate() {
        let style = if app.view == *view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}] {}  ", i + 1, view.title()), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(bordered()), area);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    if !app.view.filterable() {
        let line = Line::from(vec![
            Span::styled("Day: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.today.format("%A %Y-%m-%d").to_string(),
                Style::default().fg(Color::White),
            ),
        ]);
        f.render_widget(Paragraph::new(line).block(bordered()), area);
        return;
    }

    let searching = app.mode == Mode::Search;
    let search_style = if searching {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if searching { "_" } else { "" };

    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{}{}", app.search(), cursor), search_style),
        Span::raw("   "),
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(app.category_label(), Style::default().fg(Color::White)),
    ];

    if app.view == View::Appointments {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Tab: ", Style::default().fg(Color::Gray)));
        for tab in AppointmentTab::ALL {
            let style = if tab == app.tab {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("{} ", tab.title()), style));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(bordered()), area);
}

/// Draw the current view's rows and return the status-line text.
fn render_list(f: &mut Frame, area: Rect, app: &App) -> DeskResult<String> {
    let mut summary = None;
    let (lines, total) = match app.view {
        View::Appointments => {
            let listing = app.appointments()?;
            let lines = listing
                .rows
                .iter()
                .map(|a| {
                    format!(
                        "{:<10} {:<8} {:<18} {:<20} {:<24} {}",
                        a.date.to_string(),
                        a.time,
                        truncate(&a.patient_name, 18),
                        truncate(&a.doctor_name, 20),
                        truncate(&a.service, 24),
                        a.status
                    )
                })
                .collect::<Vec<_>>();
            (lines, listing.total)
        }
        View::Patients => {
            let listing = app.patients()?;
            let lines = listing
                .rows
                .iter()
                .map(|p| {
                    format!(
                        "{:<6} {:<20} {:<5} {:<10} {:<28} {}",
                        p.id,
                        truncate(&p.name, 20),
                        p.blood_type,
                        p.phone,
                        truncate(&p.email, 28),
                        p.status
                    )
                })
                .collect::<Vec<_>>();
            (lines, listing.total)
        }
        View::Doctors => {
            let listing = app.doctors()?;
            let lines = listing
                .rows
                .iter()
                .map(|d| {
                    format!(
                        "{:<20} {:<12} {:<26} {:>2} yrs  {}",
                        truncate(&d.name, 20),
                        d.department,
                        truncate(&d.specialization, 26),
                        d.experience,
                        d.status
                    )
                })
                .collect::<Vec<_>>();
            (lines, listing.total)
        }
        View::Billing => {
            let listing = app.bills()?;
            let lines = listing
                .rows
                .iter()
                .map(|b| {
                    format!(
                        "{:<10} {:<20} {:<10} {:>10.2}  {}",
                        b.id,
                        truncate(&b.patient_name, 20),
                        b.date.to_string(),
                        b.total,
                        b.payment_status
                    )
                })
                .collect::<Vec<_>>();
            if !listing.rows.is_empty() {
                summary = Some(format!("Total: {:.2}", bills_total(&listing.rows)));
            }
            (lines, listing.total)
        }
        View::Records => {
            let listing = app.prescriptions()?;
            let lines = listing
                .rows
                .iter()
                .map(|rx| {
                    format!(
                        "{:<10} {:<18} {:<20} {}",
                        rx.date.to_string(),
                        truncate(&rx.patient_name, 18),
                        truncate(&rx.doctor_name, 20),
                        rx.diagnosis
                    )
                })
                .collect::<Vec<_>>();
            (lines, listing.total)
        }
        View::Dashboard => return render_dashboard(f, area, app),
    };

    let outcome = ListOutcome::of(total, lines.len());
    let block = bordered().title(format!(" {} ", app.view.title()));

    if lines.is_empty() {
        let message = match (app.view, outcome) {
            (View::Appointments, ListOutcome::NoMatches) if app.search().is_empty() => {
                app.tab.empty_message().to_string()
            }
            _ => outcome.message(app.view.noun()),
        };
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(empty, area);
        return Ok(String::new());
    }

    f.render_widget(List::new(cursor_items(lines, app.cursor)).block(block), area);
    let message = outcome.message(app.view.noun());
    Ok(match summary {
        Some(summary) => format!("{}    {}", message, summary),
        None => message,
    })
}

fn cursor_items(lines: Vec<String>, cursor: usize) -> Vec<ListItem<'static>> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == cursor {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(line, style)))
        })
        .collect()
}

/// Overview counters above the list of today's appointments.
fn render_dashboard(f: &mut Frame, area: Rect, app: &App) -> DeskResult<String> {
    let stats = app.stats()?;
    let today = app.todays_appointments()?;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let cards = vec![
        Line::from(vec![
            Span::styled(" Patients ", label),
            Span::styled(format!("{:<8}", stats.total_patients), value),
            Span::styled("Active doctors ", label),
            Span::styled(format!("{:<8}", stats.active_doctors), value),
            Span::styled("Appointments ", label),
            Span::styled(stats.total_appointments.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Revenue ", label),
            Span::styled(format!("{:<9.2}", stats.total_revenue), value),
            Span::styled("Outstanding bills ", label),
            Span::styled(stats.outstanding_bills.to_string(), value),
        ]),
    ];
    f.render_widget(
        Paragraph::new(cards).block(bordered().title(" Overview ")),
        chunks[0],
    );

    let block = bordered().title(" Today's Appointments ");
    if today.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No appointments scheduled for today",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, chunks[1]);
        return Ok(String::new());
    }

    let lines = today
        .iter()
        .map(|a| {
            format!(
                "{:<8} {:<18} {:<20} {:<24} {}",
                a.time,
                truncate(&a.patient_name, 18),
                truncate(&a.doctor_name, 20),
                truncate(&a.service, 24),
                a.status
            )
        })
        .collect::<Vec<_>>();
    let count = lines.len();
    f.render_widget(List::new(cursor_items(lines, app.cursor)).block(block), chunks[1]);
    Ok(format!("{} {}", count, app.view.noun()))
}

fn render_status(f: &mut Frame, area: Rect, app: &App, status: &str) {
    let mut spans = vec![Span::styled(format!(" {}", status), Style::default().fg(Color::Gray))];

    if let Some(toast) = &app.toast {
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            toast.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let bindings: &[(&str, &str)] = match app.mode {
        Mode::Search => &[("[Enter] ", "Apply  "), ("[Esc] ", "Clear  ")],
        Mode::Dialog => &[
            ("[Tab/↑↓] ", "Field  "),
            ("[←→] ", "Choose  "),
            ("[Enter] ", "Save  "),
            ("[Esc] ", "Close  "),
        ],
        Mode::Browse if app.view == View::Appointments => &[
            ("[1-6] ", "View  "),
            ("[/] ", "Search  "),
            ("[f] ", "Filter  "),
            ("[Tab] ", "Tab  "),
            ("[n] ", "New  "),
            ("[e] ", "Edit  "),
            ("[x] ", "Cancel  "),
            ("[q] ", "Quit"),
        ],
        Mode::Browse if app.view == View::Dashboard => &[("[1-6] ", "View  "), ("[q] ", "Quit")],
        Mode::Browse => &[
            ("[1-6] ", "View  "),
            ("[/] ", "Search  "),
            ("[f] ", "Filter  "),
            ("[q] ", "Quit"),
        ],
    };

    let spans: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, label)| [Span::styled(*key, key_style()), Span::raw(*label)])
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).block(bordered()), area);
}

// ── Dialog ────────────────────────────────────────────────────────────────────

fn render_dialog(f: &mut Frame, full: Rect, app: &App, dialog: &AppointmentDialog) {
    let area = centered(full, 64, 20);
    let reference = app.hospital.desk.reference();

    let mut lines: Vec<Line> = Vec::new();
    for field in DialogField::ALL {
        let value = match field {
            DialogField::PatientName => dialog.form.patient_name.clone(),
            DialogField::Doctor => dialog.doctor_label(reference),
            DialogField::Service => dialog.form.service.clone(),
            DialogField::Date => dialog
                .form
                .date
                .map(|d| d.format("%a %Y-%m-%d").to_string())
                .unwrap_or_default(),
            DialogField::Time => dialog.form.time.clone(),
            DialogField::Duration => dialog.duration_text.clone(),
            DialogField::Notes => dialog.form.notes.clone().unwrap_or_default(),
        };

        let focused = dialog.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "▸ " } else { "  " };
        let placeholder = if value.is_empty() { "-" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<16}", marker, field.label()), label_style),
            Span::raw(value),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ]));

        if let Some(message) = dialog.error_for(field) {
            lines.push(Line::from(Span::styled(
                format!("  {:<16}{}", "", message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to save, Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(dialog.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use medidesk_ref_hospital::seeded_hospital;

    use super::*;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn app() -> App {
        App::new(seeded_hospital().unwrap(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    #[test]
    fn test_truncate_marks_cut_text() {
        assert_eq!(truncate("Dr. Sarah Johnson", 6), "Dr. S…");
        assert_eq!(truncate("short", 6), "short");
    }

    #[test]
    fn test_footer_line_counts_rows() {
        let screen = rendered(&app());
        assert!(screen.contains("Showing 2 of 5 appointments"));
        assert!(screen.contains("John Smith"));
    }

    #[test]
    fn test_unmatched_search_has_its_own_message() {
        let mut app = app();
        app.appointment_filter.search = "nobody".to_string();
        assert!(rendered(&app).contains("No appointments match your search"));
    }

    #[test]
    fn test_billing_status_shows_filtered_total() {
        let mut app = app();
        app.view = View::Billing;
        let screen = rendered(&app);
        assert!(screen.contains("Showing 3 of 3 bills"));
        assert!(screen.contains("Total: 445.40"));

        app.bill_filter.search = "INV-1003".to_string();
        assert!(rendered(&app).contains("Total: 60.00"));
    }

    #[test]
    fn test_dashboard_shows_revenue_and_day_list() {
        let mut app = App::new(
            seeded_hospital().unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        );
        app.view = View::Dashboard;
        let screen = rendered(&app);
        assert!(screen.contains("Revenue 248.40"));
        assert!(screen.contains("Today's Appointments"));
        assert!(screen.contains("09:00 AM John Smith"));
    }

    #[test]
    fn test_dialog_shows_inline_errors() {
        let mut app = app();
        let mut dialog = AppointmentDialog::new_appointment();
        dialog.errors.insert(
            medidesk_contracts::form::FormField::PatientName,
            "Patient name is required",
        );
        app.dialog = Some(dialog);
        app.mode = Mode::Dialog;

        let screen = rendered(&app);
        assert!(screen.contains("New Appointment"));
        assert!(screen.contains("Patient name is required"));
    }
}
