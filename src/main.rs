//! Mailcamp TUI - Actor-based email campaign client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async gateway calls

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use mailcamp_tui::app::state::{AuthForm, PendingDelete};
use mailcamp_tui::app::wizard::{CampaignWizard, WizardField, WizardStep};
use mailcamp_tui::config::Config;
use mailcamp_tui::constants::{APP_NAME, LOG_FILE_NAME, MAX_RECIPIENT_SLOTS, MAX_SENDER_SLOTS};
use mailcamp_tui::messages::ui_events::{key_to_ui_event, AuthField, InputMode, KeyContext, Page, View};
use mailcamp_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use mailcamp_tui::models::AuthMode;
use mailcamp_tui::ui::{popup_block, render_input, render_secret, render_selectable, render_tabs, status_color};
use mailcamp_tui::app::lists::EditorField;
use mailcamp_tui::{ApiClient, AppActor, AppState, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!(api_base = %config.api_base, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = ApiClient::new(
        config.api_base.clone(),
        Duration::from_secs(config.request_timeout_secs),
    );
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(
        AppState::new(config.email_validation_url.clone()),
        net_cmd_tx,
        render_tx,
    );
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let ctx = KeyContext::from(&current_state);
                if let Some(event) = key_to_ui_event(key, &ctx) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title / tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status message
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    match state.view {
        View::Auth(mode) => {
            draw_title(f, main_chunks[0]);
            draw_auth(f, state, mode, main_chunks[1]);
        }
        View::Dashboard(page) => {
            draw_page_tabs(f, state, page, main_chunks[0]);
            match page {
                Page::Home => draw_home(f, state, main_chunks[1]),
                Page::Campaigns => draw_campaigns(f, state, main_chunks[1]),
                Page::ListBuilder => draw_list_builder(f, state, main_chunks[1]),
                Page::ListManager => draw_list_manager(f, state, main_chunks[1]),
            }
        }
    }

    draw_status_message(f, state, main_chunks[2]);
    draw_key_hints(f, state, main_chunks[3]);

    // Popups
    if let Some(campaign) = &state.detail {
        draw_detail_popup(f, campaign, area);
    }
    if let Some(wizard) = &state.wizard {
        draw_wizard_popup(f, wizard, area);
    }
    if state.editor.show_emails && state.view == View::Dashboard(Page::ListBuilder) {
        draw_editor_emails_popup(f, state, area);
    }
    if let Some(name) = &state.manager.viewing {
        draw_list_view_popup(f, state, name, area);
    }
    if let Some(pending) = &state.confirm {
        draw_confirm_popup(f, pending, area);
    }
    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));
    f.render_widget(title, area);
}

fn draw_page_tabs(f: &mut Frame, state: &RenderState, page: Page, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let titles: Vec<String> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| match p {
            Page::Campaigns => format!(" {}:{} ({}) ", i + 1, p.title(), state.campaigns.len()),
            _ => format!(" {}:{} ", i + 1, p.title()),
        })
        .collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    f.render_widget(render_tabs(&refs, page.index()), chunks[0]);

    let user = state.username.as_deref().unwrap_or("-");
    let who = Paragraph::new(format!("{} ", user))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Green));
    f.render_widget(who, chunks[1]);
}

fn draw_auth(f: &mut Frame, state: &RenderState, mode: AuthMode, area: Rect) {
    let height = match mode {
        AuthMode::Login => 11,
        AuthMode::Signup => 14,
    };
    let form_area = centered_fixed(50, height, area);
    let title = match mode {
        AuthMode::Login => " Login ",
        AuthMode::Signup => " Sign Up ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let fields = AuthForm::fields(mode);
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = &state.auth;
    for (i, field) in fields.iter().enumerate() {
        let focused = form.field == *field;
        let widget = match field {
            AuthField::Username => render_input(&form.username, " Username ", focused),
            AuthField::Email => render_input(&form.email, " Email ", focused),
            AuthField::Password => render_secret(&form.password, " Password ", focused),
        };
        f.render_widget(widget, rows[i]);
    }

    let footer = if form.processing {
        Line::from(Span::styled("Processing...", Style::default().fg(Color::Yellow)))
    } else {
        match mode {
            AuthMode::Login => Line::from("Enter: log in | Ctrl+T: create an account"),
            AuthMode::Signup => Line::from("Enter: sign up | Ctrl+T: back to login"),
        }
    };
    f.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        rows[fields.len()],
    );
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let user = state.username.as_deref().unwrap_or_default();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {}", user),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!(
            "Campaigns: {}{}",
            state.campaigns.len(),
            if state.campaigns_loading { " (loading...)" } else { "" }
        )),
        Line::from(format!("Sender lists: {}", state.lists.senders.len())),
        Line::from(format!("Receiver lists: {}", state.lists.receivers.len())),
        Line::from(""),
        Line::from("n: new campaign | 2: campaigns | 3: create list | 4: manage lists"),
        Line::from(format!("o: email validation ({})", state.validation_url)),
    ];
    let home = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Home "));
    f.render_widget(home, area);
}

fn draw_campaigns(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.campaigns_loading && state.campaigns.is_empty() {
        let loading = Paragraph::new("Loading campaigns...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(" Campaigns "));
        f.render_widget(loading, area);
        return;
    }
    if state.campaigns.is_empty() {
        let empty = Paragraph::new("No campaigns yet. Press n to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Campaigns "));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Name", "Topic", "Senders", "Recipients", "Created"])
        .style(Style::default().fg(Color::Cyan).bold());
    let rows: Vec<Row> = state
        .campaigns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if i == state.selected_campaign {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let created = c
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            Row::new([
                c.name.clone(),
                format!("{} / {}", c.topic, c.subtopic),
                c.sender_emails.len().to_string(),
                c.recipient_emails.len().to_string(),
                created,
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Campaigns (n:new e:edit d:delete Enter:view) "),
    );
    f.render_widget(table, area);
}

fn draw_list_builder(f: &mut Frame, state: &RenderState, area: Rect) {
    let editor = &state.editor;
    let editing = state.input_mode == InputMode::Editing;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(3), // Name
            Constraint::Length(3), // Emails
            Constraint::Length(3), // File
            Constraint::Min(0),    // Summary
        ])
        .split(area);

    let kind = Paragraph::new(Line::from(vec![
        Span::raw(" Category: "),
        Span::styled(editor.kind.label(), Style::default().fg(Color::Cyan).bold()),
        Span::styled("  (t to switch, l to load a saved list)", Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(kind, chunks[0]);

    let title_for = |field: EditorField, title: &'static str| -> String {
        if editing && editor.field == field {
            format!("{} [editing] ", title)
        } else {
            title.to_string()
        }
    };
    let name_title = title_for(EditorField::Name, " List name ");
    let emails_title = title_for(EditorField::Emails, " Add emails (space, comma or ; separated) ");
    let file_title = title_for(EditorField::File, " Import from file path ");

    f.render_widget(
        render_input(&editor.name, &name_title, editor.field == EditorField::Name),
        chunks[1],
    );
    f.render_widget(
        render_input(&editor.email_input, &emails_title, editor.field == EditorField::Emails),
        chunks[2],
    );
    f.render_widget(
        render_input(&editor.file_path, &file_title, editor.field == EditorField::File),
        chunks[3],
    );

    let mut summary = vec![
        Line::from(format!("Typed emails: {}", editor.manual().len())),
        Line::from(format!(
            "Imported emails: {}{}",
            editor.staged().len(),
            editor
                .staged_file()
                .map(|name| format!(" from {}", name))
                .unwrap_or_default()
        )),
        Line::from(Span::styled(
            format!("Total: {}", editor.email_count()),
            Style::default().bold(),
        )),
        Line::from(""),
    ];
    summary.extend(
        editor
            .all_emails()
            .into_iter()
            .take(chunks[4].height.saturating_sub(6) as usize)
            .map(|e| Line::from(format!("  {}", e))),
    );
    let summary = Paragraph::new(summary).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Working set (s:save d:delete v:view all) "),
    );
    f.render_widget(summary, chunks[4]);
}

fn draw_list_manager(f: &mut Frame, state: &RenderState, area: Rect) {
    let manager = &state.manager;
    let lists = state.lists.of(manager.kind);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let kinds = ["Senders", "Receivers"];
    let selected_kind = match manager.kind {
        mailcamp_tui::ListKind::Senders => 0,
        mailcamp_tui::ListKind::Receivers => 1,
    };
    f.render_widget(render_tabs(&kinds, selected_kind), chunks[0]);

    if lists.is_empty() {
        let empty = Paragraph::new(format!(
            "No {} lists saved yet.",
            manager.kind.label().to_lowercase()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Lists "));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<String> = lists
        .iter()
        .map(|l| format!("{}  ({} emails)", l.list_name, l.emails.len()))
        .collect();
    let list = render_selectable(
        items,
        " Lists (t:category Enter:view d:delete) ",
        Some(manager.selected),
        true,
    );
    f.render_widget(list, chunks[1]);
}

fn draw_status_message(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = match &state.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(status_color(status.kind)),
        )),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_key_hints(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.confirm.is_some() {
        " y/Enter:confirm | n/Esc:cancel "
    } else if state.wizard.is_some() {
        " Enter:next | Ctrl+B:back | Tab:field | Ctrl+N/Ctrl+D:add/remove email | Ctrl+L:load list | Esc:close "
    } else if state.detail.is_some() {
        " e:edit | d:delete | Esc:close "
    } else {
        match state.view {
            View::Auth(_) => " Tab:next field | Enter:submit | Ctrl+T:switch login/sign up | Esc:quit ",
            View::Dashboard(_) if state.input_mode == InputMode::Editing => {
                " ESC:stop editing | Enter:apply | Tab:next field "
            }
            View::Dashboard(_) => " 1-4:pages | L:logout | o:validation | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_detail_popup(f: &mut Frame, campaign: &mailcamp_tui::Campaign, area: Rect) {
    let popup_area = centered_rect(70, 70, area);

    let mut lines = vec![
        Line::from(vec![Span::styled("Name: ", Style::default().bold()), Span::raw(campaign.name.clone())]),
        Line::from(vec![Span::styled("Topic: ", Style::default().bold()), Span::raw(campaign.topic.clone())]),
        Line::from(vec![
            Span::styled("Subtopic: ", Style::default().bold()),
            Span::raw(campaign.subtopic.clone()),
        ]),
    ];
    if let Some(created) = campaign.created_at {
        lines.push(Line::from(vec![
            Span::styled("Created: ", Style::default().bold()),
            Span::raw(created.format("%Y-%m-%d %H:%M:%S").to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Senders ({})", campaign.sender_emails.len()),
        Style::default().fg(Color::Cyan).bold(),
    )));
    lines.extend(campaign.sender_emails.iter().map(|e| Line::from(format!("  {}", e))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Recipients ({})", campaign.recipient_emails.len()),
        Style::default().fg(Color::Cyan).bold(),
    )));
    lines.extend(campaign.recipient_emails.iter().map(|e| Line::from(format!("  {}", e))));

    let detail = Paragraph::new(lines)
        .block(popup_block(" Campaign (e:edit d:delete Esc:close) "))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(detail, popup_area);
}

fn draw_wizard_popup(f: &mut Frame, wizard: &CampaignWizard, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    let title = format!(
        " {} campaign - step {}/3: {} ",
        if wizard.is_edit() { "Edit" } else { "New" },
        wizard.step.number(),
        wizard.step.label()
    );
    let block = popup_block(&title);
    let inner = block.inner(popup_area);
    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let fields = wizard.fields();
    let focused = wizard.focused();
    let header_lines: u16 = match wizard.step {
        WizardStep::Finalize => 4,
        _ => 1,
    };

    let mut constraints = vec![Constraint::Length(header_lines)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header: Text = match wizard.step {
        WizardStep::Details => Line::from(format!(
            "Sender emails: {}/{}{}",
            wizard.senders.len(),
            MAX_SENDER_SLOTS,
            wizard
                .sender_list
                .as_ref()
                .map(|n| format!("  (from list \"{}\")", n))
                .unwrap_or_default()
        ))
        .into(),
        WizardStep::Recipients => Line::from(format!(
            "Client emails: {}/{}{}",
            wizard.recipients.len(),
            MAX_RECIPIENT_SLOTS,
            wizard
                .recipient_list
                .as_ref()
                .map(|n| format!("  (from list \"{}\")", n))
                .unwrap_or_default()
        ))
        .into(),
        WizardStep::Finalize => {
            let draft = wizard.draft();
            Text::from(vec![
                Line::from(format!("Topic: {} / {}", draft.topic, draft.subtopic)),
                Line::from(format!("Senders: {}", draft.sender_emails.join(", "))),
                Line::from(format!("Recipients: {}", draft.recipient_emails.join(", "))),
                Line::from(Span::styled(
                    format!("Name if left blank: {}", draft.resolved_name()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        }
    };
    f.render_widget(Paragraph::new(header), rows[0]);

    for (i, field) in fields.iter().enumerate() {
        let is_focused = focused == Some(*field);
        let (content, title) = match field {
            WizardField::Topic => (wizard.topic.as_str(), " Campaign topic ".to_string()),
            WizardField::Subtopic => (wizard.subtopic.as_str(), " Subtopic ".to_string()),
            WizardField::Sender(n) => (wizard.senders[*n].as_str(), format!(" Sender email {} ", n + 1)),
            WizardField::Recipient(n) => {
                (wizard.recipients[*n].as_str(), format!(" Client email {} ", n + 1))
            }
            WizardField::Name => (wizard.name.as_str(), " Campaign name (optional) ".to_string()),
        };
        f.render_widget(render_input(content, &title, is_focused), rows[i + 1]);
    }
}

fn draw_editor_emails_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    let editor = &state.editor;
    let items: Vec<String> = editor.all_emails().into_iter().cloned().collect();
    let title = format!(" Emails ({}) - x:remove Esc:close ", items.len());
    let list = render_selectable(items, &title, Some(editor.selected_email), true)
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, popup_area);
    f.render_widget(list, popup_area);
}

fn draw_list_view_popup(f: &mut Frame, state: &RenderState, name: &str, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    let emails: Vec<Line> = state
        .lists
        .of(state.manager.kind)
        .iter()
        .find(|l| l.list_name == name)
        .map(|l| l.emails.iter().map(|e| Line::from(e.clone())).collect())
        .unwrap_or_default();
    let title = format!(" {} ({} emails) ", name, emails.len());

    let view = Paragraph::new(emails)
        .block(popup_block(&title))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(view, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, pending: &PendingDelete, area: Rect) {
    let popup_area = centered_fixed(50, 5, area);
    let prompt = Paragraph::new(vec![
        Line::from(pending.prompt()),
        Line::from(Span::styled("y: delete   n: cancel", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(popup_block(" Confirm ").border_style(Style::default().fg(Color::Red)));

    f.render_widget(Clear, popup_area);
    f.render_widget(prompt, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = r#"
 EMAIL MANAGEMENT - Keyboard Shortcuts

 NAVIGATION
   1 / 2 / 3 / 4      Home / Campaigns / Create List / Manage Lists
   L                  Log out
   o                  Show the email validation link

 CAMPAIGNS
   ↑ / ↓              Select campaign
   n                  New campaign
   e                  Edit selected campaign
   Enter / v          View details
   d                  Delete (asks first)

 CAMPAIGN WIZARD
   Enter              Next step / submit
   Ctrl+B             Previous step
   Tab / Shift+Tab    Next / previous field
   Ctrl+N / Ctrl+D    Add / remove an email slot
   Ctrl+L             Fill slots from a saved list

 CREATE LIST
   Tab                Next field
   e / Enter          Edit field (Enter applies emails or file)
   t                  Switch senders / receivers
   l                  Load next saved list
   v                  View and remove emails
   s                  Save list
   d                  Delete list

 MANAGE LISTS
   t                  Switch senders / receivers
   Enter              View emails
   d                  Delete list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let help = Paragraph::new(help_text)
        .block(popup_block(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered box of a fixed size, clipped to the available area
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
