mod widgets;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Popup, Tab};
use crate::content;

use widgets::{centered_rect, key_hint, section_block};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Shrink the image panel on short terminals
    let image_height = if area.height < 40 { 4 } else { 6 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3),            // Title banner
            Constraint::Length(image_height), // Image / carousel
            Constraint::Length(1),            // Tab bar
            Constraint::Min(6),               // Tab content
            Constraint::Length(3),            // Likes + name generator
            Constraint::Length(3),            // Facts banner
            Constraint::Length(1),            // Status line
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    draw_title(f, app, chunks[0]);
    draw_image(f, app, chunks[1]);
    draw_tab_bar(f, app, chunks[2]);
    match app.tab {
        Tab::About => draw_about(f, app, chunks[3]),
        Tab::Breeds => draw_breeds(f, app, chunks[3]),
    }
    draw_actions(f, app, chunks[4]);
    draw_fact(f, app, chunks[5]);
    draw_status_line(f, app, chunks[6]);
    draw_footer(f, app, chunks[7]);

    if app.popup == Popup::Help {
        draw_help_popup(f, app);
    }
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let title = Paragraph::new(Line::from(vec![
        Span::styled("=^.^= ", Style::default().fg(t.heart)),
        Span::styled(
            content::PAGE_TITLE,
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent)),
    );
    f.render_widget(title, area);
}

fn draw_image(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let (url, caption) = app.current_image();

    let title = match app.tab {
        Tab::About => " Image ".to_string(),
        Tab::Breeds => format!(
            " Carousel {}/{} ",
            app.carousel + 1,
            content::BREEDS.len()
        ),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            caption,
            Style::default().fg(t.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(url, Style::default().fg(t.text_dim))),
    ];
    if area.height > 4 {
        let mut hint = key_hint(t, "o", "open in viewer");
        if app.tab == Tab::Breeds {
            hint.extend(key_hint(t, "←/→", "browse"));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(hint));
    }

    let image = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(section_block(t, &title, false));
    f.render_widget(image, area);
}

fn draw_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let selected = match app.tab {
        Tab::About => 0,
        Tab::Breeds => 1,
    };

    let tabs = Tabs::new(vec!["About Cats", "Cat Breeds"])
        .select(selected)
        .style(Style::default().fg(t.text_dim))
        .highlight_style(Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(t.border)));
    f.render_widget(tabs, area);
}

fn draw_about(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;

    let mut lines = vec![
        Line::from(Span::styled(content::ABOUT_SUBTITLE, Style::default().fg(t.text_dim))),
        Line::from(""),
        Line::from(Span::styled(content::ABOUT_TEXT, Style::default().fg(t.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Characteristics of Cats",
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        )),
    ];
    for item in content::CHARACTERISTICS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(t.heart)),
            Span::styled(*item, Style::default().fg(t.text)),
        ]));
    }

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section_block(t, &format!(" {} ", content::ABOUT_TITLE), true));
    f.render_widget(about, area);
}

fn draw_breeds(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;

    let mut lines = vec![
        Line::from(Span::styled(content::BREEDS_SUBTITLE, Style::default().fg(t.text_dim))),
        Line::from(""),
    ];

    for (i, breed) in content::BREEDS.iter().enumerate() {
        let is_current = i == app.carousel;
        let marker = if is_current { "▸ " } else { "  " };
        let name_style = if is_current {
            Style::default().fg(t.accent_bright).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.text).add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(t.heart)),
            Span::styled(breed.name, name_style),
            Span::styled(format!("  Origin: {}", breed.origin), Style::default().fg(t.text_dim)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("Temperament: ", Style::default().fg(t.text).add_modifier(Modifier::BOLD)),
            Span::styled(breed.temperament, Style::default().fg(t.text)),
        ]));
        if is_current {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(breed.description, Style::default().fg(t.text_dim)),
            ]));
        }
    }

    let breeds = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section_block(t, &format!(" {} ", content::BREEDS_TITLE), true));
    f.render_widget(breeds, area);
}

fn draw_actions(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let likes = Paragraph::new(Line::from(vec![
        Span::styled("♥ ", Style::default().fg(t.heart)),
        Span::styled("(l)ike  ", Style::default().fg(t.text)),
        Span::styled(
            format!(" {} ", app.likes.label()),
            Style::default().fg(t.heart).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(section_block(t, " Likes ", false));
    f.render_widget(likes, chunks[0]);

    let name_line = match &app.generated_name {
        Some(name) => Line::from(vec![
            Span::styled("Your cat's name: ", Style::default().fg(t.text_dim)),
            Span::styled(name.as_str(), Style::default().fg(t.accent_bright).add_modifier(Modifier::BOLD)),
        ]),
        None => Line::from(key_hint(t, "g", "generate a cat name")),
    };
    let names = Paragraph::new(name_line)
        .alignment(Alignment::Center)
        .block(section_block(t, " Name Generator ", false));
    f.render_widget(names, chunks[1]);
}

fn draw_fact(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let title = format!(
        " Did you know? {}/{} ",
        app.rotator.index() + 1,
        app.rotator.len()
    );
    let fact = Paragraph::new(Line::from(Span::styled(
        app.rotator.current(),
        Style::default().fg(t.text).add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .block(section_block(t, &title, false));
    f.render_widget(fact, area);
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let line = match app.notifier.current() {
        Some(toast) => Line::from(vec![
            Span::styled(toast.title.as_str(), Style::default().fg(t.toast).add_modifier(Modifier::BOLD)),
            Span::styled(" │ ", Style::default().fg(t.text_dim)),
            Span::styled(toast.description.as_str(), Style::default().fg(t.toast)),
        ]),
        None => Line::from(Span::styled("Ready", Style::default().fg(t.text_dim))),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let mut spans = Vec::new();
    for (key, label) in [("Tab", "tabs"), ("l", "like"), ("g", "name"), ("n", "next fact"), ("?", "help"), ("q", "quit")] {
        spans.extend(key_hint(t, key, label));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_help_popup(f: &mut Frame, app: &App) {
    let t = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 60 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(t.accent).add_modifier(Modifier::BOLD)))
    };
    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Style::default().fg(t.accent_bright)),
            Span::styled(text, Style::default().fg(t.text)),
        ])
    };

    let help_text = vec![
        heading("═══ Page ═══"),
        entry("Tab / 1 2", "Switch between About and Breeds"),
        entry("←/→", "Browse the breed carousel"),
        entry("o", "Open the current image in a viewer"),
        Line::from(""),
        heading("═══ Fun ═══"),
        entry("l / Space", "Like this page"),
        entry("g", "Generate a random cat name"),
        entry("n", "Show the next fact now"),
        Line::from(""),
        heading("═══ Other ═══"),
        entry("?/h", "Toggle this help"),
        entry("q / Esc", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  whiskers --name   ", Style::default().fg(t.text_dim)),
            Span::raw("Print a name and exit"),
        ]),
        Line::from(vec![
            Span::styled("  whiskers --breeds ", Style::default().fg(t.text_dim)),
            Span::raw("Breeds as JSON"),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" whiskers Help ", Style::default().fg(t.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}
