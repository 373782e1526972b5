use crate::app::{OutputView, RenderState, SlotView};
use crate::boot::{BootLine, Tone};
use crate::cards::images::PLACEHOLDER;
use crate::engine::reveal::Accent;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const SIGNAL_BAR_WIDTH: usize = 20;

fn base() -> Style {
    Style::default().fg(colors::text()).bg(colors::background())
}

fn framed(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::text()))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(colors::bright()).add_modifier(Modifier::BOLD),
        ))
}

pub fn render_header() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "P R O T O C O L :   O R A C L E _ v 1 . 0 . 7",
        Style::default().fg(colors::bright()).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(base())
}

pub fn boot_line(line: &BootLine) -> Line<'static> {
    let color = match line.tone {
        Tone::Notice => colors::bright(),
        Tone::Ok => colors::text(),
        Tone::Fault => colors::fault(),
    };
    Line::from(Span::styled(line.display(), Style::default().fg(color)))
}

pub fn render_boot_log(lines: &[BootLine]) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = lines.iter().map(boot_line).collect();
    Paragraph::new(lines).block(framed(" CONSOLE ")).style(base())
}

pub fn render_signal_bar(signal: u8) -> Line<'static> {
    let filled = usize::from(signal.min(100)) * SIGNAL_BAR_WIDTH / 100;
    let color = if signal >= 100 { colors::text() } else { colors::dimmed() };
    Line::from(vec![
        Span::styled("[", Style::default().fg(colors::dimmed())),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(SIGNAL_BAR_WIDTH - filled), Style::default().fg(colors::dimmed())),
        Span::styled("]", Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}

pub fn render_input_panel(input: &str, state: &RenderState) -> Paragraph<'static> {
    let query = if input.is_empty() {
        Span::styled(state.placeholder.clone(), Style::default().fg(colors::dimmed()))
    } else {
        Span::styled(input.to_string(), Style::default().fg(colors::bright()))
    };

    let signal = if state.signal_locked {
        Line::from(Span::styled(
            "SIGNAL LOCKED. READY TO TRANSMIT.",
            Style::default().fg(colors::text()).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("SIGNAL STRENGTH: {}%", state.signal),
            Style::default().fg(colors::dimmed()),
        ))
    };

    let lines = vec![
        Line::from(">> ENTER QUERY PARAMETER:"),
        Line::from(vec![Span::raw("> "), query, Span::raw("█")]),
        Line::from(""),
        Line::from(">> CALIBRATE SIGNAL FREQUENCY TO 100%:  ←/→"),
        render_signal_bar(state.signal),
        signal.alignment(Alignment::Center),
    ];
    Paragraph::new(lines).block(framed(" INPUT ")).style(base())
}

pub fn render_card_slot(slot: &SlotView) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("// {}", slot.desc),
            Style::default().fg(colors::dimmed()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            slot.card.to_string(),
            Style::default().fg(colors::bright()).add_modifier(Modifier::BOLD),
        )),
        Line::from(slot.archetype.to_string()),
        Line::from(""),
    ];
    lines.push(match slot.image {
        Some((mime, size)) => Line::from(Span::styled(
            format!("[{} · {} bytes b64]", mime.as_str(), size),
            Style::default().fg(colors::dimmed()),
        )),
        None => Line::from(Span::styled(PLACEHOLDER, Style::default().fg(colors::fault()))),
    });

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(framed(&format!(" {} ", slot.position)))
        .style(base())
}

pub fn render_awaiting_slot(position: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "AWAITING_DATA...",
        Style::default().fg(colors::dimmed()),
    )))
    .alignment(Alignment::Center)
    .block(framed(&format!(" {} ", position)))
    .style(base())
}

fn accent_style(accent: Accent, line: Style) -> Style {
    match accent {
        Accent::Plain | Accent::Settled => line,
        Accent::Pulse => line.fg(colors::bright()).add_modifier(Modifier::BOLD),
        Accent::Substitute => Style::default()
            .fg(colors::glitch())
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        Accent::Mutation => Style::default().fg(colors::fault()),
    }
}

fn line_style(line: &str) -> Style {
    if line.starts_with("###") {
        Style::default().fg(colors::bright()).add_modifier(Modifier::BOLD)
    } else if line.starts_with("CONNECTION_SEVERED") {
        Style::default().fg(colors::fault())
    } else {
        Style::default().fg(colors::text())
    }
}

/// Splits the output into styled lines, highlighting the in-flight word.
pub fn output_lines(output: &OutputView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in output.text.split('\n') {
        let range = offset..offset + raw.len();
        offset = range.end + 1;

        let style = line_style(raw);
        let start = output.active.start.clamp(range.start, range.end) - range.start;
        let end = output.active.end.clamp(range.start, range.end) - range.start;
        if start >= end {
            lines.push(Line::from(Span::styled(raw.to_string(), style)));
            continue;
        }

        let mut spans = Vec::with_capacity(3);
        if start > 0 {
            spans.push(Span::styled(raw[..start].to_string(), style));
        }
        spans.push(Span::styled(
            raw[start..end].to_string(),
            accent_style(output.accent, style),
        ));
        if end < raw.len() {
            spans.push(Span::styled(raw[end..].to_string(), style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

pub fn render_output(output: &OutputView, degraded: bool) -> Paragraph<'static> {
    let title = if degraded {
        " >> ANALYSIS LOG [LOCAL BUFFER] "
    } else {
        " >> ANALYSIS LOG "
    };
    Paragraph::new(output_lines(output))
        .wrap(Wrap { trim: false })
        .block(framed(title))
        .style(base())
}

pub fn render_status_line(status: Option<&str>, hint: &str) -> Line<'static> {
    match status {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(colors::bright()),
        )),
        None => Line::from(Span::styled(hint.to_string(), Style::default().fg(colors::dimmed()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn contents(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_output_lines_split_active_word() {
        let output = OutputView {
            text: "### 1. Core\nthe VOID_NULL█".to_string(),
            accent: Accent::Substitute,
            active: 16..25,
        };
        let lines = output_lines(&output);
        assert_eq!(lines.len(), 2);
        assert_eq!(contents(&lines[0]), vec!["### 1. Core"]);
        assert_eq!(contents(&lines[1]), vec!["the ", "VOID_NULL", "█"]);
        assert!(lines[1].spans[1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_output_lines_settled() {
        let output = OutputView::settled("a\n\nb");
        let lines = output_lines(&output);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.spans.len() == 1));
    }

    #[test]
    fn test_output_lines_active_at_line_start() {
        let frame = crate::engine::reveal::Frame {
            text: "x\nword█".to_string(),
            delay: Duration::ZERO,
            accent: Accent::Pulse,
            active: 2..6,
        };
        let lines = output_lines(&OutputView::from_frame(&frame));
        assert_eq!(contents(&lines[1]), vec!["word", "█"]);
    }

    #[test]
    fn test_signal_bar_fill() {
        let bar = render_signal_bar(50);
        assert_eq!(bar.spans[1].content, "█".repeat(10));
        assert_eq!(bar.spans[2].content, "░".repeat(10));
        assert_eq!(render_signal_bar(100).spans[2].content, "");
    }

    #[test]
    fn test_boot_line_colors() {
        let line = BootLine {
            tone: Tone::Fault,
            text: "[ERROR]: VOID_POINTER_EXCEPTION",
            delay: Duration::ZERO,
            preload: false,
        };
        assert_eq!(boot_line(&line).spans[0].style.fg, Some(colors::fault()));
    }
}
