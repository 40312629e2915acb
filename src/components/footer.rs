use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer showing key hints
pub struct Footer;

impl Footer {
    /// Height used: 1 for the border, 1 for the text
    pub const HEIGHT: u16 = 2;

    /// Render hints written as `"Label: keys | Label: keys"`.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", label), t.title_style()));
                spans.push(Span::styled(keys.to_string(), t.text_style().add_modifier(Modifier::BOLD)));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());

        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
    }
}
