use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Common header for all screens: the screen title in a bordered box
/// with an optional subtitle line (e.g., the selected course).
pub struct Header;

impl Header {
    /// Height the header needs: borders plus title and subtitle lines
    pub const HEIGHT: u16 = 4;

    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: Option<&str>) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Christoffel's Kitchen ")
            .title_style(t.muted_style())
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        let mut lines = vec![Line::from(Span::styled(title.to_string(), t.title_style()))];
        if let Some(subtitle) = subtitle {
            lines.push(Line::from(Span::styled(subtitle.to_string(), t.muted_style())));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
    }
}
