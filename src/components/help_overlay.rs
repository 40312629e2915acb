//! Help Overlay Component
//!
//! Displays the active keybindings when the user presses the help key.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Categories in display order
    const CATEGORIES: [&'static str; 5] = [
        "Navigation",
        "Buttons",
        "Field Navigation",
        "Text Editing",
        "Global",
    ];

    /// Render the help overlay in the center of `area`
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup_area = center_popup(area, 80, 90);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [presets_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        let mut preset_spans = vec![Span::styled("Preset: ", t.muted_style())];
        for (i, preset) in KeymapPreset::ALL.iter().enumerate() {
            let label = format!("{} {}  ", i + 1, preset.name());
            let style = if *preset == keymap.preset {
                t.title_style().add_modifier(Modifier::REVERSED)
            } else {
                t.muted_style()
            };
            preset_spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(preset_spans)), presets_area);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = format!(
            "Edit keybindings in: {}\nPress 1/2/3 to switch preset, any other key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );
    }

    /// Bindings grouped by category, one line per key
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in Self::CATEGORIES {
            let in_category: Vec<_> = bindings
                .iter()
                .filter(|b| b.action.category() == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for binding in in_category {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.title_style()),
                    Span::styled(binding.action.description(), t.text_style()),
                ]));
            }
        }
        lines
    }
}
