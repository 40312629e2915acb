use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    cell
}

/// A popup covering the given percentage of `area`, centered.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    center_rect(area, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let rect = center_rect(Rect::new(0, 0, 80, 24), 20, 4);
        assert_eq!(rect, Rect::new(30, 10, 20, 4));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(2, 3, 10, 5);
        let rect = center_rect(area, 40, 40);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_center_popup() {
        let rect = center_popup(Rect::new(0, 0, 100, 40), 50, 50);
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }
}
