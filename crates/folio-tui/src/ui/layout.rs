//! Layout helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split an area into tab bar, content, and status bar rows.
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// A fixed-size rect centered in the given area, clamped to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_rows() {
        let (tabs, content, status) = main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(tabs.height, 1);
        assert_eq!(content.height, 22);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_centered_fixed() {
        let rect = centered_fixed(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let rect = centered_fixed(100, 50, Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 24);
    }
}
