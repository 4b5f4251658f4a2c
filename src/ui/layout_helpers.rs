use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, clipped to fit
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Display width in terminal cells, one per char
pub fn text_width(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}
