// Explicit grid placement
use super::widget::Widget;

pub const GRID_WIDTH: u32 = 24;

/// Places widgets left to right, wrapping when the next one would overflow
/// `grid_width`. A row is as tall as its tallest widget.
pub fn flow(widgets: &[Widget], grid_width: u32) -> Vec<Widget> {
    let (mut x, mut y, mut row_height) = (0, 0, 0);

    widgets
        .iter()
        .map(|widget| {
            if x > 0 && x + widget.width > grid_width {
                x = 0;
                y += row_height;
                row_height = 0;
            }
            let placed = widget.positioned(x, y);
            x += widget.width;
            row_height = row_height.max(widget.height);
            placed
        })
        .collect()
}
