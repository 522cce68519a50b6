use super::primitive::{Primitive, Style};
use crate::models::MaskPattern;

/// Draw one repeat tile of a mask: set modules, then the tile's grid lines
pub fn render_mask_tile(mask: MaskPattern) -> Vec<Primitive> {
    let width = mask.repeat_x();
    let height = mask.repeat_y();
    let mut out = Vec::with_capacity(width * height + width + height + 2);

    for y in 0..height {
        for x in 0..width {
            if mask.is_dark(x, y) {
                out.push(Primitive::module(x, y, Style::TileBlack));
            }
        }
    }
    for y in 0..=height {
        let y = y as f32;
        out.push(Primitive::line(0.0, y, width as f32, y, Style::TileBorder));
    }
    for x in 0..=width {
        let x = x as f32;
        out.push(Primitive::line(x, 0.0, x, height as f32, Style::TileBorder));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_cells_follow_predicate() {
        for mask in MaskPattern::ALL {
            let prims = render_mask_tile(mask);
            for y in 0..mask.repeat_y() {
                for x in 0..mask.repeat_x() {
                    let drawn = prims
                        .iter()
                        .any(|p| p.style == Style::TileBlack && p.is_module_at(x, y));
                    assert_eq!(drawn, mask.is_dark(x, y), "mask {mask} ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_tile_border_lines() {
        let prims = render_mask_tile(MaskPattern::Pattern1);
        let lines: Vec<_> = prims.iter().filter(|p| p.style == Style::TileBorder).collect();
        // 6 x 4 tile: 5 horizontal + 7 vertical
        assert_eq!(lines.len(), 12);
        assert_eq!(*lines[0], Primitive::line(0.0, 0.0, 6.0, 0.0, Style::TileBorder));
        assert_eq!(*lines[4], Primitive::line(0.0, 4.0, 6.0, 4.0, Style::TileBorder));
        assert_eq!(*lines[11], Primitive::line(6.0, 0.0, 6.0, 4.0, Style::TileBorder));
    }

    #[test]
    fn test_mask_four_tile() {
        let prims = render_mask_tile(MaskPattern::Pattern4);
        let cells = prims.iter().filter(|p| p.style == Style::TileBlack).count();
        // Rows 0, 2, 4 of a 6 x 6 tile
        assert_eq!(cells, 18);
    }
}
