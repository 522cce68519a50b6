use super::primitive::{Primitive, Style};
use crate::layout::GridLayout;
use crate::layout::borders::{Axis, byte_borders};
use crate::layout::function_mask::alignment_origin;
use crate::models::{MaskPattern, Point, Version};

const GRID_MARKER_RADIUS: f32 = 0.075;
const REPEAT_MARKER_RADIUS: f32 = 0.3;

/// Draws the annotated module grid for one (version, mask) pair.
///
/// Output order is the z-order: mask modules, function patterns, mask and
/// format information, codeword borders, lattice markers, then the
/// turn-around arrows.
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    version: Version,
    mask: MaskPattern,
    turn_arrows: bool,
}

impl GridRenderer {
    /// Renderer with turn-around arrows enabled
    pub fn new(version: Version, mask: MaskPattern) -> Self {
        Self {
            version,
            mask,
            turn_arrows: true,
        }
    }

    /// Enable or disable the zig-zag turn-around arrows
    pub fn with_turn_arrows(mut self, enabled: bool) -> Self {
        self.turn_arrows = enabled;
        self
    }

    /// Build the layout and render it
    pub fn render(&self) -> Vec<Primitive> {
        let layout = GridLayout::build(self.version, self.mask);
        self.render_layout(&layout)
    }

    /// Render from an already built layout
    pub fn render_layout(&self, layout: &GridLayout) -> Vec<Primitive> {
        let size = layout.size();
        let mut out = Vec::with_capacity(size * size * 3);

        for (x, y) in layout.modules().iter_ones() {
            out.push(Primitive::module(x, y, Style::Black));
        }

        self.function_patterns(&mut out);
        self.mask_information(&mut out);
        format_information(size, &mut out);

        for segment in byte_borders(layout.bytes()) {
            let (x1, y1) = (segment.x as f32, segment.y as f32);
            let (x2, y2) = match segment.axis {
                Axis::Horizontal => (x1 + 1.0, y1),
                Axis::Vertical => (x1, y1 + 1.0),
            };
            out.push(Primitive::line(x1, y1, x2, y2, Style::ByteBorder));
        }

        self.grid_markers(size, &mut out);

        if self.turn_arrows {
            turn_around_arrows(size, &mut out);
        }

        log::debug!(
            "grid v{} mask {}: {} primitives",
            self.version,
            self.mask,
            out.len()
        );
        out
    }

    fn function_patterns(&self, out: &mut Vec<Primitive>) {
        let size = self.version.size();
        let s = size as f32;
        let span = size as i64 - 16;

        out.push(Primitive::path(
            format!(
                "M 0 0 h 8 v 6 h {span} v -6 h 8 v 8 h -8 v -1 h {neg} v 1 h -1 v {span} h 1 v 8 h -8 v -8 h 6 v {neg} h -6 z",
                neg = -span
            ),
            Style::FunctionPatternBackground,
        ));

        // Finder eyes sit in the outer 7x7 of each corner block
        for (fx, fy) in [(0.0, 0.0), (s - 7.0, 0.0), (0.0, s - 7.0)] {
            out.push(Primitive::rect(
                fx + 0.5,
                fy + 0.5,
                6.0,
                6.0,
                Style::FunctionPatternOutline,
            ));
            out.push(Primitive::rect(
                fx + 2.0,
                fy + 2.0,
                3.0,
                3.0,
                Style::FunctionPattern,
            ));
        }

        for i in (8..size - 8).step_by(2) {
            out.push(Primitive::module(i, 6, Style::FunctionPattern));
            out.push(Primitive::module(6, i, Style::FunctionPattern));
        }

        // Dark module
        out.push(Primitive::module(8, size - 8, Style::FunctionPattern));

        if let Some((ax, ay)) = alignment_origin(self.version) {
            let (ax, ay) = (ax as f32, ay as f32);
            out.push(Primitive::rect(
                ax,
                ay,
                5.0,
                5.0,
                Style::FunctionPatternBackground,
            ));
            out.push(Primitive::rect(
                ax + 0.5,
                ay + 0.5,
                4.0,
                4.0,
                Style::FunctionPatternOutline,
            ));
            out.push(Primitive::rect(
                ax + 2.0,
                ay + 2.0,
                1.0,
                1.0,
                Style::FunctionPattern,
            ));
        }
    }

    fn mask_information(&self, out: &mut Vec<Primitive>) {
        let size = self.version.size();
        let s = size as f32;

        out.push(Primitive::rect(
            2.0,
            8.0,
            3.0,
            1.0,
            Style::MaskInformationBackground,
        ));
        out.push(Primitive::rect(
            8.0,
            s - 5.0,
            1.0,
            3.0,
            Style::MaskInformationBackground,
        ));

        let index = self.mask.index();
        for i in 0..3 {
            if index & (1 << i) != 0 {
                out.push(Primitive::module(4 - i, 8, Style::MaskInformation));
                out.push(Primitive::module(8, size - 5 + i, Style::MaskInformation));
            }
        }
    }

    fn grid_markers(&self, size: usize, out: &mut Vec<Primitive>) {
        let (rx, ry) = (self.mask.repeat_x(), self.mask.repeat_y());
        for y in 0..=size {
            for x in 0..=size {
                out.push(if x % rx == 0 && y % ry == 0 {
                    Primitive::circle(
                        x as f32,
                        y as f32,
                        REPEAT_MARKER_RADIUS,
                        Style::MaskRepeatGridMarker,
                    )
                } else {
                    Primitive::circle(x as f32, y as f32, GRID_MARKER_RADIUS, Style::GridMarker)
                });
            }
        }
    }
}

/// The seven format information shapes around the finder patterns
fn format_information(size: usize, out: &mut Vec<Primitive>) {
    let s = size as f32;
    out.push(Primitive::rect(0.0, 8.0, 2.0, 1.0, Style::FormatInformation));
    out.push(Primitive::rect(5.0, 8.0, 1.0, 1.0, Style::FormatInformation));
    out.push(Primitive::path(
        "M 8 7 h 1 v 2 h -2 v -1 h 1",
        Style::FormatInformation,
    ));
    out.push(Primitive::rect(8.0, 0.0, 1.0, 6.0, Style::FormatInformation));
    out.push(Primitive::rect(s - 8.0, 8.0, 8.0, 1.0, Style::FormatInformation));
    out.push(Primitive::rect(8.0, s - 7.0, 1.0, 2.0, Style::FormatInformation));
    out.push(Primitive::rect(8.0, s - 2.0, 1.0, 2.0, Style::FormatInformation));
}

/// U-turn glyphs marking where the zig-zag scan reverses direction
fn turn_around_arrows(size: usize, out: &mut Vec<Primitive>) {
    let s = size as f32;

    // Bottom edge: the scan turns from upward to downward
    let mut x = size as i64 - 6;
    while x >= 11 {
        let tip = Point::new(x as f32 + 1.0, s - 0.5);
        out.push(Primitive::path(
            format!(
                "M {} {} v .5 a .5 .5 0 0 0 .5 .5 h 1 a .5 .5 0 0 0 .5 -.5 v -.5",
                tip.x, tip.y
            ),
            Style::TurnAroundArrow,
        ));
        out.push(Primitive::polyline(
            vec![tip.translate(-0.5, 0.5), tip, tip.translate(0.5, 0.5)],
            Style::TurnAroundArrow,
        ));
        x -= 4;
    }

    // Top edge, dropped to row 9 under the top-right finder block
    let mut x = size as i64 - 4;
    while x >= 9 {
        let y = if x >= size as i64 - 8 { 9.0 } else { 0.0 };
        let tip = Point::new(x as f32 + 1.0, y + 0.5);
        out.push(Primitive::path(
            format!(
                "M {} {} v -.5 a .5 .5 0 0 1 .5 -.5 h 1 a .5 .5 0 0 1 .5 .5 v .5",
                tip.x, tip.y
            ),
            Style::TurnAroundArrow,
        ));
        out.push(Primitive::polyline(
            vec![tip.translate(-0.5, -0.5), tip, tip.translate(0.5, -0.5)],
            Style::TurnAroundArrow,
        ));
        x -= 4;
    }
}

/// Render the annotated grid with default options
pub fn render_grid(version: Version, mask: MaskPattern) -> Vec<Primitive> {
    GridRenderer::new(version, mask).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::primitive::Shape;

    fn grid(v: u8, m: u8) -> Vec<Primitive> {
        render_grid(Version::new(v).unwrap(), MaskPattern::from_index(m).unwrap())
    }

    fn count(prims: &[Primitive], style: Style) -> usize {
        prims.iter().filter(|p| p.style == style).count()
    }

    #[test]
    fn test_version_one_mask_zero() {
        let prims = grid(1, 0);
        // 2 x 3 timing modules, 3 finder cores, dark module, no alignment core
        let function_modules = prims
            .iter()
            .filter(|p| p.style == Style::FunctionPattern && matches!(p.shape, Shape::Rect { width, .. } if width == 1.0))
            .count();
        assert_eq!(function_modules, 2 * 3 + 1);
        assert_eq!(count(&prims, Style::FunctionPatternOutline), 3);
        assert_eq!(count(&prims, Style::FunctionPatternBackground), 1);
        assert_eq!(count(&prims, Style::MaskInformation), 0);
    }

    #[test]
    fn test_alignment_drawn_from_version_two() {
        let prims = grid(2, 5);
        assert_eq!(count(&prims, Style::FunctionPatternOutline), 4);
        assert_eq!(count(&prims, Style::FunctionPatternBackground), 2);
        assert!(prims.contains(&Primitive::rect(16.0, 16.0, 5.0, 5.0, Style::FunctionPatternBackground)));
        assert!(prims.contains(&Primitive::rect(16.5, 16.5, 4.0, 4.0, Style::FunctionPatternOutline)));
        assert!(prims.contains(&Primitive::module(18, 18, Style::FunctionPattern)));
    }

    #[test]
    fn test_timing_modules_per_version() {
        for version in Version::all() {
            let size = version.size();
            let prims = render_grid(version, MaskPattern::Pattern0);
            let row = (0..size)
                .filter(|&x| prims.iter().any(|p| p.style == Style::FunctionPattern && p.is_module_at(x, 6)))
                .count();
            let col = (0..size)
                .filter(|&y| prims.iter().any(|p| p.style == Style::FunctionPattern && p.is_module_at(6, y)))
                .count();
            assert_eq!(row, version.timing_modules());
            assert_eq!(col, version.timing_modules());
        }
    }

    #[test]
    fn test_mask_information_bits() {
        let prims = grid(1, 3);
        let bits: Vec<_> = prims.iter().filter(|p| p.style == Style::MaskInformation).collect();
        // Bits 0 and 1 set: one pair each
        assert_eq!(bits.len(), 4);
        assert_eq!(*bits[0], Primitive::module(4, 8, Style::MaskInformation));
        assert_eq!(*bits[1], Primitive::module(8, 16, Style::MaskInformation));
        assert_eq!(*bits[2], Primitive::module(3, 8, Style::MaskInformation));
        assert_eq!(*bits[3], Primitive::module(8, 17, Style::MaskInformation));

        let all = grid(1, 7);
        assert_eq!(count(&all, Style::MaskInformation), 6);
        assert!(all.contains(&Primitive::module(2, 8, Style::MaskInformation)));
        assert_eq!(count(&all, Style::MaskInformationBackground), 2);
    }

    #[test]
    fn test_format_information_shapes() {
        let prims = grid(3, 1);
        assert_eq!(count(&prims, Style::FormatInformation), 7);
        assert!(prims.contains(&Primitive::rect(21.0, 8.0, 8.0, 1.0, Style::FormatInformation)));
        assert!(prims.contains(&Primitive::rect(8.0, 27.0, 1.0, 2.0, Style::FormatInformation)));
    }

    #[test]
    fn test_grid_markers_cover_lattice() {
        for (v, m) in [(1, 0), (2, 1), (6, 7)] {
            let prims = grid(v, m);
            let size = Version::new(v).unwrap().size();
            let mask = MaskPattern::from_index(m).unwrap();
            let big = (size / mask.repeat_x() + 1) * (size / mask.repeat_y() + 1);
            assert_eq!(count(&prims, Style::MaskRepeatGridMarker), big);
            assert_eq!(count(&prims, Style::GridMarker) + big, (size + 1) * (size + 1));
        }
    }

    #[test]
    fn test_black_modules_match_layout() {
        let version = Version::new(4).unwrap();
        let layout = GridLayout::build(version, MaskPattern::Pattern6);
        let prims = GridRenderer::new(version, MaskPattern::Pattern6).render_layout(&layout);
        assert_eq!(count(&prims, Style::Black), layout.modules().count_ones());
        // Black modules come first
        assert!(prims[..layout.modules().count_ones()].iter().all(|p| p.style == Style::Black));
    }

    #[test]
    fn test_turn_arrows_optional() {
        let version = Version::new(1).unwrap();
        let with = GridRenderer::new(version, MaskPattern::Pattern0).render();
        let without = GridRenderer::new(version, MaskPattern::Pattern0)
            .with_turn_arrows(false)
            .render();
        // v1: bottom arrows at x = 15, 11; top arrows at x = 17 (row 9), 13 (row 9), 9
        assert_eq!(count(&with, Style::TurnAroundArrow), 2 * (2 + 3));
        assert_eq!(count(&without, Style::TurnAroundArrow), 0);
        assert_eq!(with.len() - without.len(), 10);
        assert_eq!(with.last().unwrap().style, Style::TurnAroundArrow);
    }

    #[test]
    fn test_turn_arrow_geometry() {
        let prims = grid(1, 0);
        let bottom = Primitive::polyline(
            vec![Point::new(15.5, 21.0), Point::new(16.0, 20.5), Point::new(16.5, 21.0)],
            Style::TurnAroundArrow,
        );
        let top = Primitive::polyline(
            vec![Point::new(9.5, 0.0), Point::new(10.0, 0.5), Point::new(10.5, 0.0)],
            Style::TurnAroundArrow,
        );
        assert!(prims.contains(&bottom));
        assert!(prims.contains(&top));
        assert!(prims.contains(&Primitive::path(
            "M 18 9.5 v -.5 a .5 .5 0 0 1 .5 -.5 h 1 a .5 .5 0 0 1 .5 .5 v .5",
            Style::TurnAroundArrow,
        )));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(grid(5, 2), grid(5, 2));
    }
}
