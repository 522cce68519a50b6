use super::codewords::ByteGrid;

/// Direction of a unit border segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// From (x, y) to (x + 1, y)
    Horizontal,
    /// From (x, y) to (x, y + 1)
    Vertical,
}

/// Unit-length segment on the module lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderSegment {
    /// Lattice column of the start point
    pub x: usize,
    /// Lattice row of the start point
    pub y: usize,
    /// Segment direction
    pub axis: Axis,
}

impl BorderSegment {
    /// End point on the lattice
    pub fn end(&self) -> (usize, usize) {
        match self.axis {
            Axis::Horizontal => (self.x + 1, self.y),
            Axis::Vertical => (self.x, self.y + 1),
        }
    }
}

/// Segments separating cells owned by different codewords.
///
/// Every lattice point (x, y) with 0 <= x, y <= size is checked against the
/// cell above and the cell to the left. Reserved cells and cells outside the
/// grid share one tag, so no border is drawn between them.
pub fn byte_borders(grid: &ByteGrid) -> Vec<BorderSegment> {
    let size = grid.size() as isize;
    let mut segments = Vec::new();
    for y in 0..=size {
        for x in 0..=size {
            let here = grid.get(x, y);
            if grid.get(x, y - 1) != here {
                segments.push(BorderSegment {
                    x: x as usize,
                    y: y as usize,
                    axis: Axis::Horizontal,
                });
            }
            if grid.get(x - 1, y) != here {
                segments.push(BorderSegment {
                    x: x as usize,
                    y: y as usize,
                    axis: Axis::Vertical,
                });
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridLayout;
    use crate::models::{MaskPattern, Version};
    use std::collections::HashSet;

    fn layout(v: u8) -> GridLayout {
        GridLayout::build(Version::new(v).unwrap(), MaskPattern::Pattern0)
    }

    #[test]
    fn test_border_iff_tags_differ() {
        for v in [1, 2, 6] {
            let layout = layout(v);
            let grid = layout.bytes();
            let size = grid.size() as isize;
            let segments: HashSet<_> = byte_borders(grid).into_iter().collect();
            for y in 0..=size {
                for x in 0..=size {
                    let h = BorderSegment { x: x as usize, y: y as usize, axis: Axis::Horizontal };
                    let v_seg = BorderSegment { x: x as usize, y: y as usize, axis: Axis::Vertical };
                    assert_eq!(segments.contains(&h), grid.get(x, y - 1) != grid.get(x, y));
                    assert_eq!(segments.contains(&v_seg), grid.get(x - 1, y) != grid.get(x, y));
                }
            }
        }
    }

    #[test]
    fn test_no_border_between_reserved_and_edge() {
        let layout = layout(1);
        let segments = byte_borders(layout.bytes());
        // Top-left finder block touches the top and left edges
        assert!(!segments.contains(&BorderSegment { x: 0, y: 0, axis: Axis::Horizontal }));
        assert!(!segments.contains(&BorderSegment { x: 0, y: 0, axis: Axis::Vertical }));
        // Terminator on the bottom-right edge
        assert!(segments.contains(&BorderSegment { x: 20, y: 21, axis: Axis::Horizontal }));
        assert!(segments.contains(&BorderSegment { x: 21, y: 20, axis: Axis::Vertical }));
    }

    #[test]
    fn test_segment_end() {
        let h = BorderSegment { x: 3, y: 4, axis: Axis::Horizontal };
        let v = BorderSegment { x: 3, y: 4, axis: Axis::Vertical };
        assert_eq!(h.end(), (4, 4));
        assert_eq!(v.end(), (3, 5));
    }
}
