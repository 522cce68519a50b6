use super::primitive::{Primitive, Shape};
use std::fmt::Write;

/// View box side of a mask tile legend (largest tile is 6 x 6, plus margin)
const TILE_VIEW_SIDE: f32 = 8.0;

/// Class on the root `<svg>` of a grid diagram
pub const GRID_CLASS: &str = "qr-grid";
/// Class on the root `<svg>` of a mask tile legend
pub const TILE_CLASS: &str = "mask-tile";

/// Stylesheet for every [`Style`](super::primitive::Style) class and both diagram kinds
pub const STYLESHEET: &str = r#"svg.qr-grid, svg.mask-tile {
	--black: light-dark(#aaa, #777);
	--function-pattern: light-dark(blue, royalblue);
	--mask-information: light-dark(red, red);
	--format-information: light-dark(yellow, gold);
	--byte-border: light-dark(black, white);
	color-scheme: light dark;
	display: block;
	inline-size: 100%;
	block-size: 100%;
}
rect.black {
	fill: var(--black);
	stroke: none;
}
.function-pattern-rect-outline {
	fill: none;
	stroke: var(--function-pattern);
	stroke-width: 1;
	stroke-linejoin: miter;
}
.function-pattern-rect {
	fill: var(--function-pattern);
}
.function-pattern-background {
	fill: color-mix(in srgb, var(--function-pattern), transparent 60%);
}
.mask-information {
	fill: var(--mask-information);
}
.mask-information-background {
	fill: color-mix(in srgb, var(--mask-information), transparent 60%);
}
.format-information {
	fill: var(--format-information);
}
.byte-border {
	stroke: var(--byte-border);
	stroke-width: .2;
	stroke-linecap: round;
}
.grid-marker {
	fill: light-dark(black, white);
}
.mask-repeat-grid-marker {
	stroke: light-dark(black, white);
	fill: light-dark(white, black);
	stroke-width: .2;
}
.turn-around-arrow {
	fill: none;
	stroke: red;
	stroke-width: .3;
	stroke-linecap: round;
	stroke-linejoin: round;
}
.tile-black {
	fill: light-dark(black, white);
}
.tile-border {
	stroke: light-dark(gray, gray);
	stroke-width: .1;
	stroke-linecap: round;
}
"#;

/// Accumulates primitives into one `<svg>` element
pub struct SvgBuilder {
    view_box: [f32; 4],
    width: f32,
    height: f32,
    class: &'static str,
    standalone: bool,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Empty builder with a 1 x 1 intrinsic size
    pub fn new(view_box: [f32; 4], class: &'static str) -> Self {
        Self {
            view_box,
            width: 1.0,
            height: 1.0,
            class,
            standalone: false,
            elements: Vec::new(),
        }
    }

    /// Intrinsic width/height attributes
    pub fn dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Emit the XML namespace and embed [`STYLESHEET`]
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Append one primitive
    pub fn push(&mut self, primitive: &Primitive) {
        self.elements.push(element(primitive));
    }

    /// Append primitives in order
    pub fn extend<'a>(&mut self, primitives: impl IntoIterator<Item = &'a Primitive>) {
        for primitive in primitives {
            self.push(primitive);
        }
    }

    /// Serialize the `<svg>` element
    pub fn build(self) -> String {
        let [min_x, min_y, w, h] = self.view_box;
        let mut svg = String::with_capacity(64 + self.elements.len() * 64);
        svg.push_str("<svg");
        if self.standalone {
            svg.push_str(r#" xmlns="http://www.w3.org/2000/svg""#);
        }
        let _ = write!(
            svg,
            r#" class="{}" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            self.class, min_x, min_y, w, h, self.width, self.height
        );
        svg.push('\n');
        if self.standalone {
            svg.push_str("<style>\n");
            svg.push_str(STYLESHEET);
            svg.push_str("</style>\n");
        }
        for el in &self.elements {
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Serialize one primitive as an SVG element
pub fn element(primitive: &Primitive) -> String {
    let class = primitive.style.class();
    match &primitive.shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => format!(
            r#"<rect class="{class}" x="{x}" y="{y}" width="{width}" height="{height}"/>"#
        ),
        Shape::Path { d } => format!(r#"<path class="{class}" d="{d}"/>"#),
        Shape::Line { x1, y1, x2, y2 } => {
            format!(r#"<line class="{class}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#)
        }
        Shape::Ellipse { cx, cy, rx, ry } => {
            format!(r#"<ellipse class="{class}" cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}"/>"#)
        }
        Shape::Polyline { points } => {
            let mut coords = String::new();
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    coords.push(' ');
                }
                let _ = write!(coords, "{} {}", p.x, p.y);
            }
            format!(r#"<polyline class="{class}" points="{coords}"/>"#)
        }
    }
}

/// Grid diagram with a one-module margin around the `size` x `size` symbol
pub fn grid_svg(primitives: &[Primitive], size: usize, standalone: bool) -> String {
    let side = size as f32 + 2.0;
    let mut builder = SvgBuilder::new([-1.0, -1.0, side, side], GRID_CLASS).standalone(standalone);
    if standalone {
        // Give standalone files a usable intrinsic size
        builder = builder.dimensions(side * 10.0, side * 10.0);
    }
    builder.extend(primitives);
    builder.build()
}

/// Mask tile legend
pub fn tile_svg(primitives: &[Primitive], standalone: bool) -> String {
    let mut builder = SvgBuilder::new(
        [-1.0, -1.0, TILE_VIEW_SIDE, TILE_VIEW_SIDE],
        TILE_CLASS,
    )
    .dimensions(TILE_VIEW_SIDE, TILE_VIEW_SIDE)
    .standalone(standalone);
    builder.extend(primitives);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use crate::render::primitive::Style;

    #[test]
    fn test_element_numbers_print_shortest() {
        let rect = Primitive::rect(16.5, 16.5, 4.0, 4.0, Style::FunctionPatternOutline);
        assert_eq!(
            element(&rect),
            r#"<rect class="function-pattern-rect-outline" x="16.5" y="16.5" width="4" height="4"/>"#
        );
        let dot = Primitive::circle(3.0, 0.0, 0.075, Style::GridMarker);
        assert_eq!(
            element(&dot),
            r#"<ellipse class="grid-marker" cx="3" cy="0" rx="0.075" ry="0.075"/>"#
        );
    }

    #[test]
    fn test_polyline_points() {
        let arrow = Primitive::polyline(
            vec![Point::new(15.5, 21.0), Point::new(16.0, 20.5), Point::new(16.5, 21.0)],
            Style::TurnAroundArrow,
        );
        assert_eq!(
            element(&arrow),
            r#"<polyline class="turn-around-arrow" points="15.5 21 16 20.5 16.5 21"/>"#
        );
    }

    #[test]
    fn test_grid_svg_view_box() {
        let svg = grid_svg(&[Primitive::module(0, 0, Style::Black)], 21, false);
        assert!(svg.starts_with(r#"<svg class="qr-grid" viewBox="-1 -1 23 23" width="1" height="1">"#));
        assert!(svg.contains(r#"<rect class="black" x="0" y="0" width="1" height="1"/>"#));
        assert!(!svg.contains("<style>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_standalone_embeds_stylesheet() {
        let svg = tile_svg(&[], true);
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"viewBox="-1 -1 8 8""#));
        assert!(svg.contains("<style>"));
    }

    #[test]
    fn test_stylesheet_covers_every_style() {
        for style in Style::ALL {
            assert!(STYLESHEET.contains(&format!(".{}", style.class())), "{}", style.class());
        }
    }
}
