use crate::models::Point;

/// Style tag attached to every primitive; maps one-to-one to a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Module set by the mask
    Black,
    /// Tint behind finder/alignment regions
    FunctionPatternBackground,
    /// Stroked ring of a finder or alignment pattern
    FunctionPatternOutline,
    /// Filled finder core, alignment core or timing module
    FunctionPattern,
    /// Tint behind the mask bits
    MaskInformationBackground,
    /// A set mask bit
    MaskInformation,
    /// Format information area
    FormatInformation,
    /// Boundary between codeword regions
    ByteBorder,
    /// Lattice point
    GridMarker,
    /// Lattice point on the mask's repeat grid
    MaskRepeatGridMarker,
    /// Zig-zag turn point annotation
    TurnAroundArrow,
    /// Module set in a mask tile legend
    TileBlack,
    /// Grid line in a mask tile legend
    TileBorder,
}

impl Style {
    /// All styles, in stylesheet order
    pub const ALL: [Style; 13] = [
        Style::Black,
        Style::FunctionPatternBackground,
        Style::FunctionPatternOutline,
        Style::FunctionPattern,
        Style::MaskInformationBackground,
        Style::MaskInformation,
        Style::FormatInformation,
        Style::ByteBorder,
        Style::GridMarker,
        Style::MaskRepeatGridMarker,
        Style::TurnAroundArrow,
        Style::TileBlack,
        Style::TileBorder,
    ];

    /// CSS class name
    pub fn class(&self) -> &'static str {
        match self {
            Style::Black => "black",
            Style::FunctionPatternBackground => "function-pattern-background",
            Style::FunctionPatternOutline => "function-pattern-rect-outline",
            Style::FunctionPattern => "function-pattern-rect",
            Style::MaskInformationBackground => "mask-information-background",
            Style::MaskInformation => "mask-information",
            Style::FormatInformation => "format-information",
            Style::ByteBorder => "byte-border",
            Style::GridMarker => "grid-marker",
            Style::MaskRepeatGridMarker => "mask-repeat-grid-marker",
            Style::TurnAroundArrow => "turn-around-arrow",
            Style::TileBlack => "tile-black",
            Style::TileBorder => "tile-border",
        }
    }
}

/// Geometry of one primitive, in module units
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
    },
    /// SVG path data
    Path {
        /// Path commands, relative moves allowed
        d: String,
    },
    /// Straight line
    Line {
        /// Start x
        x1: f32,
        /// Start y
        y1: f32,
        /// End x
        x2: f32,
        /// End y
        y2: f32,
    },
    /// Ellipse centered at (cx, cy)
    Ellipse {
        /// Center x
        cx: f32,
        /// Center y
        cy: f32,
        /// Horizontal radius
        rx: f32,
        /// Vertical radius
        ry: f32,
    },
    /// Open polyline
    Polyline {
        /// Vertices in drawing order
        points: Vec<Point>,
    },
}

/// A styled drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Geometry
    pub shape: Shape,
    /// CSS class selector
    pub style: Style,
}

impl Primitive {
    /// Rectangle anchored at its top-left corner
    pub fn rect(x: f32, y: f32, width: f32, height: f32, style: Style) -> Self {
        Self {
            shape: Shape::Rect {
                x,
                y,
                width,
                height,
            },
            style,
        }
    }

    /// 1x1 rectangle covering the module at (x, y)
    pub fn module(x: usize, y: usize, style: Style) -> Self {
        Self::rect(x as f32, y as f32, 1.0, 1.0, style)
    }

    /// Path from SVG path data
    pub fn path(d: impl Into<String>, style: Style) -> Self {
        Self {
            shape: Shape::Path { d: d.into() },
            style,
        }
    }

    /// Line from (x1, y1) to (x2, y2)
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, style: Style) -> Self {
        Self {
            shape: Shape::Line { x1, y1, x2, y2 },
            style,
        }
    }

    /// Circle, expressed as an ellipse with equal radii
    pub fn circle(cx: f32, cy: f32, r: f32, style: Style) -> Self {
        Self {
            shape: Shape::Ellipse {
                cx,
                cy,
                rx: r,
                ry: r,
            },
            style,
        }
    }

    /// Open polyline through `points`
    pub fn polyline(points: Vec<Point>, style: Style) -> Self {
        Self {
            shape: Shape::Polyline { points },
            style,
        }
    }

    /// Whether this is a 1x1 rectangle at (x, y)
    pub fn is_module_at(&self, x: usize, y: usize) -> bool {
        matches!(
            self.shape,
            Shape::Rect { x: rx, y: ry, width, height }
                if rx == x as f32 && ry == y as f32 && width == 1.0 && height == 1.0
        )
    }
}
