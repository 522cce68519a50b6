//! Cheat sheet page assembly
//!
//! One table row per mask, one column per version. Each row header carries
//! the mask bits and the mask's repeat tile; each cell a grid diagram.

use crate::config::SheetConfig;
use crate::models::{MaskPattern, Version};
use crate::render::svg::{STYLESHEET, grid_svg, tile_svg};
use crate::render::{GridRenderer, render_mask_tile};
use rayon::prelude::*;
use std::fmt::Write;

const PAGE_CSS: &str = r#"table {
	inline-size: 100%;
	border-spacing: 0;
	table-layout: fixed;
}
td.corner {
	inline-size: 4rem;
}
th, td {
	font-weight: normal;
	padding: 0;
	text-align: center;
}
tbody th {
	text-align: -webkit-center;
	inline-size: 4rem;
}
.timing-count {
	font-size: .8rem;
}
.mask-bits {
	border-collapse: collapse;
	line-height: 1;
	inline-size: fit-content;
	font-size: .8rem;
}
.mask-bits > div {
	font-family: monospace;
	display: table-cell;
	border: 1px solid gray;
	block-size: 1.3em;
	inline-size: 1.3em;
	vertical-align: middle;
}
.mask-bits > div.one {
	background: light-dark(black, white);
	color: light-dark(white, black);
}
"#;

/// Escape text for HTML content and attribute values
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn version_header(version: Version) -> String {
    let size = version.size();
    format!(
        "<th>Version {} ({}&#xD7;{})<br><span class=\"timing-count\">{} black timing modules</span></th>",
        version,
        size,
        size,
        version.timing_modules()
    )
}

fn mask_header(mask: MaskPattern) -> String {
    let mut th = format!("<th>Mask {mask}<div class=\"mask-bits\">");
    for bit in mask.bits() {
        let _ = write!(
            th,
            "<div class=\"{}\">{}</div>",
            if bit { "one" } else { "zero" },
            u8::from(bit)
        );
    }
    th.push_str("</div>");
    th.push_str(&tile_svg(&render_mask_tile(mask), false));
    th.push_str("</th>");
    th
}

fn mask_row(mask: MaskPattern, versions: &[Version], turn_arrows: bool) -> String {
    let mut row = String::from("<tr>");
    row.push_str(&mask_header(mask));
    for &version in versions {
        let primitives = GridRenderer::new(version, mask)
            .with_turn_arrows(turn_arrows)
            .render();
        row.push_str("<td>");
        row.push_str(&grid_svg(&primitives, version.size(), false));
        row.push_str("</td>");
    }
    row.push_str("</tr>\n");
    row
}

/// Build the complete HTML document
pub fn render_page(config: &SheetConfig) -> String {
    let versions: Vec<Version> = Version::all()
        .take_while(|v| v.number() <= config.max_version)
        .collect();

    // Rows are independent; collect keeps mask order
    let rows: Vec<String> = MaskPattern::ALL
        .par_iter()
        .map(|&mask| mask_row(mask, &versions, config.turn_arrows))
        .collect();

    log::debug!(
        "rendered {} rows x {} versions",
        rows.len(),
        versions.len()
    );

    let mut html = String::with_capacity(rows.iter().map(String::len).sum::<usize>() + 4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&config.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(&config.description)
    );
    html.push_str("<style>\n:root {\n\tcolor-scheme: light dark;\n}\n");
    html.push_str(PAGE_CSS);
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n<table>\n<thead>\n<tr><td class=\"corner\"></td>");
    for &version in &versions {
        html.push_str(&version_header(version));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &rows {
        html.push_str(row);
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
