//! SVG security status badge renderer.
//!
//! The badge is a label column ("Security Status") followed by one value
//! column per severity level, each showing `<short label>: <count> <arrow>`.
//! Rendering is a pure function of its inputs: the same status always yields
//! byte-identical markup, and no input can make it fail.
//!
//! ```
//! use secbadge::badge::render_security_badge;
//!
//! let svg = render_security_badge(10, "up", 20, "down", 30, "stable", 5, "down");
//! assert!(svg.contains("C: 10 ↑"));
//! assert!(svg.contains(r#"width="350" height="20""#));
//! ```
//!
//! Text is interpolated without XML escaping. Counts and arrows never need
//! it, so the output is well-formed for every input.

pub mod layout;
pub mod palette;

pub use layout::BadgeLayout;

use crate::severity::SecurityStatus;

const LABEL_TEXT: &str = "Security Status";
const TEXT_BASELINE: u32 = 14;
const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";
const FONT_SIZE: u32 = 11;

/// Render a badge from the eight raw inputs.
///
/// Trend strings are matched case-insensitively against `up`, `down` and
/// `stable`; anything else renders the stable arrow.
#[allow(clippy::too_many_arguments)]
pub fn render_security_badge(
    critical_count: i64,
    critical_trend: &str,
    high_count: i64,
    high_trend: &str,
    medium_count: i64,
    medium_trend: &str,
    low_count: i64,
    low_trend: &str,
) -> String {
    let status = SecurityStatus::new(
        critical_count,
        critical_trend,
        high_count,
        high_trend,
        medium_count,
        medium_trend,
        low_count,
        low_trend,
    );
    render(&status)
}

/// Render a badge for `status` using the default layout.
pub fn render(status: &SecurityStatus) -> String {
    let layout = BadgeLayout::default();
    let mut svg = String::with_capacity(1536);

    push_envelope(&mut svg, &layout);
    push_background(&mut svg, &layout);
    push_text_layer(&mut svg, &layout, status);

    tracing::debug!(
        width = layout.total_width(),
        chars = svg.chars().count(),
        "rendered security badge"
    );
    svg
}

fn push_envelope(svg: &mut String, layout: &BadgeLayout) {
    let width = layout.total_width();
    let height = layout.height;

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    ));
    svg.push('\n');
    svg.push_str("    <linearGradient id=\"smooth\" x2=\"0\" y2=\"100%\">\n");
    svg.push_str("        <stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/>\n");
    svg.push_str("        <stop offset=\"1\" stop-opacity=\".1\"/>\n");
    svg.push_str("    </linearGradient>\n");
    svg.push_str("    \n");
    svg.push_str("    <clipPath id=\"round\">\n");
    svg.push_str(&format!(
        "        <rect width=\"{width}\" height=\"{height}\" rx=\"3\" fill=\"#fff\"/>\n"
    ));
    svg.push_str("    </clipPath>\n");
    svg.push_str("    \n");
}

// The value area is always painted with the critical color; columns after
// the first paint over it in the text layer.
fn push_background(svg: &mut String, layout: &BadgeLayout) {
    let height = layout.height;

    svg.push_str("    <g clip-path=\"url(#round)\">\n");
    svg.push_str("        <!-- Label section -->\n");
    svg.push_str(&format!(
        "        <rect width=\"{}\" height=\"{height}\" fill=\"{}\"/>\n",
        layout.label_width,
        palette::LABEL
    ));
    svg.push_str(&format!(
        "        <rect x=\"{}\" width=\"{}\" height=\"{height}\" fill=\"{}\"/>\n",
        layout.label_width,
        layout.values_width(),
        palette::CRITICAL
    ));
    svg.push_str(&format!(
        "        <rect width=\"{}\" height=\"{height}\" fill=\"url(#smooth)\"/>\n",
        layout.total_width()
    ));
    svg.push_str("    </g>\n");
    svg.push_str("    \n");
}

fn push_text_layer(svg: &mut String, layout: &BadgeLayout, status: &SecurityStatus) {
    svg.push_str(&format!(
        "    <g fill=\"#fff\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"{FONT_SIZE}\">\n"
    ));
    svg.push_str("        <!-- Label text -->\n");
    push_text(svg, layout.label_center(), LABEL_TEXT);

    for level in status.levels() {
        let index = level.severity.column();
        if index > 0 {
            svg.push_str(&format!(
                "        <rect x=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                layout.column_x(index),
                layout.box_width,
                layout.height,
                level.severity.color()
            ));
        }
        push_text(svg, layout.column_center(index), &level.text());
    }

    svg.push_str("    </g>\n");
    svg.push_str("</svg>");
}

fn push_text(svg: &mut String, x: f64, content: &str) {
    svg.push_str(&format!(
        "        <text x=\"{x:.1}\" y=\"{TEXT_BASELINE}\" fill=\"#fff\">{content}</text>\n"
    ));
}
