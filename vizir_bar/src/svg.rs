// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG serialization for bar nodes.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use kurbo::Rect;
use peniko::Brush;

use crate::render::BarNode;

/// Serializes `nodes` (in paint order) into a standalone SVG document.
///
/// Without an explicit `view_box` the union of the node bounds is used.
pub fn to_svg_string(nodes: &[BarNode], view_box: Option<Rect>) -> String {
    let view_box = view_box
        .or_else(|| nodes.iter().map(BarNode::bounds).reduce(|a, b| a.union(b)))
        .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');
    for node in nodes {
        write_bar(&mut out, node);
    }
    out.push_str("</svg>\n");
    out
}

/// Appends one bar as a translated `<g>` holding its `<rect>` and optional `<text>`.
pub fn write_bar(out: &mut String, node: &BarNode) {
    let origin = node.origin();
    out.push_str(&format!(
        r#"<g transform="translate({}, {})">"#,
        origin.x, origin.y
    ));
    out.push('\n');

    out.push_str(&format!(
        r#"<rect width="{}" height="{}" rx="{}" ry="{}""#,
        node.size.width, node.size.height, node.corner_radius, node.corner_radius
    ));
    write_paint_attr(out, "fill", &node.fill);
    write_paint_attr(out, "stroke", &node.stroke);
    out.push_str(&format!(r#" stroke-width="{}"/>"#, node.stroke_width));
    out.push('\n');

    if let Some(label) = &node.label {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central""#,
            label.pos.x, label.pos.y
        ));
        out.push_str(&format!(
            r#" font-size="{}" font-family="{}" font-weight="{}""#,
            label.style.font_size,
            escape_xml(label.style.font_family.as_css_family()),
            label.style.font_weight.0,
        ));
        out.push_str(r#" style="pointer-events: none""#);
        write_paint_attr(out, "fill", &label.fill);
        out.push('>');
        out.push_str(&escape_xml(&label.text));
        out.push_str("</text>\n");
    }

    out.push_str("</g>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_labels() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }

    #[test]
    fn empty_scene_uses_default_view_box() {
        let svg = to_svg_string(&[], None);
        assert!(svg.contains(r#"viewBox="0 0 100 100""#), "{svg}");
        assert!(svg.ends_with("</svg>\n"));
    }
}
