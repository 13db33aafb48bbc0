//! SVG export of a recorded canvas

use crate::render::canvas::{Canvas, DrawCommand};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

/// Build an SVG document mirroring the canvas, transform included
pub fn to_svg(canvas: &Canvas) -> Document {
    let transform = canvas.transform();
    let mut group = Group::new().set(
        "transform",
        format!(
            "translate({} {}) scale({})",
            transform.translation.0, transform.translation.1, transform.scale
        ),
    );

    for command in canvas.commands() {
        match command {
            DrawCommand::Polygon {
                points,
                fill,
                stroke,
                line_width,
                line_join,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                let data = rest
                    .iter()
                    .fold(
                        Data::new().move_to((first.re as f32, first.im as f32)),
                        |data, point| data.line_to((point.re as f32, point.im as f32)),
                    )
                    .close();

                group = group.add(
                    Path::new()
                        .set("d", data)
                        .set("fill", css_color(*fill))
                        .set("stroke", css_color(*stroke))
                        .set("stroke-width", line_width.to_string())
                        .set("stroke-linejoin", line_join.svg_keyword()),
                );
            }
        }
    }

    Document::new()
        .set("width", canvas.width().to_string())
        .set("height", canvas.height().to_string())
        .set(
            "viewBox",
            format!("0 0 {} {}", canvas.width(), canvas.height()),
        )
        .add(group)
}

/// CSS `rgb()`/`rgba()` notation for an RGBA colour
pub fn css_color(rgba: [u8; 4]) -> String {
    let [r, g, b, a] = rgba;
    if a == u8::MAX {
        format!("rgb({r},{g},{b})")
    } else {
        format!("rgba({r},{g},{b},{:.3})", f64::from(a) / 255.0)
    }
}
