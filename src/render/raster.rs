//! Rasterization of a recorded canvas into an RGBA image

use crate::io::configuration::BACKGROUND_COLOR;
use crate::render::canvas::{Canvas, DrawCommand, LineJoin};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

// Strokes thinner than this (in pixels) are drawn as single-pixel lines
const HAIRLINE_WIDTH: f64 = 1.5;

/// Rasterize every recorded command onto a transparent image
pub fn rasterize(canvas: &Canvas) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(canvas.width(), canvas.height(), Rgba(BACKGROUND_COLOR));
    let transform = canvas.transform();

    for command in canvas.commands() {
        match command {
            DrawCommand::Polygon {
                points,
                fill,
                stroke,
                line_width,
                line_join,
            } => {
                let device: Vec<(f64, f64)> =
                    points.iter().map(|&point| transform.apply(point)).collect();
                fill_polygon(&mut img, &device, Rgba(*fill));
                stroke_polygon(
                    &mut img,
                    &device,
                    transform.apply_length(*line_width),
                    *line_join,
                    Rgba(*stroke),
                );
            }
        }
    }

    img
}

/// Fill a closed polygon given in device coordinates
///
/// Polygons that collapse to fewer than three distinct pixels are skipped.
pub fn fill_polygon(img: &mut RgbaImage, device: &[(f64, f64)], color: Rgba<u8>) {
    let mut pixels: Vec<Point<i32>> = Vec::with_capacity(device.len());
    for &(x, y) in device {
        let point = Point::new(x.round() as i32, y.round() as i32);
        if pixels.last() != Some(&point) {
            pixels.push(point);
        }
    }
    while pixels.len() > 1 && pixels.first() == pixels.last() {
        pixels.pop();
    }
    if pixels.len() >= 3 {
        draw_polygon_mut(img, &pixels, color);
    }
}

/// Outline a closed polygon with a stroke of `width` device pixels
pub fn stroke_polygon(
    img: &mut RgbaImage,
    device: &[(f64, f64)],
    width: f64,
    join: LineJoin,
    color: Rgba<u8>,
) {
    let edges = device.iter().zip(device.iter().cycle().skip(1));

    if width < HAIRLINE_WIDTH {
        for (&(x0, y0), &(x1, y1)) in edges {
            draw_line_segment_mut(img, (x0 as f32, y0 as f32), (x1 as f32, y1 as f32), color);
        }
        return;
    }

    let half = width / 2.0;
    let mut normals = Vec::with_capacity(device.len());
    for (&start, &end) in edges {
        let normal = edge_normal(start, end, half);
        if let Some((nx, ny)) = normal {
            let quad = [
                (start.0 + nx, start.1 + ny),
                (end.0 + nx, end.1 + ny),
                (end.0 - nx, end.1 - ny),
                (start.0 - nx, start.1 - ny),
            ];
            fill_polygon(img, &quad, color);
        }
        normals.push(normal);
    }

    match join {
        LineJoin::Round => {
            let radius = half.round() as i32;
            for &(x, y) in device {
                draw_filled_circle_mut(img, (x.round() as i32, y.round() as i32), radius, color);
            }
        }
        LineJoin::Bevel => {
            // Vertex i joins the edge arriving from i-1 with the edge leaving towards i+1
            let arriving = normals.iter().cycle().skip(normals.len().saturating_sub(1));
            for ((&(x, y), incoming), outgoing) in device.iter().zip(arriving).zip(&normals) {
                if let (Some((ax, ay)), Some((bx, by))) = (incoming, outgoing) {
                    fill_polygon(img, &[(x, y), (x + ax, y + ay), (x + bx, y + by)], color);
                    fill_polygon(img, &[(x, y), (x - ax, y - ay), (x - bx, y - by)], color);
                }
            }
        }
    }
}

/// Perpendicular of length `half` to the edge, or `None` for a zero-length edge
fn edge_normal(start: (f64, f64), end: (f64, f64), half: f64) -> Option<(f64, f64)> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    (length > f64::EPSILON).then(|| (-dy / length * half, dx / length * half))
}
