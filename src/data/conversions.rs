//! UFO format conversion utilities
//!
//! Conversion from the engine's kurbo outlines to norad's contour
//! representation. This is pure data transformation between equivalent
//! representations; the geometry is fixed before it arrives here.

use anyhow::{bail, Context, Result};
use kurbo::{BezPath, PathEl, Point};
use norad::{Contour, ContourPoint, PointType};

use crate::font_source::glyphs::GeneratedGlyph;

impl GeneratedGlyph {
    /// Convert to a norad glyph: name, advance width, optional codepoint,
    /// and the single closed contour.
    pub fn to_norad_glyph(&self) -> Result<norad::Glyph> {
        let name = self.glyph_name();
        let mut glyph = norad::Glyph::new(&name);
        glyph.width = self.advance_width;
        if let Some(codepoint) = self.codepoint {
            glyph.codepoints.insert(codepoint);
        }
        glyph.contours = vec![bez_path_to_contour(&self.outline)
            .with_context(|| format!("Invalid outline for glyph {name}"))?];
        Ok(glyph)
    }
}

fn contour_point(point: Point, typ: PointType) -> ContourPoint {
    ContourPoint::new(point.x, point.y, typ, false, None, None)
}

/// Convert a single closed `BezPath` contour to a norad contour.
///
/// UFO closed contours carry no move point: the list is circular and the
/// starting anchor is typed by the segment that closes onto it. When the
/// drawn path already ends exactly on its starting anchor, that final
/// on-curve point becomes the starting entry; otherwise the contour is
/// closed with an implicit line and the start is a line point.
pub fn bez_path_to_contour(path: &BezPath) -> Result<Contour> {
    let mut points: Vec<ContourPoint> = Vec::new();
    let mut start: Option<Point> = None;

    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => {
                if start.is_some() {
                    bail!("expected a single contour, found a second MoveTo");
                }
                start = Some(p);
            }
            PathEl::LineTo(p) => points.push(contour_point(p, PointType::Line)),
            PathEl::CurveTo(c1, c2, p) => {
                points.push(contour_point(c1, PointType::OffCurve));
                points.push(contour_point(c2, PointType::OffCurve));
                points.push(contour_point(p, PointType::Curve));
            }
            PathEl::QuadTo(..) => bail!("quadratic segments are not produced by the flex engine"),
            PathEl::ClosePath => {}
        }
    }

    let start = start.context("contour has no MoveTo")?;

    let duplicated_start = points
        .last()
        .is_some_and(|p| p.typ != PointType::OffCurve && p.x == start.x && p.y == start.y);
    let closing_type = if duplicated_start {
        match points.pop() {
            Some(last) => last.typ,
            None => PointType::Line,
        }
    } else {
        PointType::Line
    };
    // The popped point's off-curves (if any) stay at the end of the list,
    // which is where they belong in circular order: just before the start.
    points.insert(0, contour_point(start, closing_type));

    Ok(Contour::new(points, None))
}
