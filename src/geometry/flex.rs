//! Flex outline engine
//!
//! Builds the closed contour for one flex demonstration glyph: a rectangle
//! whose two long sides bow inward by the flex amount at their midpoints,
//! while the four corner anchors stay fixed. The bowed sides are drawn either
//! as two mirrored cubic curves or as two straight segments meeting at the
//! flexed midpoint.
//!
//! The engine is pure: every call produces an independent `BezPath` and no
//! state is held between invocations.

use kurbo::{BezPath, Point, Vec2};

/// Amount of inward bow at a side's midpoint, in design units.
pub type FlexAmount = u32;

/// Advance width of the vertical stem glyph.
pub const STEM_ADVANCE: f64 = 500.0;
/// Height of the vertical stem rectangle.
pub const STEM_HEIGHT: f64 = 500.0;
/// Thickness of the vertical stem rectangle.
pub const STEM_THICKNESS: f64 = 100.0;

/// Advance width of the horizontal bar glyph.
pub const BAR_ADVANCE: f64 = 700.0;
/// Width of the horizontal bar rectangle.
pub const BAR_WIDTH: f64 = 500.0;
/// Height of the horizontal bar rectangle.
pub const BAR_HEIGHT: f64 = 100.0;

/// Largest flex amount the engine accepts.
///
/// At 50 units the two bowed sides of the stem would meet at the midpoint,
/// so anything beyond 49 no longer produces a valid single contour.
pub const MAX_FLEX_LIMIT: FlexAmount = 49;

/// Fraction of the flex displacement applied to the outer control points.
///
/// Together with the `length / 2.0 / 3.0` longitudinal offset below, this is
/// an empirical easing choice; treat the pair as one tunable set, not as a
/// geometric law.
const EASE_FLEX_FACTOR: f64 = 0.5;

/// Orientation of a flex glyph's long, bowed sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexAxis {
    /// Long sides run vertically (the stem archetype).
    Vertical,
    /// Long sides run horizontally (the bar archetype).
    Horizontal,
}

/// The two base shapes flex is demonstrated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    Stem,
    Bar,
}

/// How a bowed side is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderStyle {
    Curved,
    Straight,
}

impl Archetype {
    pub const ALL: [Archetype; 2] = [Archetype::Stem, Archetype::Bar];

    pub fn axis(self) -> FlexAxis {
        match self {
            Archetype::Stem => FlexAxis::Vertical,
            Archetype::Bar => FlexAxis::Horizontal,
        }
    }

    /// Advance width of glyphs built on this archetype.
    pub fn advance_width(self) -> f64 {
        match self {
            Archetype::Stem => STEM_ADVANCE,
            Archetype::Bar => BAR_ADVANCE,
        }
    }

    /// Name fragment used in generated glyph names.
    pub fn name_part(self) -> &'static str {
        match self {
            Archetype::Stem => "stem",
            Archetype::Bar => "bar",
        }
    }

    /// Character encoded by the unflexed glyph of this archetype and style.
    pub fn base_codepoint(self, style: RenderStyle) -> char {
        match (self, style) {
            (Archetype::Stem, RenderStyle::Curved) => 'V',
            (Archetype::Stem, RenderStyle::Straight) => 'v',
            (Archetype::Bar, RenderStyle::Curved) => 'H',
            (Archetype::Bar, RenderStyle::Straight) => 'h',
        }
    }
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 2] = [RenderStyle::Curved, RenderStyle::Straight];

    /// Name fragment used in generated glyph names.
    pub fn name_part(self) -> &'static str {
        match self {
            RenderStyle::Curved => "curve",
            RenderStyle::Straight => "line",
        }
    }

    pub fn is_curved(self) -> bool {
        matches!(self, RenderStyle::Curved)
    }
}

/// Identifies one generated outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub archetype: Archetype,
    pub style: RenderStyle,
    pub flex: FlexAmount,
}

impl GlyphKey {
    pub fn new(archetype: Archetype, style: RenderStyle, flex: FlexAmount) -> Self {
        Self {
            archetype,
            style,
            flex,
        }
    }

    /// Production glyph name, e.g. `flex_stem_curve_0`.
    pub fn glyph_name(&self) -> String {
        format!(
            "flex_{}_{}_{}",
            self.archetype.name_part(),
            self.style.name_part(),
            self.flex
        )
    }

    /// Unicode assignment. Only the unflexed variant of each archetype and
    /// style encodes a character; all other flex amounts are reached through
    /// stylistic-set substitution.
    pub fn codepoint(&self) -> Option<char> {
        if self.flex == 0 {
            Some(self.archetype.base_codepoint(self.style))
        } else {
            None
        }
    }

    /// Build this glyph's outline.
    pub fn outline(&self) -> BezPath {
        flex_outline(self.archetype.axis(), self.flex, self.style.is_curved())
    }
}

/// Draw one side of the rectangle, bowed inward by `flex` at its midpoint.
///
/// `from` and `to` are the fixed corner anchors and `inward` is the unit
/// normal pointing toward the shape's interior. The curved form uses two
/// cubics whose control points blend between the anchor position and the
/// flexed midpoint; the straight form is two segments meeting at the midpoint.
fn bowed_side(path: &mut BezPath, from: Point, to: Point, inward: Vec2, flex: f64, curved: bool) {
    let side = to - from;
    let length = side.hypot();
    let along = side / length;
    // One third of the half-side.
    let ease = length / 2.0 / 3.0;
    let mid = from.midpoint(to) + inward * flex;

    if curved {
        path.curve_to(
            from + along * ease + inward * (flex * EASE_FLEX_FACTOR),
            mid - along * ease,
            mid,
        );
        path.curve_to(
            mid + along * ease,
            to - along * ease + inward * (flex * EASE_FLEX_FACTOR),
            to,
        );
    } else {
        path.line_to(mid);
        path.line_to(to);
    }
}

/// Build the outline for one flex glyph.
///
/// The contour starts at the bottom-left corner and is traversed
/// counter-clockwise. For the vertical axis the bowed sides are the right and
/// left edges; for the horizontal axis they are the bottom and top edges,
/// with the left edge supplied by the closing segment.
pub fn flex_outline(axis: FlexAxis, flex: FlexAmount, curved: bool) -> BezPath {
    let flex = f64::from(flex);
    let mut path = BezPath::new();

    match axis {
        FlexAxis::Vertical => {
            let right_x = STEM_ADVANCE / 2.0 + STEM_THICKNESS / 2.0;
            let left_x = STEM_ADVANCE / 2.0 - STEM_THICKNESS / 2.0;
            let bot_l = Point::new(left_x, 0.0);
            let bot_r = Point::new(right_x, 0.0);
            let top_r = Point::new(right_x, STEM_HEIGHT);
            let top_l = Point::new(left_x, STEM_HEIGHT);

            path.move_to(bot_l);
            path.line_to(bot_r);
            bowed_side(&mut path, bot_r, top_r, Vec2::new(-1.0, 0.0), flex, curved);
            path.line_to(top_l);
            bowed_side(&mut path, top_l, bot_l, Vec2::new(1.0, 0.0), flex, curved);
        }
        FlexAxis::Horizontal => {
            let right_x = BAR_ADVANCE / 2.0 + BAR_WIDTH / 2.0;
            let left_x = BAR_ADVANCE / 2.0 - BAR_WIDTH / 2.0;
            let bot_l = Point::new(left_x, 0.0);
            let bot_r = Point::new(right_x, 0.0);
            let top_r = Point::new(right_x, BAR_HEIGHT);
            let top_l = Point::new(left_x, BAR_HEIGHT);

            path.move_to(bot_l);
            bowed_side(&mut path, bot_l, bot_r, Vec2::new(0.0, 1.0), flex, curved);
            path.line_to(top_r);
            bowed_side(&mut path, top_r, top_l, Vec2::new(0.0, -1.0), flex, curved);
        }
    }

    path.close_path();
    path
}

/// Outline for the vertical stem archetype.
pub fn stem_outline(flex: FlexAmount, curved: bool) -> BezPath {
    flex_outline(FlexAxis::Vertical, flex, curved)
}

/// Outline for the horizontal bar archetype.
pub fn bar_outline(flex: FlexAmount, curved: bool) -> BezPath {
    flex_outline(FlexAxis::Horizontal, flex, curved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Rect, Shape};

    const BEZ: f64 = 500.0 / 2.0 / 3.0;

    fn endpoints(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .filter_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Midpoint of the stem's right side, i.e. the end of its first half.
    /// Works for both styles: MoveTo, LineTo along the bottom, then the
    /// bowed side whose first endpoint is the flexed midpoint.
    fn stem_right_midpoint(path: &BezPath) -> Point {
        endpoints(path)[2]
    }

    /// Midpoint of the bar's bottom side. The bowed side is drawn first, so
    /// its flexed midpoint is the first endpoint after the MoveTo.
    fn bar_bottom_midpoint(path: &BezPath) -> Point {
        endpoints(path)[1]
    }

    #[test]
    fn stem_flex_two_curved_matches_reference_coordinates() {
        let path = stem_outline(2, true);
        let els = path.elements();

        assert_eq!(els[0], PathEl::MoveTo(Point::new(200.0, 0.0)));
        assert_eq!(els[1], PathEl::LineTo(Point::new(300.0, 0.0)));
        assert_eq!(
            els[2],
            PathEl::CurveTo(
                Point::new(299.0, BEZ),
                Point::new(298.0, 250.0 - BEZ),
                Point::new(298.0, 250.0),
            )
        );
        assert_eq!(
            els[3],
            PathEl::CurveTo(
                Point::new(298.0, 250.0 + BEZ),
                Point::new(299.0, 500.0 - BEZ),
                Point::new(300.0, 500.0),
            )
        );
        assert_eq!(els[4], PathEl::LineTo(Point::new(200.0, 500.0)));
        assert_eq!(
            els[5],
            PathEl::CurveTo(
                Point::new(201.0, 500.0 - BEZ),
                Point::new(202.0, 250.0 + BEZ),
                Point::new(202.0, 250.0),
            )
        );
        assert_eq!(
            els[6],
            PathEl::CurveTo(
                Point::new(202.0, 250.0 - BEZ),
                Point::new(201.0, BEZ),
                Point::new(200.0, 0.0),
            )
        );
        assert_eq!(els[7], PathEl::ClosePath);
        assert_eq!(els.len(), 8);
    }

    #[test]
    fn bar_flex_one_curved_matches_reference_coordinates() {
        let path = bar_outline(1, true);
        let els = path.elements();

        assert_eq!(els[0], PathEl::MoveTo(Point::new(100.0, 0.0)));
        assert_eq!(
            els[1],
            PathEl::CurveTo(
                Point::new(100.0 + BEZ, 0.5),
                Point::new(350.0 - BEZ, 1.0),
                Point::new(350.0, 1.0),
            )
        );
        assert_eq!(
            els[2],
            PathEl::CurveTo(
                Point::new(350.0 + BEZ, 1.0),
                Point::new(600.0 - BEZ, 0.5),
                Point::new(600.0, 0.0),
            )
        );
        assert_eq!(els[3], PathEl::LineTo(Point::new(600.0, 100.0)));
        assert_eq!(
            els[4],
            PathEl::CurveTo(
                Point::new(600.0 - BEZ, 99.5),
                Point::new(350.0 + BEZ, 99.0),
                Point::new(350.0, 99.0),
            )
        );
        assert_eq!(
            els[5],
            PathEl::CurveTo(
                Point::new(350.0 - BEZ, 99.0),
                Point::new(100.0 + BEZ, 99.5),
                Point::new(100.0, 100.0),
            )
        );
        assert_eq!(els[6], PathEl::ClosePath);
    }

    #[test]
    fn unflexed_bar_is_a_plain_rectangle() {
        let path = bar_outline(0, false);
        assert_eq!(path.bounding_box(), Rect::new(100.0, 0.0, 600.0, 100.0));
        for pt in endpoints(&path) {
            assert!(pt.x == 100.0 || pt.x == 600.0 || pt.x == 350.0);
            assert!(pt.y == 0.0 || pt.y == 100.0);
        }
    }

    #[test]
    fn unflexed_curved_controls_collapse_onto_the_anchors() {
        // At flex 0 the curved and straight outlines must be geometrically
        // degenerate-equal: every off-curve point lies on the straight line
        // between its anchors.
        let path = stem_outline(0, true);
        for el in path.elements() {
            if let PathEl::CurveTo(c1, c2, p) = *el {
                assert!(c1.x == 200.0 || c1.x == 300.0);
                assert_eq!(c1.x, c2.x);
                assert_eq!(c2.x, p.x);
            }
        }

        let path = bar_outline(0, true);
        for el in path.elements() {
            if let PathEl::CurveTo(c1, c2, p) = *el {
                assert!(c1.y == 0.0 || c1.y == 100.0);
                assert_eq!(c1.y, c2.y);
                assert_eq!(c2.y, p.y);
            }
        }
    }

    #[test]
    fn straight_and_curved_share_anchors_and_midpoints() {
        for flex in [0, 1, 3, 5] {
            let curved = stem_outline(flex, true);
            let straight = stem_outline(flex, false);
            // Same start, same midpoints, same corners.
            assert_eq!(curved.elements()[0], straight.elements()[0]);
            assert_eq!(
                stem_right_midpoint(&curved),
                stem_right_midpoint(&straight)
            );
        }
    }

    #[test]
    fn stem_sides_flex_symmetrically() {
        for flex in 0..=5 {
            let path = stem_outline(flex, true);
            let pts = endpoints(&path);
            let right_mid = pts[2];
            let left_mid = pts[5];
            assert_eq!(right_mid.y, 250.0);
            assert_eq!(left_mid.y, 250.0);
            // Equal displacement, opposite direction, relative to the axis.
            assert_eq!(300.0 - right_mid.x, left_mid.x - 200.0);
            assert_eq!(300.0 - right_mid.x, f64::from(flex));
        }
    }

    #[test]
    fn midpoint_bow_grows_strictly_with_flex() {
        for curved in [true, false] {
            let mut last_stem = -1.0;
            let mut last_bar = -1.0;
            for flex in 0..=MAX_FLEX_LIMIT {
                let stem = stem_outline(flex, curved);
                let bow = 300.0 - stem_right_midpoint(&stem).x;
                assert!(bow > last_stem);
                last_stem = bow;

                let bar = bar_outline(flex, curved);
                let mid = bar_bottom_midpoint(&bar);
                assert!(mid.y > last_bar);
                last_bar = mid.y;
            }
        }
    }

    #[test]
    fn outlines_are_single_closed_contours() {
        for archetype in Archetype::ALL {
            for style in RenderStyle::ALL {
                for flex in [0, 2, 5] {
                    let key = GlyphKey::new(archetype, style, flex);
                    let path = key.outline();
                    let els = path.elements();
                    assert!(matches!(els[0], PathEl::MoveTo(_)));
                    assert_eq!(els[els.len() - 1], PathEl::ClosePath);
                    let moves = els
                        .iter()
                        .filter(|el| matches!(el, PathEl::MoveTo(_)))
                        .count();
                    let closes = els
                        .iter()
                        .filter(|el| matches!(el, PathEl::ClosePath))
                        .count();
                    assert_eq!(moves, 1);
                    assert_eq!(closes, 1);
                }
            }
        }
    }

    #[test]
    fn stem_last_segment_returns_to_the_start() {
        // The stem traversal ends exactly on its starting anchor; the bar
        // relies on the closing segment for its left edge instead.
        for style in RenderStyle::ALL {
            for flex in [0, 3] {
                let path = stem_outline(flex, style.is_curved());
                let pts = endpoints(&path);
                assert_eq!(pts[0], *pts.last().unwrap());
            }
        }
    }

    #[test]
    fn glyph_names_follow_the_naming_convention() {
        let key = GlyphKey::new(Archetype::Stem, RenderStyle::Curved, 0);
        assert_eq!(key.glyph_name(), "flex_stem_curve_0");
        let key = GlyphKey::new(Archetype::Bar, RenderStyle::Straight, 12);
        assert_eq!(key.glyph_name(), "flex_bar_line_12");
    }

    #[test]
    fn only_unflexed_glyphs_encode_characters() {
        assert_eq!(
            GlyphKey::new(Archetype::Stem, RenderStyle::Curved, 0).codepoint(),
            Some('V')
        );
        assert_eq!(
            GlyphKey::new(Archetype::Stem, RenderStyle::Straight, 0).codepoint(),
            Some('v')
        );
        assert_eq!(
            GlyphKey::new(Archetype::Bar, RenderStyle::Curved, 0).codepoint(),
            Some('H')
        );
        assert_eq!(
            GlyphKey::new(Archetype::Bar, RenderStyle::Straight, 0).codepoint(),
            Some('h')
        );
        assert_eq!(
            GlyphKey::new(Archetype::Bar, RenderStyle::Curved, 1).codepoint(),
            None
        );
    }
}
