//! Box measurement.
//!
//! [CSS 2.1 § 10 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)
//!
//! Sizes are computed on demand from the computed styles, with no layout
//! tree cached between calls. Widths depend only on ancestors (and on the
//! intrinsic widths of descendants for shrink-to-fit boxes); heights depend
//! on ancestors' definite heights and on in-flow descendants. Out-of-flow
//! boxes never contribute to an ancestor's auto height.
//!
//! Only the content box is modeled: there is no padding, border, line
//! box or text measurement.

use objfit_dom::{NodeId, ReplacedContent};
use serde::Serialize;

use crate::computed::ComputedStyle;
use crate::document::Document;
use crate::properties::{DisplayValue, PositionValue};
use crate::values::{AutoLength, LengthValue, MaxLength};

/// Width and height of a box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolve a min/max pair and clamp `value`.
///
/// [§ 10.4](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
/// "If the resulting width is greater than 'max-width', the rules above are
/// applied again, but this time using the computed value of 'max-width' as
/// the computed value for 'width'. If the resulting width is smaller than
/// 'min-width', the rules above are applied again..."
fn clamp(value: f64, min: f64, max: Option<f64>) -> f64 {
    let capped = max.map_or(value, |max| value.min(max));
    capped.max(min)
}

/// [§ 10.4](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
/// Constraint violation table for replaced elements with both 'width' and
/// 'height' computed as 'auto'.
///
/// Assumes `max >= min` on each axis, which callers enforce.
fn clamp_preserving_ratio(natural: Size, min: Size, max: Size) -> Size {
    let (w, h) = (natural.width, natural.height);
    if w <= 0.0 || h <= 0.0 {
        return Size::new(
            w.min(max.width).max(min.width),
            h.min(max.height).max(min.height),
        );
    }
    let (min_w, min_h, max_w, max_h) = (min.width, min.height, max.width, max.height);
    let (width, height) = if w > max_w && h > max_h {
        if max_w / w <= max_h / h {
            (max_w, min_h.max(max_w * h / w))
        } else {
            (min_w.max(max_h * w / h), max_h)
        }
    } else if w < min_w && h < min_h {
        if min_w / w <= min_h / h {
            (max_w.min(min_h * w / h), min_h)
        } else {
            (min_w, max_h.min(min_w * h / w))
        }
    } else if w < min_w && h > max_h {
        (min_w, max_h)
    } else if w > max_w && h < min_h {
        (max_w, min_h)
    } else if w > max_w {
        (max_w, (max_w * h / w).max(min_h))
    } else if w < min_w {
        (min_w, (min_w * h / w).min(max_h))
    } else if h > max_h {
        ((max_h * w / h).max(min_w), max_h)
    } else if h < min_h {
        ((min_h * w / h).min(max_w), min_h)
    } else {
        (w, h)
    };
    Size::new(width, height)
}

impl Document {
    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// The element that establishes `node`'s containing block, or `None` for
    /// the initial containing block (the viewport).
    ///
    /// - "For other elements, if the element's position is 'relative' or
    ///   'static', the containing block is formed by the content edge of the
    ///   nearest ancestor box that is a block container"
    /// - "If the element has 'position: fixed', the containing block is
    ///   established by the viewport"
    /// - "If the element has 'position: absolute', the containing block is
    ///   established by the nearest ancestor with a 'position' of 'absolute',
    ///   'relative' or 'fixed'"
    #[must_use]
    pub fn containing_block(&self, node: NodeId) -> Option<NodeId> {
        let position = self
            .computed_style(node)
            .map_or(PositionValue::Static, |s| s.position);
        match position {
            PositionValue::Fixed => None,
            PositionValue::Absolute => self.tree().ancestors(node).find(|&ancestor| {
                self.computed_style(ancestor)
                    .is_some_and(|s| s.position.is_positioned())
            }),
            PositionValue::Static | PositionValue::Relative | PositionValue::Sticky => self
                .tree()
                .ancestors(node)
                .find(|&ancestor| {
                    self.computed_style(ancestor).is_some_and(|s| {
                        !matches!(s.display, DisplayValue::Inline | DisplayValue::Contents)
                    })
                }),
        }
    }

    /// Width of `node`'s containing block.
    fn containing_width(&self, node: NodeId) -> f64 {
        self.containing_block(node)
            .map_or(self.viewport().width, |cb| self.used_width(cb))
    }

    /// Height of `node`'s containing block, when it is definite.
    ///
    /// [§ 10.5](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    /// "If the height of the containing block is not specified explicitly
    /// (i.e., it depends on content height), and this element is not
    /// absolutely positioned, the value computes to 'auto'."
    fn containing_height(&self, node: NodeId, style: &ComputedStyle) -> Option<f64> {
        match self.containing_block(node) {
            None => Some(self.viewport().height),
            Some(cb) if style.position.is_out_of_flow() => Some(self.used_height(cb)),
            Some(cb) => self.definite_height(cb),
        }
    }

    /// Whether `node` or one of its ancestors has `display: none`.
    fn is_display_none(&self, node: NodeId) -> bool {
        std::iter::once(node)
            .chain(self.tree().ancestors(node))
            .any(|id| {
                self.computed_style(id)
                    .is_some_and(|s| s.display == DisplayValue::None)
            })
    }

    fn replaced(&self, node: NodeId) -> Option<ReplacedContent> {
        self.tree().as_element(node).and_then(|e| e.replaced)
    }

    /// Resolve a margin or inset; percentages refer to the containing block
    /// width, 'auto' is 0.
    fn resolve_edge(&self, value: AutoLength, cb_width: f64) -> f64 {
        match value {
            AutoLength::Auto => 0.0,
            AutoLength::Length(len) => len.resolve(cb_width, self.viewport()),
        }
    }

    /// Resolve a length that may refer to an indefinite basis.
    fn resolve_against(&self, len: LengthValue, basis: Option<f64>) -> Option<f64> {
        match (len, basis) {
            (LengthValue::Percent(_), None) => None,
            (len, basis) => Some(len.resolve(basis.unwrap_or(0.0), self.viewport())),
        }
    }

    fn min_max_width(&self, style: &ComputedStyle, cb_width: f64) -> (f64, Option<f64>) {
        let min = self.resolve_edge(style.min_width, cb_width);
        let max = match style.max_width {
            MaxLength::None => None,
            MaxLength::Length(len) => Some(len.resolve(cb_width, self.viewport()).max(min)),
        };
        (min, max)
    }

    fn min_max_height(&self, style: &ComputedStyle, cb_height: Option<f64>) -> (f64, Option<f64>) {
        let min = match style.min_height {
            AutoLength::Auto => 0.0,
            AutoLength::Length(len) => self.resolve_against(len, cb_height).unwrap_or(0.0),
        };
        let max = match style.max_height {
            MaxLength::None => None,
            MaxLength::Length(len) => self.resolve_against(len, cb_height).map(|m| m.max(min)),
        };
        (min, max)
    }

    /// [§ 10.3.2 Inline, replaced elements](https://www.w3.org/TR/CSS2/visudet.html#inline-replaced-width)
    /// and [§ 10.6.2](https://www.w3.org/TR/CSS2/visudet.html#inline-replaced-height).
    ///
    /// Block-level (§ 10.3.4) and absolutely positioned (§ 10.3.8, § 10.6.5)
    /// replaced elements use the same rules.
    fn replaced_size(&self, node: NodeId, style: &ComputedStyle, content: ReplacedContent) -> Size {
        let cb_width = self.containing_width(node);
        let cb_height = self.containing_height(node, style);
        let (min_w, max_w) = self.min_max_width(style, cb_width);
        let (min_h, max_h) = self.min_max_height(style, cb_height);

        let width = match style.width {
            AutoLength::Auto => None,
            AutoLength::Length(len) => Some(len.resolve(cb_width, self.viewport())),
        };
        // A percentage height against an indefinite containing block
        // behaves as 'auto'.
        let height = match style.height {
            AutoLength::Auto => None,
            AutoLength::Length(len) => self.resolve_against(len, cb_height),
        };
        let ratio = content.aspect_ratio();

        match (width, height) {
            // "If 'height' and 'width' both have computed values of 'auto' and
            // the element also has an intrinsic width, then that intrinsic
            // width is the used value of 'width'."
            (None, None) => clamp_preserving_ratio(
                Size::new(content.natural_width, content.natural_height),
                Size::new(min_w, min_h),
                Size::new(
                    max_w.unwrap_or(f64::INFINITY),
                    max_h.unwrap_or(f64::INFINITY),
                ),
            ),
            // "if 'width' has a computed value of 'auto', and the element has
            // an intrinsic ratio ... the used value of 'width' is:
            // (used height) * (intrinsic ratio)"
            (None, Some(h)) => {
                let h = clamp(h, min_h, max_h);
                let w = ratio.map_or(content.natural_width, |r| h * r);
                Size::new(clamp(w, min_w, max_w), h)
            }
            // "if 'height' has a computed value of 'auto', and the element has
            // an intrinsic ratio then the used value of 'height' is:
            // (used width) / (intrinsic ratio)"
            (Some(w), None) => {
                let w = clamp(w, min_w, max_w);
                let h = ratio.map_or(content.natural_height, |r| w / r);
                Size::new(w, clamp(h, min_h, max_h))
            }
            (Some(w), Some(h)) => Size::new(clamp(w, min_w, max_w), clamp(h, min_h, max_h)),
        }
    }

    /// Preferred width of a box when laid out without a width constraint.
    ///
    /// [§ 10.3.5](https://www.w3.org/TR/CSS2/visudet.html#float-width)
    /// "the shrink-to-fit width is: min(max(preferred minimum width,
    /// available width), preferred width)". Without line breaking the
    /// preferred widths coincide, so only the preferred width is computed.
    /// Percentages are treated as 'auto'.
    fn intrinsic_width(&self, node: NodeId) -> f64 {
        let Some(style) = self.computed_style(node) else {
            return 0.0;
        };
        if style.display == DisplayValue::None {
            return 0.0;
        }
        let fixed = |value: AutoLength| match value {
            AutoLength::Length(len) if !len.is_percent() => Some(len.resolve(0.0, self.viewport())),
            _ => None,
        };
        if let Some(width) = fixed(style.width) {
            return width;
        }
        if let Some(content) = self.replaced(node) {
            return content.natural_width;
        }
        self.tree()
            .children(node)
            .iter()
            .filter(|&&child| {
                self.computed_style(child)
                    .is_some_and(|s| !s.position.is_out_of_flow())
            })
            .map(|&child| {
                let margins = self
                    .computed_style(child)
                    .map_or(0.0, |s| {
                        fixed(s.margin_left).unwrap_or(0.0) + fixed(s.margin_right).unwrap_or(0.0)
                    });
                self.intrinsic_width(child) + margins
            })
            .fold(0.0, f64::max)
    }

    /// Used content width of `node` in CSS pixels.
    #[must_use]
    pub fn used_width(&self, node: NodeId) -> f64 {
        let Some(style) = self.computed_style(node) else {
            // The document node: the initial containing block.
            return self.viewport().width;
        };
        if style.display.generates_no_box() || self.is_display_none(node) {
            return 0.0;
        }
        if let Some(content) = self.replaced(node) {
            return self.replaced_size(node, &style, content).width;
        }

        let cb_width = self.containing_width(node);
        let (min, max) = self.min_max_width(&style, cb_width);
        let margins = self.resolve_edge(style.margin_left, cb_width)
            + self.resolve_edge(style.margin_right, cb_width);

        let width = match style.width {
            AutoLength::Length(len) => len.resolve(cb_width, self.viewport()),
            // [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
            // "'left' and 'right' are not 'auto' and 'width' is 'auto', then
            // solve for 'width'"
            AutoLength::Auto
                if style.position.is_out_of_flow()
                    && !style.left.is_auto()
                    && !style.right.is_auto() =>
            {
                (cb_width
                    - self.resolve_edge(style.left, cb_width)
                    - self.resolve_edge(style.right, cb_width)
                    - margins)
                    .max(0.0)
            }
            AutoLength::Auto if style.position.is_out_of_flow() => {
                self.intrinsic_width(node).min(cb_width)
            }
            // [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
            // "'margin-left' + 'border-left-width' + 'padding-left' + 'width'
            // + ... = width of containing block"
            AutoLength::Auto if style.display.is_block_level() => (cb_width - margins).max(0.0),
            AutoLength::Auto => self.intrinsic_width(node).min(cb_width),
        };
        clamp(width, min, max)
    }

    /// Height of `node` if it does not depend on its content.
    ///
    /// [CSS Sizing 3 § 2.1](https://www.w3.org/TR/css-sizing-3/#definite)
    /// "definite size: A size that can be determined without performing
    /// layout; that is, a `<length>`, a size of the initial containing block,
    /// or a `<percentage>` or other formula ... that is resolved solely
    /// against definite sizes."
    #[must_use]
    pub fn definite_height(&self, node: NodeId) -> Option<f64> {
        let Some(style) = self.computed_style(node) else {
            return Some(self.viewport().height);
        };
        if self.is_display_none(node) {
            return Some(0.0);
        }
        if let Some(content) = self.replaced(node) {
            return Some(self.replaced_size(node, &style, content).height);
        }
        let cb_height = self.containing_height(node, &style);
        let (min, max) = self.min_max_height(&style, cb_height);
        let height = match style.height {
            AutoLength::Length(len) => self.resolve_against(len, cb_height),
            // [§ 10.6.4](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height)
            // "'height' is 'auto', 'top' and 'bottom' are not 'auto', then
            // ... solve for 'height'"
            AutoLength::Auto
                if style.position.is_out_of_flow()
                    && !style.top.is_auto()
                    && !style.bottom.is_auto() =>
            {
                let cb_width = self.containing_width(node);
                cb_height.map(|cb| {
                    (cb - self.resolve_edge(style.top, cb_width)
                        - self.resolve_edge(style.bottom, cb_width)
                        - self.resolve_edge(style.margin_top, cb_width)
                        - self.resolve_edge(style.margin_bottom, cb_width))
                    .max(0.0)
                })
            }
            AutoLength::Auto => None,
        }?;
        Some(clamp(height, min, max))
    }

    /// Used content height of `node` in CSS pixels.
    ///
    /// [§ 10.6.3](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    /// "If 'height' is 'auto', the height depends on whether the element has
    /// any block-level children... the height is the distance between the
    /// top content edge and the bottom edge of the bottom margin of its last
    /// in-flow child". Every in-flow child is stacked here, inline ones
    /// included.
    #[must_use]
    pub fn used_height(&self, node: NodeId) -> f64 {
        if let Some(height) = self.definite_height(node) {
            return height;
        }
        let Some(style) = self.computed_style(node) else {
            return self.viewport().height;
        };
        if style.display == DisplayValue::Contents {
            return 0.0;
        }
        let content: f64 = self
            .tree()
            .children(node)
            .iter()
            .filter_map(|&child| {
                let child_style = self.computed_style(child)?;
                if child_style.position.is_out_of_flow() {
                    return None;
                }
                let cb_width = self.containing_width(child);
                Some(
                    self.used_height(child)
                        + self.resolve_edge(child_style.margin_top, cb_width)
                        + self.resolve_edge(child_style.margin_bottom, cb_width),
                )
            })
            .sum();
        let (min, max) = self.min_max_height(&style, self.containing_height(node, &style));
        clamp(content, min, max)
    }

    /// Used content box size of `node`, unrounded.
    #[must_use]
    pub fn used_size(&self, node: NodeId) -> Size {
        Size::new(self.used_width(node), self.used_height(node))
    }

    /// Whether `node` reports zero client dimensions regardless of its size.
    ///
    /// [CSSOM View § 6 `clientWidth`](https://drafts.csswg.org/cssom-view/#dom-element-clientwidth)
    /// "If the element has no associated CSS layout box or if the CSS layout
    /// box is inline, return zero."
    fn has_no_client_box(&self, node: NodeId) -> bool {
        let Some(style) = self.computed_style(node) else {
            return true;
        };
        style.display.generates_no_box()
            || self.is_display_none(node)
            || (style.display == DisplayValue::Inline && self.replaced(node).is_none())
    }

    /// [`Element.clientWidth`](https://drafts.csswg.org/cssom-view/#dom-element-clientwidth),
    /// rounded to whole pixels.
    #[must_use]
    pub fn client_width(&self, node: NodeId) -> f64 {
        if self.has_no_client_box(node) {
            return 0.0;
        }
        self.used_width(node).round()
    }

    /// [`Element.clientHeight`](https://drafts.csswg.org/cssom-view/#dom-element-clientheight),
    /// rounded to whole pixels.
    #[must_use]
    pub fn client_height(&self, node: NodeId) -> f64 {
        if self.has_no_client_box(node) {
            return 0.0;
        }
        self.used_height(node).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamp_applies_max_then_min() {
        assert!(approx(clamp(50.0, 10.0, Some(40.0)), 40.0));
        assert!(approx(clamp(5.0, 10.0, Some(40.0)), 10.0));
        assert!(approx(clamp(5.0, 0.0, None), 5.0));
    }

    #[test]
    fn ratio_table_scales_down_to_max_width() {
        let size = clamp_preserving_ratio(
            Size::new(400.0, 200.0),
            Size::new(0.0, 0.0),
            Size::new(100.0, f64::INFINITY),
        );
        assert!(approx(size.width, 100.0));
        assert!(approx(size.height, 50.0));
    }

    #[test]
    fn ratio_table_picks_tighter_axis() {
        let size = clamp_preserving_ratio(
            Size::new(400.0, 200.0),
            Size::new(0.0, 0.0),
            Size::new(300.0, 100.0),
        );
        assert!(approx(size.width, 200.0));
        assert!(approx(size.height, 100.0));
    }

    #[test]
    fn ratio_table_scales_up_to_min_height() {
        let size = clamp_preserving_ratio(
            Size::new(20.0, 10.0),
            Size::new(0.0, 40.0),
            Size::new(f64::INFINITY, f64::INFINITY),
        );
        assert!(approx(size.width, 80.0));
        assert!(approx(size.height, 40.0));
    }
}
