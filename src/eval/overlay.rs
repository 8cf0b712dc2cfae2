use crate::assets::color::ColorDef;
use crate::config::OverlayTheme;
use crate::eval::compositor::{Layer, LayerRole, Primitive, RectPrim, TextPrim};
use crate::foundation::core::{Canvas, Point, Rect, Vec2};
use crate::scene::model::NewsOverlayDef;

const WEIGHT_REGULAR: u16 = 400;
const WEIGHT_BOLD: u16 = 700;

const LEFT_MIDDLE: Vec2 = Vec2::new(0.0, 0.5);
const CENTER: Vec2 = Vec2::new(0.5, 0.5);

fn rect(role: LayerRole, rect: Rect, fill: ColorDef) -> Layer {
    Layer {
        role,
        primitive: Primitive::Rect(RectPrim { rect, fill }),
    }
}

struct TextSpec<'a> {
    text: &'a str,
    position: Point,
    pivot: Vec2,
    font_size: f64,
    font_weight: u16,
    color: ColorDef,
    max_width: f64,
}

fn text(role: LayerRole, spec: TextSpec<'_>) -> Layer {
    Layer {
        role,
        primitive: Primitive::Text(TextPrim {
            text: spec.text.to_owned(),
            position: spec.position,
            pivot: spec.pivot,
            font_size: spec.font_size,
            font_weight: spec.font_weight,
            color: spec.color,
            max_width: Some(spec.max_width.max(0.0)),
        }),
    }
}

/// Centered band with centered text; shared by the overlay subtitle and the caption box.
fn subtitle_band(role: LayerRole, band: Rect, subtitle: &str, theme: &OverlayTheme) -> [Layer; 2] {
    let font_size = band.height() * theme.layout.subtitle_font;
    [
        rect(role, band, theme.subtitle_fill),
        text(
            role,
            TextSpec {
                text: subtitle,
                position: band.center(),
                pivot: CENTER,
                font_size,
                font_weight: WEIGHT_BOLD,
                color: theme.subtitle_text,
                max_width: band.width() - font_size,
            },
        ),
    ]
}

/// Broadcast chrome for an overlay-mode scene, back to front.
///
/// The channel badge is always present. The subtitle band appears when `subtitle` is set. The
/// bottom banner stack (breaking label, headline bar, sub-headline bar) appears only when
/// `show_banner` is set and the headline is non-blank; its parts are bottom-anchored so the
/// stack hugs the lower edge whatever subset is shown.
pub fn resolve_overlay(
    overlay: &NewsOverlayDef,
    subtitle: Option<&str>,
    canvas: Canvas,
    theme: &OverlayTheme,
) -> Vec<Layer> {
    let (w, h) = (canvas.w(), canvas.h());
    let l = &theme.layout;
    let mut layers = Vec::with_capacity(9);

    let badge = Rect::from_origin_size(
        (l.badge_x * w, l.badge_y * h),
        (l.badge_w * w, l.badge_h * h),
    );
    let channel = overlay.channel_name().unwrap_or(theme.channel_name.as_str());
    layers.push(rect(LayerRole::OverlayBadge, badge, theme.badge_fill));
    layers.push(text(
        LayerRole::OverlayBadge,
        TextSpec {
            text: channel,
            position: Point::new(l.badge_text_x * w, badge.center().y),
            pivot: LEFT_MIDDLE,
            font_size: badge.height() * l.badge_font,
            font_weight: WEIGHT_BOLD,
            color: theme.badge_text,
            max_width: badge.x1 - l.badge_text_x * w,
        },
    ));

    if let Some(subtitle) = subtitle {
        let band = Rect::from_center_size(
            (w * 0.5, (l.subtitle_y + l.subtitle_h * 0.5) * h),
            (l.subtitle_w * w, l.subtitle_h * h),
        );
        layers.extend(subtitle_band(LayerRole::OverlaySubtitle, band, subtitle, theme));
    }

    let Some(headline) = overlay.headline().filter(|_| overlay.show_banner) else {
        if overlay.show_banner {
            tracing::debug!("overlay headline is blank, banner stack suppressed");
        }
        return layers;
    };

    let sub_headline = overlay.sub_headline();
    let breaking_h = if overlay.is_breaking { l.breaking_h * h } else { 0.0 };
    let headline_h = l.headline_h * h;
    let sub_h = if sub_headline.is_some() { l.sub_headline_h * h } else { 0.0 };
    let text_x = l.headline_text_x * w;
    let mut y = h - (breaking_h + headline_h + sub_h);

    if overlay.is_breaking {
        let label = Rect::new(0.0, y, l.breaking_w * w, y + breaking_h);
        layers.push(rect(LayerRole::OverlayBreaking, label, theme.breaking_fill));
        layers.push(text(
            LayerRole::OverlayBreaking,
            TextSpec {
                text: &theme.breaking_label,
                position: Point::new(l.breaking_text_x * w, label.center().y),
                pivot: LEFT_MIDDLE,
                font_size: breaking_h * l.breaking_font,
                font_weight: WEIGHT_BOLD,
                color: theme.breaking_text,
                max_width: label.x1 - l.breaking_text_x * w,
            },
        ));
        y += breaking_h;
    }

    let bar = Rect::new(0.0, y, w, y + headline_h);
    let border = l.headline_border * w;
    layers.push(rect(LayerRole::OverlayHeadline, bar, theme.headline_frame));
    layers.push(rect(
        LayerRole::OverlayHeadline,
        bar.inset(-border),
        theme.headline_fill,
    ));
    layers.push(text(
        LayerRole::OverlayHeadline,
        TextSpec {
            text: headline,
            position: Point::new(text_x, bar.center().y),
            pivot: LEFT_MIDDLE,
            font_size: headline_h * l.headline_font,
            font_weight: WEIGHT_BOLD,
            color: theme.headline_text,
            max_width: w - 2.0 * text_x,
        },
    ));
    y += headline_h;

    if let Some(sub_headline) = sub_headline {
        let bar = Rect::new(0.0, y, w, y + sub_h);
        layers.push(rect(LayerRole::OverlaySubHeadline, bar, theme.sub_headline_fill));
        layers.push(text(
            LayerRole::OverlaySubHeadline,
            TextSpec {
                text: sub_headline,
                position: Point::new(text_x, bar.center().y),
                pivot: LEFT_MIDDLE,
                font_size: sub_h * l.sub_headline_font,
                font_weight: WEIGHT_REGULAR,
                color: theme.sub_headline_text,
                max_width: w - 2.0 * text_x,
            },
        ));
    }

    layers
}

/// Standalone caption box for an element-mode scene: bottom-centered band with the subtitle.
pub fn resolve_caption(subtitle: &str, canvas: Canvas, theme: &OverlayTheme) -> [Layer; 2] {
    let (w, h) = (canvas.w(), canvas.h());
    let l = &theme.layout;
    let box_h = l.caption_h * h;
    let bottom = h - l.caption_bottom * h;
    let band = Rect::from_center_size((w * 0.5, bottom - box_h * 0.5), (l.caption_w * w, box_h));
    subtitle_band(LayerRole::Caption, band, subtitle, theme)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/overlay.rs"]
mod tests;
