use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Group, Rectangle, Title};

use stowage::entities::PackingSession;

/// Options for drawing a packed session
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct SvgDrawOptions {
    ///Opacity of the item fills
    pub fill_opacity: f32,
    ///Multiplier for all stroke widths
    pub stroke_width_multiplier: f32,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            fill_opacity: 0.7,
            stroke_width_multiplier: 1.0,
        }
    }
}

/// Orthographic projection of a packed container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// The x–z plane, seen from above.
    Top,
    /// The x–y plane, seen from the side, floor at the bottom.
    Side,
}

impl View {
    pub fn suffix(&self) -> &'static str {
        match self {
            View::Top => "top",
            View::Side => "side",
        }
    }
}

/// Renders one projection of the packed session. Items are drawn in
/// placement order, filled with their display color.
pub fn session_to_svg(session: &PackingSession, view: View, options: SvgDrawOptions) -> Document {
    let dims = session.container.dims;
    let (canvas_w, canvas_h) = match view {
        View::Top => (dims.length, dims.width),
        View::Side => (dims.length, dims.height),
    };
    let margin = u64::max(canvas_w, canvas_h) as f64 * 0.05;
    let stroke_width =
        u64::min(canvas_w, canvas_h) as f64 * 0.002 * options.stroke_width_multiplier as f64;

    let container_group = Group::new()
        .set("id", format!("container_{}", session.container.id))
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas_w as f64)
                .set("height", canvas_h as f64)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "container, id: {}, dims: {}",
            session.container.id, dims
        )));

    let mut items_group = Group::new().set("id", "placed_items");
    for pi in session.placed_items() {
        let od = pi.oriented_dims();
        let (u, v, w, h) = match view {
            View::Top => (pi.position.x(), pi.position.z(), od.length, od.width),
            // svg's y axis points down; flip so the container floor is at the bottom
            View::Side => (
                pi.position.x(),
                dims.height - (pi.position.y() + od.height),
                od.length,
                od.height,
            ),
        };
        items_group = items_group.add(
            Rectangle::new()
                .set("x", u as f64)
                .set("y", v as f64)
                .set("width", w as f64)
                .set("height", h as f64)
                .set("fill", pi.item.color.as_str())
                .set("fill-opacity", options.fill_opacity)
                .set("stroke", "black")
                .set("stroke-width", stroke_width)
                .add(Title::new(format!(
                    "{} ({}), placed at {}",
                    pi.item.name, pi.item.id, pi.position
                ))),
        );
    }

    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                canvas_w as f64 + 2.0 * margin,
                canvas_h as f64 + 2.0 * margin,
            ),
        )
        .add(container_group)
        .add(items_group)
}
