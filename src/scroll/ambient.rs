//! Opt-in wheel scrolling for `Overflow::scroll` containers that yields to
//! value scrolling.
//!
//! Hosts that already scroll their UI from the wheel should leave
//! [`HoverScrollPlugin`] out and check [`ScrollSuppression::claim`] in their
//! own system instead.

use bevy::ecs::relationship::Relationship;
use bevy::input::mouse::MouseWheel;
use bevy::picking::hover::HoverMap;
use bevy::prelude::*;

use super::input::{PIXELS_PER_LINE, wheel_notches};
use super::plugin::ScrollFieldSet;
use super::suppress::ScrollSuppression;

/// Scrolls the hovered `Overflow::scroll` container with the mouse wheel,
/// except while a value scroll claims the gesture.
pub struct HoverScrollPlugin;

impl Plugin for HoverScrollPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MouseWheel>().add_systems(
            Update,
            scroll_hovered_containers.in_set(ScrollFieldSet::Ambient),
        );
    }
}

/// Scrolls the nearest scrollable ancestor of each hovered node.
///
/// Skips the frame entirely while any handler claims the gesture.
pub(super) fn scroll_hovered_containers(
    mut mouse_wheel_reader: MessageReader<MouseWheel>,
    hover_map: Option<Res<HoverMap>>,
    claims: Query<&ScrollSuppression>,
    parents: Query<&ChildOf>,
    mut scrollables: Query<(&mut ScrollPosition, &Node, &ComputedNode)>,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_wheel_reader.read() {
        delta.x += wheel_notches(event.unit, event.x);
        delta.y += wheel_notches(event.unit, event.y);
    }
    // Notches to pixels, inverted for natural scrolling.
    delta *= -PIXELS_PER_LINE;

    if delta == Vec2::ZERO || claims.iter().any(ScrollSuppression::claims) {
        return;
    }
    let Some(hover_map) = hover_map else {
        return;
    };

    for pointer_map in hover_map.values() {
        for &hovered_entity in pointer_map.keys() {
            let mut current = hovered_entity;
            loop {
                if let Ok((mut scroll_pos, node, computed)) = scrollables.get_mut(current)
                    && scrolls_on_any_axis(node, delta)
                {
                    if node.overflow.y == OverflowAxis::Scroll && delta.y != 0.0 {
                        let max_y = (computed.content_size().y - computed.size().y).max(0.0)
                            * computed.inverse_scale_factor();
                        scroll_pos.y = (scroll_pos.y + delta.y).clamp(0.0, max_y);
                    }
                    if node.overflow.x == OverflowAxis::Scroll && delta.x != 0.0 {
                        let max_x = (computed.content_size().x - computed.size().x).max(0.0)
                            * computed.inverse_scale_factor();
                        scroll_pos.x = (scroll_pos.x + delta.x).clamp(0.0, max_x);
                    }
                    return;
                }

                match parents.get(current) {
                    Ok(child_of) => current = child_of.get(),
                    Err(_) => break,
                }
            }
        }
    }
}

/// Whether `node` can take any part of `delta`.
fn scrolls_on_any_axis(node: &Node, delta: Vec2) -> bool {
    (node.overflow.y == OverflowAxis::Scroll && delta.y != 0.0)
        || (node.overflow.x == OverflowAxis::Scroll && delta.x != 0.0)
}
