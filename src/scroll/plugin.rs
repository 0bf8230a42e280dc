//! Plugin wiring: lifecycle observers and the per-frame scroll systems.

use bevy::ecs::observer::On;
use bevy::input::mouse::MouseWheel;
use bevy::input_focus::InputFocus;
use bevy::prelude::*;

use super::arbiter::{LastTouchSource, is_authoritative, record_touch_source};
use super::config::ScrollConfig;
use super::host::{
    EditBegin, EditEnd, EulerAxisEditors, FieldScrolled, InteractionHandler, InteractionSpace,
    ScrollableField,
};
use super::input::{InputMode, ModifierState, sample_axis, wheel_lines};
use super::numeric::NumericKind;
use super::pipeline::{ScrollRequest, scroll_field};
use super::state::EditingSession;
use super::suppress::{ScrollSuppression, clear_all, consume_scroll_suppression};

/// System sets for ordering host systems around value scrolling.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollFieldSet {
    /// Consume last frame's suppression and zero claimed UI axes.
    Suppress,
    /// Sync which Euler axis editor has focus.
    Track,
    /// Sample input and apply deltas.
    Apply,
    /// General UI wheel scrolling, skipped while a value scroll claims it.
    /// Empty unless the host adds [`HoverScrollPlugin`](super::HoverScrollPlugin).
    Ambient,
}

/// Plugin that scrolls the value of the field being edited.
pub struct ScrollFieldsPlugin;

impl Plugin for ScrollFieldsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MouseWheel>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<InputFocus>()
            // State resources
            .init_resource::<ScrollConfig>()
            .init_resource::<EditingSession>()
            .init_resource::<LastTouchSource>()
            .init_resource::<InputMode>()
            // Lifecycle
            .add_observer(begin_editing)
            .add_observer(end_editing)
            .add_observer(record_touch_source)
            // System ordering
            .configure_sets(
                Update,
                (
                    ScrollFieldSet::Suppress,
                    ScrollFieldSet::Track,
                    ScrollFieldSet::Apply,
                    ScrollFieldSet::Ambient,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (end_removed_fields, consume_scroll_suppression)
                        .chain()
                        .in_set(ScrollFieldSet::Suppress),
                    track_axis_focus.in_set(ScrollFieldSet::Track),
                    scroll_edited_value.in_set(ScrollFieldSet::Apply),
                ),
            );

        debug!("Value scrolling enabled for text fields");
    }
}

fn begin_editing(
    begin: On<EditBegin>,
    fields: Query<&ScrollableField>,
    mut session: ResMut<EditingSession>,
    mut suppressions: Query<&mut ScrollSuppression>,
) {
    clear_all(&mut suppressions);

    match fields.get(begin.field) {
        Ok(field) => {
            session.begin(begin.field, &field.value);
            debug!(
                "Editing {:?} ({}, kind {:?})",
                begin.field,
                field.value.type_name(),
                session.kind()
            );
        }
        // Not scrollable, but it still takes over from the previous field.
        Err(_) => session.clear(),
    }
}

fn end_editing(
    end: On<EditEnd>,
    mut session: ResMut<EditingSession>,
    mut suppressions: Query<&mut ScrollSuppression>,
) {
    if session.end(end.field) {
        clear_all(&mut suppressions);
        debug!("Finished editing {:?}", end.field);
    }
}

/// Ends the session when its field entity goes away.
fn end_removed_fields(
    mut removed: RemovedComponents<ScrollableField>,
    mut session: ResMut<EditingSession>,
    mut suppressions: Query<&mut ScrollSuppression>,
) {
    for field in removed.read() {
        if session.end(field) {
            clear_all(&mut suppressions);
            debug!("Edited field {:?} was removed", field);
        }
    }
}

fn track_axis_focus(
    focus: Res<InputFocus>,
    mut session: ResMut<EditingSession>,
    editors: Query<&EulerAxisEditors>,
) {
    let Some(field) = session.active_field() else {
        return;
    };
    let axis = editors
        .get(field)
        .ok()
        .and_then(|editors| editors.focused_axis(focus.get()));
    if session.focused_axis() != axis {
        session.set_focused_axis(axis);
    }
}

/// Runs the scroll pipeline for the authoritative handler, if any.
fn scroll_edited_value(
    config: Res<ScrollConfig>,
    mode: Res<InputMode>,
    keys: Res<ButtonInput<KeyCode>>,
    focus: Res<InputFocus>,
    last_touch: Res<LastTouchSource>,
    mut wheel: MessageReader<MouseWheel>,
    mut session: ResMut<EditingSession>,
    mut fields: Query<(
        &mut ScrollableField,
        Option<&EulerAxisEditors>,
        Option<&InteractionSpace>,
    )>,
    mut handlers: Query<(
        &InteractionHandler,
        &mut ScrollSuppression,
        Option<&InteractionSpace>,
    )>,
    mut texts: Query<&mut Text>,
    children: Query<&Children>,
    mut commands: Commands,
) {
    // Drain every frame so stale wheel input never leaks into a later session.
    let wheel = wheel_lines(wheel.read());

    if !config.enabled {
        return;
    }
    if let Err(err) = config.validate() {
        warn_once!("Value scrolling is off: {err}");
        return;
    }

    let Some(field) = session.active_field() else {
        return;
    };
    let Ok((mut target, editors, field_space)) = fields.get_mut(field) else {
        return;
    };
    let field_space = field_space.copied().unwrap_or_default();

    // The editor that must hold text focus, and whose text gets refreshed.
    let text_editor = match (session.kind(), editors) {
        (Some(NumericKind::QuaternionEuler), Some(editors)) => {
            match session.focused_axis() {
                Some(axis) => editors.editor(axis),
                None => return,
            }
        }
        (Some(NumericKind::QuaternionEuler), None) | (None, _) => return,
        (Some(_), _) => field,
    };
    if focus.get() != Some(text_editor) {
        return;
    }

    let modifiers = ModifierState::from_keys(&keys);

    for (handler, mut suppression, handler_space) in &mut handlers {
        if handler_space.copied().unwrap_or_default() != field_space {
            continue;
        }
        if !is_authoritative(handler, last_touch.0) {
            continue;
        }
        let Some(axis) = sample_axis(*mode, wheel, handler) else {
            continue;
        };

        let request = ScrollRequest {
            field,
            value: target.value,
            axis,
            mode: *mode,
            modifiers,
        };
        if config.debug_logging {
            debug!(
                "Scrolling {} field {:?}: axis {}, current {}",
                target.value.type_name(),
                field,
                axis,
                target.value
            );
        }

        match scroll_field(&mut session, &request, &config) {
            Ok(Some(outcome)) => {
                let previous = target.value;
                target.value = outcome.value;
                refresh_text(text_editor, &outcome.text, &mut texts, &children);
                suppression.arm();

                if config.debug_logging {
                    debug!("New value {} (text \"{}\")", outcome.value, outcome.text);
                }
                commands.trigger(FieldScrolled {
                    field,
                    previous,
                    value: outcome.value,
                    delta: outcome.delta,
                });
            }
            Ok(None) => {}
            Err(err) => {
                if config.debug_logging {
                    debug!("Scroll skipped: {err}");
                }
            }
        }

        // One winner per frame, whatever it did.
        break;
    }
}

/// Writes `content` into the editor's `Text`, or into its text children.
fn refresh_text(
    editor: Entity,
    content: &str,
    texts: &mut Query<&mut Text>,
    children: &Query<&Children>,
) {
    if let Ok(mut text) = texts.get_mut(editor) {
        text.0 = content.to_string();
        return;
    }
    if let Ok(children) = children.get(editor) {
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                text.0 = content.to_string();
            }
        }
    }
}
