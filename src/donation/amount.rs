//! Numeric entry for the donation amount field.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use super::jar::TipJar;
use super::{ActiveJar, DonationOverlay};
use crate::GameSet;

/// Longest accepted field text. Twelve characters comfortably covers any
/// sane donation without letting the field overflow its box.
pub const MAX_AMOUNT_LEN: usize = 12;

/// Transient state of the amount field. The placeholder shows through
/// whenever the value is empty; both reset every time a jar is stamped.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct AmountInput {
    pub value: String,
    pub placeholder: String,
}

/// Appends `ch` to the field if it keeps the text a plausible decimal:
/// ASCII digits plus at most one `.`.
pub fn push_amount_char(value: &mut String, ch: char) {
    if value.len() >= MAX_AMOUNT_LEN {
        return;
    }
    match ch {
        '0'..='9' => value.push(ch),
        '.' if !value.contains('.') => value.push(ch),
        _ => {}
    }
}

/// Parses the field as a donation amount. Returns `None` unless the
/// result is a finite, non-negative number.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let parsed: f64 = text.trim().parse().ok()?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// Renders an amount the way the overlay seeds it: whole values without
/// a trailing `.0` (`10`, `25.5`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

/// Stores the field's parsed value as the jar's pending amount. An
/// unparsable field leaves the previous pending amount in place.
pub fn commit(input: &AmountInput, jar: &mut TipJar) {
    if let Some(amount) = parse_amount(&input.value) {
        jar.pending = amount;
    }
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<AmountInput>();
    app.register_type::<AmountInput>();

    app.add_systems(
        Update,
        edit_amount
            .in_set(GameSet::Input)
            .run_if(in_state(DonationOverlay::Open)),
    );
}

/// Keyboard editing while the overlay is open: printable characters are
/// filtered into the field, Backspace deletes, Enter submits to the
/// active jar.
fn edit_amount(
    keys: Res<ButtonInput<KeyCode>>,
    mut kb: MessageReader<KeyboardInput>,
    mut input: ResMut<AmountInput>,
    active: Res<ActiveJar>,
    mut jars: Query<&mut TipJar>,
) {
    for ev in kb.read() {
        if ev.state != ButtonState::Pressed {
            continue;
        }
        let Some(text) = ev.text.as_deref() else {
            continue;
        };
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            push_amount_char(&mut input.value, ch);
        }
    }

    if keys.just_pressed(KeyCode::Backspace) {
        input.value.pop();
    }

    if keys.just_pressed(KeyCode::Enter) {
        let Some(entity) = active.0 else {
            return;
        };
        let Ok(mut jar) = jars.get_mut(entity) else {
            return;
        };
        commit(&input, &mut jar);
        debug!("submitted {:?}, pending now {}", input.value, jar.pending);
    }
}
