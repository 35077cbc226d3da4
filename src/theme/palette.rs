//! Color constants and font size tokens for consistent UI theming.

use bevy::prelude::*;

// === Text Colors ===

/// Hover prompt text color (white).
pub const PROMPT_TEXT: Color = Color::WHITE;

/// Donation amount field text color. The field background is light,
/// so both the typed value and the placeholder render black.
pub const AMOUNT_TEXT: Color = Color::BLACK;

// === UI Backgrounds ===

/// Small tooltip backing for the hover prompt.
pub const PROMPT_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Donation amount entry field backing (near-white).
pub const AMOUNT_FIELD_BACKGROUND: Color = Color::srgb(0.92, 0.92, 0.92);

// === Sprite Button Tints ===

pub const SPRITE_NONE: Color = Color::WHITE;
pub const SPRITE_HOVERED: Color = Color::srgb(0.85, 0.85, 0.85);
pub const SPRITE_PRESSED: Color = Color::srgb(0.65, 0.65, 0.65);

// === Venue Colors ===

pub const BACKGROUND: Color = Color::srgb(0.1, 0.1, 0.12);
pub const STAGE: Color = Color::srgb(0.35, 0.24, 0.18);

// === Font Size Tokens ===

pub const FONT_SIZE_PROMPT: f32 = 24.0;
pub const FONT_SIZE_AMOUNT: f32 = 25.0;
