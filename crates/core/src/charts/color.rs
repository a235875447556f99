//! Deterministic category colors.
//!
//! Well-known categories use a fixed palette; every other name gets a hue
//! derived from a 32-bit rolling hash of its UTF-16 code units, so a name
//! maps to the same color in every session.

/// Color for an absent name and for "Uncategorized".
pub const FALLBACK_COLOR: &str = "#607d8b";

const PALETTE: [(&str, &str); 6] = [
    ("Electronics", "#3f51b5"),
    ("Clothing", "#f50057"),
    ("Home", "#4caf50"),
    ("Books", "#ff9800"),
    ("Other", "#9c27b0"),
    ("Uncategorized", FALLBACK_COLOR),
];

/// Rolling hash `h = c + ((h << 5) - h)` with 32-bit signed wraparound.
#[must_use]
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Hue in `[0, 360)` for a name outside the palette.
#[must_use]
pub fn hash_hue(name: &str) -> u16 {
    // unsigned_abs keeps i32::MIN at 2^31 instead of overflowing
    let hue = string_hash(name).unsigned_abs() % 360;
    u16::try_from(hue).unwrap_or_default()
}

/// Fill color for a category slice.
#[must_use]
pub fn category_color(name: Option<&str>) -> String {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return FALLBACK_COLOR.to_string();
    };

    PALETTE
        .iter()
        .find(|(known, _)| *known == name)
        .map_or_else(
            || format!("hsl({}, 70%, 50%)", hash_hue(name)),
            |(_, color)| (*color).to_string(),
        )
}
