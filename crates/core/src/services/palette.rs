//! Deterministic series colors.

/// Assign a display color to an asset identifier.
///
/// The same identifier always yields the same color, within a run and
/// across runs — there is no seed. The hash is intentionally cheap:
/// similar identifiers may land on similar colors, which is acceptable
/// for a chart legend.
///
/// Folds the identifier's UTF-16 code units into a 32-bit accumulator
/// (`h = unit + (h << 5) - h`, wrapping), keeps the low 24 bits, and
/// renders them as `#` plus 6 uppercase hex digits.
#[must_use]
pub fn series_color(id: &str) -> String {
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    format!("#{:06X}", hash & 0x00ff_ffff)
}
