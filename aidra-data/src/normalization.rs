use aidra_utils::stats::finite_min_max;
use aidra_zone::ZoneTable;
use log::warn;

/// Min-max scale the named columns of a copy of `table` into [0, 1].
///
/// Absent columns are skipped with a warning. A column whose maximum equals
/// its minimum (constant or single-row) becomes all zeros. Scaled values are
/// clamped to [0, 1]. Never fails.
///
/// Bounds come from the finite values only. Infinities clamp to 0 or 1 and
/// NaN becomes 0, so the result is always finite.
pub fn min_max_normalize(table: &ZoneTable, columns: &[&str]) -> ZoneTable {
    let mut out = table.clone();
    for &name in columns {
        let Some(values) = table.values(name) else {
            warn!("Column '{}' not found for normalization, skipping", name);
            continue;
        };
        if values.iter().any(|v| !v.is_finite()) {
            warn!("Column '{}' has non-finite values", name);
        }
        let Some((lo, hi)) = finite_min_max(&values).filter(|(lo, hi)| hi > lo) else {
            if !values.is_empty() {
                warn!("Column '{}' has zero range, normalizing to 0", name);
            }
            out.map_values(name, |_| 0.0);
            continue;
        };

        // Halve both bounds when the full range overflows.
        let half = if (hi - lo).is_finite() { 1.0 } else { 0.5 };
        let (lo, range) = (lo * half, hi * half - lo * half);
        out.map_values(name, |v| {
            if v.is_nan() {
                0.0
            } else {
                ((v * half - lo) / range).clamp(0.0, 1.0)
            }
        });
    }
    out
}
