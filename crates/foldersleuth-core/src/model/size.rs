/// Size formatting utilities for frontends.
///
/// The scanner deals only in raw `u64` bytes. Conversion to megabytes,
/// shares of the total, and human-readable strings happen here, at the
/// display boundary.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// Display units, largest first, with the decimals each is shown with.
const UNITS: [(&str, f64, usize); 4] = [
    ("TB", TB, 2),
    ("GB", GB, 2),
    ("MB", MB, 1),
    ("KB", KB, 1),
];

/// Human-readable size in binary units labelled KB/MB/GB/TB.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    UNITS
        .iter()
        .find(|(_, scale, _)| b >= *scale)
        .map(|(unit, scale, decimals)| format!("{:.*} {unit}", *decimals, b / scale))
        .unwrap_or_else(|| format!("{bytes} B"))
}

/// Bytes expressed as (binary) megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MB
}

/// `size` as a percentage of `total`; 0 when the total is 0.
pub fn share_of_total(size: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        size as f64 / total as f64 * 100.0
    }
}

/// File count with a comma every three digits.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
