const KB: u64 = 1024;

/// Format a byte count as a human-readable string (B, KB, MB, GB, TB)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < KB {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / KB as f64;
    let mut unit = 0;
    while value >= KB as f64 && unit + 1 < UNITS.len() {
        value /= KB as f64;
        unit += 1;
    }

    // GB and above get an extra digit
    if unit >= 2 {
        format!("{:.2} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
