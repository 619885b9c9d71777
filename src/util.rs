use std::sync::{Mutex, MutexGuard};

/// locks the passed mutex, recovering the value and clearing the poison if a
/// previous holder panicked
pub fn lock_mutex<'a, T>(mutex: &'a Mutex<T>, name: &str) -> MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("The {name} mutex was poisoned! Recovering...");
            mutex.clear_poison();
            poisoned.into_inner()
        }
    }
}

/// formats a raw byte count the way the dashboard displays sizes, e.g.
/// `2_400_000` turns into `2.4 MB`. Uses decimal units and drops the decimal
/// when it would be `.0`
pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{bytes} B");
    }
    let mut scaled = bytes as f64;
    let mut unit = "B";
    for next in ["KB", "MB", "GB", "TB"] {
        scaled /= 1000.0;
        unit = next;
        // a value that would display as 1000 belongs to the next unit
        if (scaled * 10.0).round() < 10_000.0 {
            break;
        }
    }
    let rounded = (scaled * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {unit}", rounded as u64)
    } else {
        format!("{rounded:.1} {unit}")
    }
}

/// how full the account is, as a whole percent
pub fn storage_percent(used: u64, limit: u64) -> u8 {
    if limit == 0 {
        return 0;
    }
    ((used as f64 / limit as f64) * 100.0).round() as u8
}
