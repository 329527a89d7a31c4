use super::MonthlyData;

/// Month titles, spelled as the dashboard has always shown them.
pub const MONTH_NAMES: [&str; 12] = [
    "Janurary",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Title for a month key.
///
/// Numeric keys are quantized from the `[1, 12]` domain onto the twelve names,
/// clamping out-of-range values to the ends. Other keys are shown as-is.
pub fn month_display(key: &str) -> String {
    let Ok(month) = key.trim().parse::<f64>() else {
        return key.to_string();
    };
    if !month.is_finite() {
        return key.to_string();
    }
    let n = MONTH_NAMES.len() as f64;
    let bucket = ((month - 1.0) * n / 11.0).floor().clamp(0.0, n - 1.0);
    MONTH_NAMES[bucket as usize].to_string()
}

/// Month keys in script-object order: integer keys ascending, then the rest
/// as inserted.
pub fn ordered_months(data: &MonthlyData) -> Vec<&str> {
    let mut indexed: Vec<(u32, &str)> = Vec::new();
    let mut named: Vec<&str> = Vec::new();
    for key in data.keys() {
        match array_index(key) {
            Some(index) => indexed.push((index, key.as_str())),
            None => named.push(key.as_str()),
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, key)| key).chain(named).collect()
}

fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}
