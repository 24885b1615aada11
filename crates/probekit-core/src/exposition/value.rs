//! Sample value normalization and validation.

/// Replace decimal commas with decimal points.
pub fn normalize(value: &str) -> String {
    value.replace(',', ".")
}

/// A value is a float literal optionally followed by an integer timestamp.
pub fn is_numeric(value: &str) -> bool {
    let mut parts = value.split_whitespace();

    let Some(number) = parts.next() else {
        return false;
    };
    if number.parse::<f64>().is_err() {
        return false;
    }

    match (parts.next(), parts.next()) {
        (None, _) => true,
        (Some(ts), None) => ts.parse::<i64>().is_ok(),
        _ => false,
    }
}
