//! Positional field extraction shared by the telemetry line parsers.

/// Feet (and feet per second) to kilometers (per second).
pub const FEET_TO_KM: f64 = 0.0003048;

/// Collapses whitespace runs and splits the record into positional fields.
///
/// A record starting with whitespace yields an empty first field, so field
/// positions stay the same as in the fixed-format source.
pub fn fields(record: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = record.split_whitespace().collect();
    if record.starts_with(char::is_whitespace) {
        fields.insert(0, "");
    }
    fields
}

/// Numeric field at `index`, `NAN` when missing or malformed.
pub fn float_at(fields: &[&str], index: usize) -> f64 {
    fields.get(index).map_or(f64::NAN, |field| float(field))
}

pub fn float(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

/// Leading decimal integer of the field at `index`, ignoring any trailing
/// fraction or junk (`"201.0"` is 201).
pub fn int_at(fields: &[&str], index: usize) -> Option<i64> {
    fields.get(index).and_then(|field| int_prefix(field, 10))
}

pub fn int_prefix(field: &str, radix: u32) -> Option<i64> {
    let field = field.trim();
    let (sign, digits) = match field.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, field.strip_prefix('+').unwrap_or(field)),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    i64::from_str_radix(&digits[..end], radix)
        .ok()
        .map(|value| sign * value)
}

/// Fixed-column slice `[start, end)`, clamped to the record length.
pub fn column(record: &str, start: usize, end: usize) -> &str {
    let end = end.min(record.len());
    let start = start.min(end);
    record.get(start..end).unwrap_or("")
}

/// Case-insensitive prefix match on the raw record.
pub fn starts_with_tag(record: &str, tag: &str) -> bool {
    record
        .get(..tag.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fields_collapse_whitespace() {
        assert_eq!(fields("ISS   1\t2.0  3"), vec!["ISS", "1", "2.0", "3"]);
        assert_eq!(fields("  C 1 2"), vec!["", "C", "1", "2"]);
        assert!(fields("").is_empty());
    }

    #[test]
    fn malformed_floats_become_nan() {
        let record = fields("x 12.5 abc");
        assert_relative_eq!(float_at(&record, 1), 12.5);
        assert!(float_at(&record, 2).is_nan());
        assert!(float_at(&record, 7).is_nan());
    }

    #[test]
    fn int_prefix_stops_at_first_non_digit() {
        assert_eq!(int_prefix("201.0", 10), Some(201));
        assert_eq!(int_prefix("-12", 10), Some(-12));
        assert_eq!(int_prefix("10", 2), Some(2));
        assert_eq!(int_prefix("1.0", 2), Some(1));
        assert_eq!(int_prefix("x1", 10), None);
        assert_eq!(int_prefix("", 10), None);
    }

    #[test]
    fn column_is_clamped() {
        assert_eq!(column("1 25544U", 2, 7), "25544");
        assert_eq!(column("1 255", 2, 7), "255");
        assert_eq!(column("1", 2, 7), "");
    }

    #[test]
    fn feet_round_trip() {
        for feet in [1.0, 22_237_532.8, -13_120.5, 25_159.45] {
            let km = feet * FEET_TO_KM;
            assert_relative_eq!(km / FEET_TO_KM, feet, max_relative = 1e-9);
        }
    }
}
