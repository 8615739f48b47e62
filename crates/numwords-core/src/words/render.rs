//! Rendering of a single 0..=999 group into words.

// Leading empty slots keep index == value.
const UNITS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell out one group, e.g. `536` -> "five hundred and thirty-six".
///
/// Returns an empty string for `0`, and for values above 999, which are
/// not a single group.
pub fn render_group(group: u16) -> String {
    if group > 999 {
        return String::new();
    }

    let hundreds = usize::from(group / 100);
    let remainder = usize::from(group % 100);
    let tens = remainder / 10;
    let units = remainder % 10;

    let mut words = String::new();

    if hundreds != 0 {
        words.push_str(UNITS[hundreds]);
        words.push_str(" hundred");
        if remainder != 0 {
            words.push_str(" and ");
        }
    }

    if remainder >= 20 {
        words.push_str(TENS[tens]);
        if units != 0 {
            words.push('-');
            words.push_str(UNITS[units]);
        }
    } else if remainder != 0 {
        words.push_str(UNITS[remainder]);
    }

    words
}
