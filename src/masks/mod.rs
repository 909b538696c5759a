//! Input masks for form fields.
//!
//! Both masks strip non-digit characters first and regroup, so applying a
//! mask to an already-masked value is a no-op.

/// Maximum digits in a dd/mm/yyyy date.
const DATE_DIGITS: usize = 8;

/// Maximum digits in a Brazilian mobile number: (dd) d dddd-dddd.
const PHONE_DIGITS: usize = 11;

/// Group digits as dd/mm/yyyy, progressively as digits accrue.
///
/// "11081986" becomes "11/08/1986"; "1" stays "1". Excess digits are dropped.
pub fn mask_date(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(DATE_DIGITS)
        .collect();

    let mut out = String::with_capacity(DATE_DIGITS + 2);
    for (i, c) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            out.push('/');
        }
        out.push(*c);
    }
    out
}

/// Group digits as "(dd) d dddd-dddd", progressively as digits accrue.
///
/// "84996128883" becomes "(84) 9 9612-8883". Excess digits are dropped.
pub fn mask_phone(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect();

    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(PHONE_DIGITS + 5);
    out.push('(');
    for (i, c) in digits.iter().enumerate() {
        match i {
            2 => out.push_str(") "),
            3 => out.push(' '),
            7 => out.push('-'),
            _ => {}
        }
        out.push(*c);
    }
    out
}
