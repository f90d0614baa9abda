//! Lowercase roman numeral recognition
//!
//! Sub-paragraph indices are lowercase roman numerals. A numeral is accepted
//! when it decomposes into thousands, hundreds, tens and ones groups, where
//! every group below thousands is one of:
//!
//! - up to three repetitions of the unit (`i`, `ii`, `iii`)
//! - four-before-five (`iv`)
//! - five followed by up to three units (`v`, `vi`, `viii`)
//! - four-before-ten (`ix`)
//!
//! Thousands are any number of `m`s.

/// Unit, five and ten symbols of the hundreds, tens and ones groups
const GROUPS: [(u8, u8, u8); 3] = [(b'c', b'd', b'm'), (b'x', b'l', b'c'), (b'i', b'v', b'x')];

/// Consume one decimal group from the front of `input`, returning the rest
fn strip_group(input: &[u8], (one, five, ten): (u8, u8, u8)) -> &[u8] {
    match input {
        [a, b, rest @ ..] if *a == one && (*b == five || *b == ten) => rest,
        _ => {
            let rest = input.strip_prefix(&[five]).unwrap_or(input);
            let repeats = rest.iter().take(3).take_while(|&&c| c == one).count();
            &rest[repeats..]
        }
    }
}

/// Check whether `candidate` is a canonical lowercase roman numeral
pub fn is_roman_numeral(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let bytes = candidate.as_bytes();
    let thousands = bytes.iter().take_while(|&&c| c == b'm').count();
    let rest = GROUPS
        .iter()
        .fold(&bytes[thousands..], |rest, group| strip_group(rest, *group));

    rest.is_empty()
}
