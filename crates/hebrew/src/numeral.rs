//! Hebrew letter numerals (gematria) with geresh and gershayim punctuation.

use crate::GERESH;
use crate::GERSHAYIM;

/// Letters for 1..=9 (index 0 unused).
pub(crate) const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];

/// Letters for 10..=90 in steps of ten (index 0 unused).
pub(crate) const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];

/// Letters for 100..=900 in steps of one hundred (index 0 unused).
pub(crate) const HUNDREDS: [&str; 10] = ["", "ק", "ר", "ש", "ת", "תק", "תר", "תש", "תת", "תתק"];

/// Renders `n` as a punctuated Hebrew numeral.
///
/// Values in `5000..6000` drop the millennium digit, as years are customarily
/// written (5786 renders like 786). Remainders of 15 and 16 are spelled
/// ט״ו and ט״ז instead of the tens-plus-ones letters. A single glyph takes a
/// trailing geresh; longer numerals take gershayim before the last glyph.
/// Zero renders as an empty string, and a hundreds digit beyond the table
/// (values of 1000 and up outside the elided millennium) contributes nothing.
///
/// # Example
///
/// ```
/// use sidduril_hebrew::numeral_of;
///
/// assert_eq!(numeral_of(1), "א׳");
/// assert_eq!(numeral_of(15), "ט״ו");
/// assert_eq!(numeral_of(5786), "תשפ״ו");
/// ```
pub fn numeral_of(n: u32) -> String {
    let mut rest = if (5000..6000).contains(&n) { n - 5000 } else { n };
    let mut glyphs = String::new();

    if rest >= 100 {
        if let Some(hundreds) = HUNDREDS.get((rest / 100) as usize) {
            glyphs.push_str(hundreds);
        }
        rest %= 100;
    }

    match rest {
        15 => glyphs.push_str("טו"),
        16 => glyphs.push_str("טז"),
        _ => {
            glyphs.push_str(TENS[(rest / 10) as usize]);
            glyphs.push_str(ONES[(rest % 10) as usize]);
        }
    }

    punctuate(&glyphs)
}

/// Applies geresh/gershayim to an assembled glyph sequence.
fn punctuate(glyphs: &str) -> String {
    let mut chars: Vec<char> = glyphs.chars().collect();
    match chars.len() {
        0 => {}
        1 => chars.push(GERESH),
        len => chars.insert(len - 1, GERSHAYIM),
    }
    chars.into_iter().collect()
}
