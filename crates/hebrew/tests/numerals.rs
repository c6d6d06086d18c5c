use std::collections::HashSet;

use sidduril_hebrew::{
    GERESH, GERSHAYIM, format_hebrew_date, month_name, months_in_year, numeral_of,
};

/// Sums the letter values of a numeral, ignoring punctuation.
fn gematria(numeral: &str) -> u32 {
    numeral
        .chars()
        .filter(|&c| c != GERESH && c != GERSHAYIM)
        .map(|c| match c {
            'א' => 1,
            'ב' => 2,
            'ג' => 3,
            'ד' => 4,
            'ה' => 5,
            'ו' => 6,
            'ז' => 7,
            'ח' => 8,
            'ט' => 9,
            'י' => 10,
            'כ' => 20,
            'ל' => 30,
            'מ' => 40,
            'נ' => 50,
            'ס' => 60,
            'ע' => 70,
            'פ' => 80,
            'צ' => 90,
            'ק' => 100,
            'ר' => 200,
            'ש' => 300,
            'ת' => 400,
            other => panic!("unexpected glyph {other:?} in {numeral:?}"),
        })
        .sum()
}

#[test]
fn letter_values_sum_to_the_number() {
    for n in 1..1000u32 {
        let numeral = numeral_of(n);
        assert_eq!(gematria(&numeral), n, "numeral_of({n}) = {numeral:?}");
    }
}

#[test]
fn numerals_below_one_thousand_are_distinct() {
    let seen: HashSet<String> = (1..1000u32).map(numeral_of).collect();
    assert_eq!(seen.len(), 999);
}

#[test]
fn exactly_one_punctuation_mark() {
    for n in 1..1000u32 {
        let numeral = numeral_of(n);
        let chars: Vec<char> = numeral.chars().collect();
        let marks = chars
            .iter()
            .filter(|&&c| c == GERESH || c == GERSHAYIM)
            .count();
        assert_eq!(marks, 1, "numeral_of({n}) = {numeral:?}");
        if chars.len() == 2 {
            assert_eq!(chars[1], GERESH, "numeral_of({n}) = {numeral:?}");
        } else {
            assert_eq!(chars[chars.len() - 2], GERSHAYIM, "numeral_of({n}) = {numeral:?}");
        }
    }
}

#[test]
fn tens_and_ones_never_spell_fifteen_or_sixteen_directly() {
    for n in 1..1000u32 {
        let numeral = numeral_of(n);
        assert!(!numeral.contains("י״ה") && !numeral.contains("יה"), "{n}: {numeral}");
        assert!(!numeral.contains("י״ו") && !numeral.contains("יו"), "{n}: {numeral}");
    }
}

#[test]
fn years_in_sixth_millennium_elide_the_thousands() {
    for year in 5001..6000u32 {
        assert_eq!(numeral_of(year), numeral_of(year - 5000));
    }
}

#[test]
fn month_lists_cover_every_index() {
    for leap in [false, true] {
        for month in 1..=months_in_year(leap) {
            assert!(!month_name(month, leap).is_empty(), "month {month} leap {leap}");
        }
        assert!(month_name(months_in_year(leap) + 1, leap).is_empty());
    }
}

#[test]
fn full_date_strings() {
    assert_eq!(
        format_hebrew_date(7, 2, 5787, true).unwrap(),
        "ז׳ חשון תשפ״ז"
    );
    assert_eq!(
        format_hebrew_date(30, 1, 5787, true).unwrap(),
        "ל׳ תשרי תשפ״ז"
    );
    assert_eq!(
        format_hebrew_date(16, 6, 5785, false).unwrap(),
        "ט״ז אדר תשפ״ה"
    );
}
