// Auto-generated by ucaps_gen from UnicodeData.txt. Do not edit.

/// Simple lowercase to uppercase mappings, sorted by code point.
#[rustfmt::skip]
pub static LOWER_TO_UPPER: &[(u32, u32); 5] = &[
    (97, 65),
    (98, 66),
    (453, 452),
    (454, 452),
    (66600, 66560),
];

/// Simple uppercase to lowercase mappings, sorted by code point.
#[rustfmt::skip]
pub static UPPER_TO_LOWER: &[(u32, u32); 5] = &[
    (65, 97),
    (66, 98),
    (452, 454),
    (453, 454),
    (66560, 66600),
];

/// Returns the simple uppercase mapping of `ch`, or `ch` itself when it has none.
pub fn to_upper(ch: u32) -> u32 {
    lookup(LOWER_TO_UPPER, ch)
}

/// Returns the simple lowercase mapping of `ch`, or `ch` itself when it has none.
pub fn to_lower(ch: u32) -> u32 {
    lookup(UPPER_TO_LOWER, ch)
}

fn lookup(table: &[(u32, u32)], ch: u32) -> u32 {
    match table.binary_search_by_key(&ch, |&(key, _)| key) {
        Ok(i) => table[i].1,
        Err(_) => ch,
    }
}
