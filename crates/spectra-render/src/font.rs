//! A fixed 256-entry bitmap font: 10 rows of 5 visible columns per glyph,
//! one byte per row with the pixel data in bits 7..3 (mask `0x80 >> k`
//! tests column k). Built once from readable row patterns and cached.

use std::sync::OnceLock;

const ROWS: usize = 10;
const COLS: usize = 5;

type Glyph = [u8; ROWS];

/// Converts ten 5-character rows of `#`/`.` into the packed glyph form.
fn glyph(rows: [&str; ROWS]) -> Glyph {
    let mut out = [0u8; ROWS];
    for (r, pattern) in rows.iter().enumerate() {
        let mut byte = 0u8;
        for (k, ch) in pattern.chars().take(COLS).enumerate() {
            if ch == '#' {
                byte |= 0x80 >> k;
            }
        }
        out[r] = byte;
    }
    out
}

const BLANK: [&str; ROWS] = [".....", ".....", ".....", ".....", ".....", ".....", ".....", ".....", ".....", "....."];

fn digit(n: u8) -> [&'static str; ROWS] {
    match n {
        0 => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", "#...#", ".###.", ".....", "....."],
        1 => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", "..#..", ".###.", ".....", "....."],
        2 => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#....", "#####", ".....", "....."],
        3 => [".###.", "#...#", "....#", "..##.", "....#", "....#", "#...#", ".###.", ".....", "....."],
        4 => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#.", "...#.", ".....", "....."],
        5 => ["#####", "#....", "#....", "####.", "....#", "....#", "#...#", ".###.", ".....", "....."],
        6 => [".###.", "#...#", "#....", "####.", "#...#", "#...#", "#...#", ".###.", ".....", "....."],
        7 => ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#...", ".#...", ".....", "....."],
        8 => [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", "#...#", ".###.", ".....", "....."],
        9 => [".###.", "#...#", "#...#", ".####", "....#", "....#", "#...#", ".###.", ".....", "....."],
        _ => BLANK,
    }
}

fn upper(c: char) -> [&'static str; ROWS] {
    match c {
        'A' => [".###.", "#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#", ".....", "....."],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "#...#", "####.", ".....", "....."],
        'C' => [".###.", "#...#", "#....", "#....", "#....", "#....", "#...#", ".###.", ".....", "....."],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "####.", ".....", "....."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#....", "#####", ".....", "....."],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#....", "#....", ".....", "....."],
        'G' => [".###.", "#...#", "#....", "#.###", "#...#", "#...#", "#...#", ".###.", ".....", "....."],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#", "#...#", ".....", "....."],
        'I' => [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", ".###.", ".....", "....."],
        'J' => ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", "#..#.", ".##..", ".....", "....."],
        'K' => ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#", "#...#", ".....", "....."],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#....", "#####", ".....", "....."],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#", "#...#", ".....", "....."],
        'N' => ["#...#", "##..#", "#.#.#", "#.#.#", "#..##", "#...#", "#...#", "#...#", ".....", "....."],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###.", ".....", "....."],
        'P' => ["####.", "#...#", "#...#", "####.", "#....", "#....", "#....", "#....", ".....", "....."],
        'Q' => [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", "#...#", ".####", ".....", "....."],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#", "#...#", ".....", "....."],
        'S' => [".###.", "#...#", "#....", ".###.", "....#", "....#", "#...#", ".###.", ".....", "....."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", ".....", "....."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###.", ".....", "....."],
        'V' => ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", ".#.#.", "..#..", ".....", "....."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", "##.##", "#...#", ".....", "....."],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", ".#.#.", "#...#", "#...#", ".....", "....."],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#..", "..#..", ".....", "....."],
        'Z' => ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#....", "#####", ".....", "....."],
        _ => BLANK,
    }
}

fn punct(c: char) -> [&'static str; ROWS] {
    match c {
        '-' => [".....", ".....", ".....", "#####", ".....", ".....", ".....", ".....", ".....", "....."],
        '.' => [".....", ".....", ".....", ".....", ".....", ".....", "..##.", "..##.", ".....", "....."],
        ':' => [".....", "..##.", "..##.", ".....", "..##.", "..##.", ".....", ".....", ".....", "....."],
        '+' => [".....", "..#..", "..#..", "#####", "..#..", "..#..", ".....", ".....", ".....", "....."],
        '/' => ["....#", "...#.", "...#.", "..#..", ".#...", ".#...", "#....", "#....", ".....", "....."],
        '_' => [".....", ".....", ".....", ".....", ".....", ".....", ".....", "#####", ".....", "....."],
        _ => BLANK,
    }
}

/// Looks up the packed glyph for a byte value. Bytes with no defined
/// glyph (including all non-ASCII and most control codes) render blank.
fn build_table() -> [Glyph; 256] {
    let mut table = [glyph(BLANK); 256];
    for n in 0..=9u8 {
        table[b'0' as usize + n as usize] = glyph(digit(n));
    }
    for c in 'A'..='Z' {
        table[c as usize] = glyph(upper(c));
        let lower = c.to_ascii_lowercase();
        table[lower as usize] = glyph(upper(c));
    }
    for c in ['-', '.', ':', '+', '/', '_'] {
        table[c as usize] = glyph(punct(c));
    }
    table
}

static TABLE: OnceLock<[Glyph; 256]> = OnceLock::new();

pub(crate) fn glyph_for(byte: u8) -> &'static Glyph {
    &TABLE.get_or_init(build_table)[byte as usize]
}

pub(crate) const GLYPH_ROWS: usize = ROWS;
pub(crate) const GLYPH_COLS: usize = COLS;
pub(crate) const GLYPH_ADVANCE: usize = 6;
