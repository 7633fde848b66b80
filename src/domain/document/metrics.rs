//! Static serif width metrics for line wrapping.
//!
//! Widths are Times-Roman advance widths in thousandths of an em for ASCII
//! 0x20..=0x7E. Bold text is approximated by a fixed widening factor; exact glyph
//! metrics are not needed to keep paragraphs inside the margins.
//! Index = (char as usize) - 32.

use super::layout::FontWeight;

#[rustfmt::skip]
static TIMES_ROMAN: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 0    1    2    3    4    5    6    7    8    9
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    // :    ;    <    =    >    ?    @
    278, 278, 564, 564, 564, 444, 921,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 469, 500, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    // {    |    }    ~
    480, 200, 480, 541,
];

const AVERAGE_CHAR_WIDTH: u16 = 500;
const BOLD_FACTOR: f32 = 1.04;

/// Rendered width of `text` in points at `font_size_pt`.
pub fn text_width_pt(text: &str, font_size_pt: f32, weight: FontWeight) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as usize;
            if (32..=126).contains(&code) {
                u32::from(TIMES_ROMAN[code - 32])
            } else {
                u32::from(AVERAGE_CHAR_WIDTH)
            }
        })
        .sum();
    let width = units as f32 * font_size_pt / 1000.0;
    match weight {
        FontWeight::Regular => width,
        FontWeight::Bold => width * BOLD_FACTOR,
    }
}

/// Greedy word wrap of `text` into lines no wider than `max_width_pt`.
///
/// Whitespace runs (including newlines) collapse to single spaces. A word wider
/// than the line is placed on its own line rather than split.
pub fn wrap_text(text: &str, font_size_pt: f32, weight: FontWeight, max_width_pt: f32) -> Vec<String> {
    let space = text_width_pt(" ", font_size_pt, weight);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = text_width_pt(word, font_size_pt, weight);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space + word_width > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
