//! Grapheme width and visible width helpers.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::{ansi_sequence_len, RESET};

const TAB_WIDTH: usize = 3;

pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    if emoji_get(grapheme).is_some() {
        return 2;
    }

    grapheme
        .chars()
        .map(|ch| {
            if ch == '\t' {
                TAB_WIDTH
            } else {
                UnicodeWidthChar::width(ch).unwrap_or(0)
            }
        })
        .sum()
}

/// Display width in terminal columns, ignoring escape sequences.
pub fn visible_width(input: &str) -> usize {
    segments(input)
        .into_iter()
        .map(|segment| match segment {
            Segment::Ansi(_) => 0,
            Segment::Grapheme(grapheme) => grapheme_width(grapheme),
        })
        .sum()
}

/// Cut `text` to at most `max_width` columns. Escape sequences are kept; a reset is appended
/// when anything was cut so styling never leaks past the cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if visible_width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut width = 0;
    for segment in segments(text) {
        match segment {
            Segment::Ansi(code) => out.push_str(code),
            Segment::Grapheme(grapheme) => {
                let w = grapheme_width(grapheme);
                if width + w > max_width {
                    break;
                }
                out.push_str(grapheme);
                width += w;
            }
        }
    }
    out.push_str(RESET);
    out
}

/// Right-pad `text` with spaces to exactly `width` columns, truncating when it is wider.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let current = visible_width(&text);
    if current >= width {
        return text;
    }
    format!("{text}{}", " ".repeat(width - current))
}

enum Segment<'a> {
    Ansi(&'a str),
    Grapheme(&'a str),
}

fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut idx = 0;
    let mut text_start = 0;
    while idx < input.len() {
        if let Some(len) = ansi_sequence_len(input, idx) {
            out.extend(input[text_start..idx].graphemes(true).map(Segment::Grapheme));
            out.push(Segment::Ansi(&input[idx..idx + len]));
            idx += len;
            text_start = idx;
            continue;
        }
        idx += input[idx..].chars().next().map_or(1, char::len_utf8);
    }
    out.extend(input[text_start..].graphemes(true).map(Segment::Grapheme));
    out
}

#[cfg(test)]
mod tests {
    use super::{pad_to_width, truncate_to_width, visible_width};

    #[test]
    fn ansi_ignored_in_width() {
        let input = "hi\x1b[31m!!\x1b[0m";
        assert_eq!(visible_width(input), 4);
    }

    #[test]
    fn rgi_emoji_width_is_two() {
        assert_eq!(visible_width("😀"), 2);
    }

    #[test]
    fn box_drawing_is_single_width() {
        assert_eq!(visible_width("╭─╮│├┤"), 6);
    }

    #[test]
    fn truncate_returns_original_when_it_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_and_resets() {
        assert_eq!(truncate_to_width("\x1b[2mhello", 3), "\x1b[2mhel\x1b[0m");
        assert_eq!(visible_width(&truncate_to_width("日本語", 3)), 2);
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad_to_width("hi", 4), "hi  ");
        assert_eq!(visible_width(&pad_to_width("hello", 3)), 3);
        assert_eq!(pad_to_width("", 0), "");
    }
}
