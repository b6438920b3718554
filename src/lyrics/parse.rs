use lazy_static::lazy_static;
use regex::Regex;

use super::track::{LyricTrack, TimedLine};

lazy_static! {
    // [MM:SS.ff] or [MM:SS.fff], anywhere in the line, first match wins.
    static ref TIME_TAG: Regex = Regex::new(r"\[(\d{2}):(\d{2})\.(\d{2,3})\]").unwrap();
}

/// Parse raw LRC text into a [`LyricTrack`].
///
/// Lines without a timestamp tag (metadata like `[ar:...]`, blanks) and
/// lines whose text is empty after trimming are skipped. Parsing never
/// fails: garbage input just yields an empty track.
pub fn parse_track(raw: &str) -> LyricTrack {
    let mut lines = Vec::new();

    for line in raw.lines() {
        let Some(caps) = TIME_TAG.captures(line) else {
            continue;
        };
        let Some(tag) = caps.get(0) else {
            continue;
        };

        let (Ok(minutes), Ok(seconds)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
            continue;
        };
        let Some(millis) = parse_fraction(&caps[3]) else {
            continue;
        };

        let time = (minutes * 60 + seconds) as f64 + millis as f64 / 1000.0;
        let text = line[tag.end()..].trim();
        if text.is_empty() {
            continue;
        }

        lines.push(TimedLine::new(time, text));
    }

    LyricTrack::from_lines(lines)
}

// The fraction is read as if right-padded with zeros to three digits:
// ".50" is 500ms, ".005" is 5ms. Centisecond files depend on this.
fn parse_fraction(digits: &str) -> Option<u32> {
    let value = digits.parse::<u32>().ok()?;
    match digits.len() {
        2 => Some(value * 10),
        3 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_track() {
        let track = parse_track("[00:12.00]First line\n[00:17.20]Second line\n");
        assert_eq!(track.len(), 2);
        assert_eq!(track.get(0).unwrap().time, 12.0);
        assert_eq!(track.get(0).unwrap().text, "First line");
        assert_eq!(track.get(1).unwrap().time, 17.2);
    }

    #[test]
    fn pads_fraction_to_milliseconds() {
        // ".50" means half a second, not 50ms.
        let track = parse_track("[01:02.50]Hello");
        assert_eq!(track.get(0).unwrap().time, 62.5);

        let track = parse_track("[00:00.50]x\n[00:00.005]y");
        assert_eq!(track.get(0).unwrap().time, 0.005);
        assert_eq!(track.get(1).unwrap().time, 0.5);
    }

    #[test]
    fn rejects_single_digit_fraction() {
        assert!(parse_track("[00:00.5]too short").is_empty());
    }

    #[test]
    fn skips_metadata_and_malformed_lines() {
        let raw = "[ar:Some Artist]\n[ti:Some Title]\n\nnot a lyric\n[99:99]no dot\n[00:05.00]real line\n";
        let track = parse_track(raw);
        assert_eq!(track.len(), 1);
        assert_eq!(track.get(0).unwrap().text, "real line");
    }

    #[test]
    fn drops_lines_with_blank_text() {
        assert!(parse_track("[00:01.00]   ").is_empty());
        assert!(parse_track("[00:01.00]").is_empty());
    }

    #[test]
    fn trims_whitespace_around_text() {
        let track = parse_track("[00:01.00]   spaced out  ");
        assert_eq!(track.get(0).unwrap().text, "spaced out");
    }

    #[test]
    fn uses_first_tag_only() {
        // Some files carry several tags per line; only the first one counts,
        // the rest stays in the text.
        let track = parse_track("[00:01.00][00:09.00]chorus");
        assert_eq!(track.len(), 1);
        assert_eq!(track.get(0).unwrap().time, 1.0);
        assert_eq!(track.get(0).unwrap().text, "[00:09.00]chorus");
    }

    #[test]
    fn matches_tag_anywhere_in_line() {
        let track = parse_track("offset garbage [00:03.00]still parsed");
        assert_eq!(track.get(0).unwrap().time, 3.0);
        assert_eq!(track.get(0).unwrap().text, "still parsed");
    }

    #[test]
    fn sorts_out_of_order_input() {
        let track = parse_track("[00:30.00]later\n[00:10.00]earlier\n");
        assert_eq!(track.get(0).unwrap().text, "earlier");
        assert_eq!(track.get(1).unwrap().text, "later");
    }

    #[test]
    fn empty_input_yields_empty_track() {
        assert!(parse_track("").is_empty());
        assert!(parse_track("no timestamps at all\njust text\n").is_empty());
    }
}
