//! Pattern-Based Text Transforms.
//!
//! Regex-driven rewrites that exact-match substitution cannot express:
//! duration units, date reformatting, count lines and two
//! phrase-with-capture rules. All transforms are idempotent - converted
//! output no longer matches the source pattern - and rewrite only the
//! matched token span, leaving surrounding text alone.
//!
//! The source vocabulary is intentionally narrow: English weekday/month
//! abbreviations plus already-localized `日..土` weekday and `N月` month
//! tokens. Anything else passes through untouched.

use bitflags::bitflags;
use regex::{Captures, Regex};

// =============================================================================
// Rule Selection
// =============================================================================

bitflags! {
    /// Which pattern transforms a region applies, in the fixed order
    /// prompt -> counts -> durations -> dates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RuleSet: u8 {
        /// `N seconds/minutes/hours/days/weeks` and the
        /// `less than a minute` idiom.
        const DURATIONS = 1 << 0;
        /// Weekday+month+day+year sequences to `YYYY/MM/DD (曜)`.
        const DATES = 1 << 1;
        /// `N words · N characters · N paragraphs` stat lines.
        const COUNTS = 1 << 2;
        /// `N notes in Trash` phrase.
        const TRASH_COUNT = 1 << 3;
        /// `N notes/files/tags/...` item-count labels.
        const ITEM_COUNTS = 1 << 4;
        /// `Are you sure you want to move 'X' to the trash?` prompt.
        const TRASH_PROMPT = 1 << 5;
    }
}

// =============================================================================
// Compiled Patterns
// =============================================================================

struct Patterns {
    lt_duration: Regex,
    duration: Regex,
    less_than_minute: Regex,
    date: Regex,
    trailing_time: Regex,
    count_probe: Regex,
    count_part: Regex,
    trash_count: Regex,
    item_count: Regex,
    trash_prompt_quoted: Regex,
    trash_prompt_plain: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            lt_duration: Regex::new(r"<\s*(\d+)\s*(seconds?|minutes?|hours?|days?|weeks?)")
                .unwrap(),
            duration: Regex::new(r"(\d+)\s*(seconds?|minutes?|hours?|days?|weeks?)").unwrap(),
            less_than_minute: Regex::new(r"(?i)less than a minute").unwrap(),
            date: Regex::new(
                r"\b(?P<wday>Sun|Mon|Tue|Wed|Thu|Fri|Sat|日|月|火|水|木|金|土)\b\s+(?P<month>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|[0-9]+月)\s+(?P<day>\d{1,2})\s+(?P<year>\d{4})",
            )
            .unwrap(),
            trailing_time: Regex::new(r"^\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)").unwrap(),
            count_probe: Regex::new(r"\b(words?|characters?|paragraphs?)\b").unwrap(),
            count_part: Regex::new(r"^(\d+)\s*(words?|characters?|paragraphs?)$").unwrap(),
            trash_count: Regex::new(r"^(\d+)\s+notes in Trash$").unwrap(),
            item_count: Regex::new(
                r"^(\d+)\s+(notes|files|tags|archived notes|trashed notes)$",
            )
            .unwrap(),
            trash_prompt_quoted: Regex::new(
                r"^Are you sure you want to move ['‘’「」](.+)['‘’」「] to the trash\?$",
            )
            .unwrap(),
            trash_prompt_plain: Regex::new(r"^Are you sure you want to move (.+) to the trash\?$")
                .unwrap(),
        }
    }
}

thread_local! {
    static PATTERNS: Patterns = Patterns::new();
}

// =============================================================================
// Vocabulary
// =============================================================================

fn duration_unit_ja(unit: &str) -> &'static str {
    match unit {
        "second" | "seconds" => "秒",
        "minute" | "minutes" => "分",
        "hour" | "hours" => "時間",
        "day" | "days" => "日",
        "week" | "weeks" => "週間",
        _ => "",
    }
}

fn weekday_ja(wday: &str) -> &'static str {
    match wday {
        "Sun" | "日" => "日",
        "Mon" | "月" => "月",
        "Tue" | "火" => "火",
        "Wed" | "水" => "水",
        "Thu" | "木" => "木",
        "Fri" | "金" => "金",
        "Sat" | "土" => "土",
        _ => "",
    }
}

fn month_number(month: &str) -> String {
    match month {
        "Jan" => "1",
        "Feb" => "2",
        "Mar" => "3",
        "Apr" => "4",
        "May" => "5",
        "Jun" => "6",
        "Jul" => "7",
        "Aug" => "8",
        "Sep" => "9",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        other => return other.trim_end_matches('月').to_string(),
    }
    .to_string()
}

fn count_unit_ja(unit: &str) -> &'static str {
    match unit {
        "word" | "words" => "単語",
        "character" | "characters" => "文字",
        "paragraph" | "paragraphs" => "段落",
        _ => "",
    }
}

fn item_unit_ja(unit: &str) -> &'static str {
    match unit {
        "notes" => "ノート",
        "files" => "ファイル",
        "tags" => "タグ",
        "archived notes" => "アーカイブされたノート",
        "trashed notes" => "ゴミ箱内ノート",
        _ => "",
    }
}

// =============================================================================
// Transforms
// =============================================================================

/// Translate quantified duration tokens in place, magnitude preserved.
pub fn translate_durations(text: &str) -> String {
    PATTERNS.with(|p| {
        let out = p.lt_duration.replace_all(text, |caps: &Captures<'_>| {
            format!("< {}{}", &caps[1], duration_unit_ja(&caps[2]))
        });
        let out = p.duration.replace_all(&out, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], duration_unit_ja(&caps[2]))
        });
        p.less_than_minute.replace_all(&out, "1分未満").into_owned()
    })
}

/// Rewrite a contiguous weekday+month+day+year token sequence to
/// `YYYY/MM/DD (曜)`, with a trailing `H:MM[:SS][ AM/PM]` token carried
/// over when it immediately follows the date. Input without a full
/// sequence is returned unchanged.
pub fn convert_date(text: &str) -> String {
    PATTERNS.with(|p| {
        let Some(caps) = p.date.captures(text) else {
            return text.to_string();
        };
        let whole = caps.get(0).expect("group 0 always present");
        let wday = weekday_ja(&caps["wday"]);
        let month = month_number(&caps["month"]);
        let day = &caps["day"];
        let year = &caps["year"];

        let mut formatted = format!("{year}/{month:0>2}/{day:0>2} ({wday})");
        let mut consumed_end = whole.end();
        if let Some(time) = p.trailing_time.captures(&text[whole.end()..]) {
            formatted.push(' ');
            formatted.push_str(&time[1]);
            consumed_end += time.get(0).expect("group 0 always present").end();
        }

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..whole.start()]);
        out.push_str(&formatted);
        out.push_str(&text[consumed_end..]);
        out
    })
}

/// Rewrite the `N words · N characters · N paragraphs` stats line.
/// Returns `None` when the text has no count token at all.
pub fn rewrite_count_line(text: &str) -> Option<String> {
    PATTERNS.with(|p| {
        if !p.count_probe.is_match(text) {
            return None;
        }
        let line = text
            .split(['\u{00B7}', ',', '・'])
            .map(|part| {
                let part = part.trim();
                match p.count_part.captures(part) {
                    Some(caps) => format!("{}{}", &caps[1], count_unit_ja(&caps[2])),
                    None => part.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("・");
        Some(line)
    })
}

/// `N notes in Trash` -> `N 件のノートがゴミ箱内にあります`.
pub fn rewrite_trash_count(text: &str) -> Option<String> {
    PATTERNS.with(|p| {
        p.trash_count
            .captures(text)
            .map(|caps| format!("{} 件のノートがゴミ箱内にあります", &caps[1]))
    })
}

/// `N notes` / `N files` / ... -> `N 件の...`.
pub fn rewrite_item_count(text: &str) -> Option<String> {
    PATTERNS.with(|p| {
        p.item_count
            .captures(text)
            .map(|caps| format!("{} 件の{}", &caps[1], item_unit_ja(&caps[2])))
    })
}

/// Move-to-trash confirmation prompt, note name preserved.
pub fn rewrite_trash_prompt(text: &str) -> Option<String> {
    PATTERNS.with(|p| {
        p.trash_prompt_quoted
            .captures(text)
            .or_else(|| p.trash_prompt_plain.captures(text))
            .map(|caps| format!("「{}」をゴミ箱に移動してもよろしいですか？", &caps[1]))
    })
}

/// Apply every transform enabled in `rules`, in fixed order. Returns
/// the input unchanged (as an owned string) when nothing matches.
pub fn apply(rules: RuleSet, text: &str) -> String {
    let mut out = text.to_string();
    if rules.contains(RuleSet::TRASH_PROMPT) {
        if let Some(rewritten) = rewrite_trash_prompt(&out) {
            out = rewritten;
        }
    }
    if rules.contains(RuleSet::TRASH_COUNT) {
        if let Some(rewritten) = rewrite_trash_count(&out) {
            out = rewritten;
        }
    }
    if rules.contains(RuleSet::ITEM_COUNTS) {
        if let Some(rewritten) = rewrite_item_count(&out) {
            out = rewritten;
        }
    }
    if rules.contains(RuleSet::COUNTS) {
        if let Some(rewritten) = rewrite_count_line(&out) {
            out = rewritten;
        }
    }
    if rules.contains(RuleSet::DURATIONS) {
        out = translate_durations(&out);
    }
    if rules.contains(RuleSet::DATES) {
        out = convert_date(&out);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_units() {
        assert_eq!(translate_durations("5 minutes"), "5分");
        assert_eq!(translate_durations("1 second"), "1秒");
        assert_eq!(translate_durations("3 hours"), "3時間");
        assert_eq!(translate_durations("2 days"), "2日");
        assert_eq!(translate_durations("6 weeks"), "6週間");
    }

    #[test]
    fn test_duration_keeps_surrounding_text() {
        assert_eq!(translate_durations("5 minutes ago"), "5分 ago");
        assert_eq!(translate_durations("Read time: 4 minutes"), "Read time: 4分");
    }

    #[test]
    fn test_duration_less_than_prefix() {
        assert_eq!(translate_durations("< 1 minute"), "< 1分");
        assert_eq!(translate_durations("<5 seconds"), "< 5秒");
    }

    #[test]
    fn test_less_than_a_minute_idiom() {
        assert_eq!(translate_durations("less than a minute"), "1分未満");
        assert_eq!(translate_durations("Less than a minute"), "1分未満");
    }

    #[test]
    fn test_duration_idempotent() {
        let once = translate_durations("5 minutes");
        assert_eq!(translate_durations(&once), once);
        let once = translate_durations("less than a minute");
        assert_eq!(translate_durations(&once), once);
    }

    #[test]
    fn test_date_conversion() {
        assert_eq!(
            convert_date("Fri May 30 2025 14:01:45"),
            "2025/05/30 (金) 14:01:45"
        );
    }

    #[test]
    fn test_date_conversion_idempotent() {
        let once = convert_date("Fri May 30 2025 14:01:45");
        assert_eq!(convert_date(&once), once);
    }

    #[test]
    fn test_date_without_time() {
        assert_eq!(convert_date("Mon Jan 6 2025"), "2025/01/06 (月)");
    }

    #[test]
    fn test_date_with_localized_tokens() {
        assert_eq!(
            convert_date("金 5月 30 2025 14:01:45"),
            "2025/05/30 (金) 14:01:45"
        );
    }

    #[test]
    fn test_date_keeps_surrounding_text() {
        assert_eq!(
            convert_date("saved Wed Dec 3 2025 9:05 locally"),
            "saved 2025/12/03 (水) 9:05 locally"
        );
    }

    #[test]
    fn test_date_partial_sequence_untouched() {
        // Month+day+year without a weekday must not rewrite.
        assert_eq!(convert_date("May 30 2025"), "May 30 2025");
        // Weekday+month without day/year must not rewrite.
        assert_eq!(convert_date("Fri May"), "Fri May");
    }

    #[test]
    fn test_date_time_am_pm() {
        assert_eq!(convert_date("Sat Oct 4 2025 2:05 PM"), "2025/10/04 (土) 2:05 PM");
    }

    #[test]
    fn test_count_line() {
        assert_eq!(
            rewrite_count_line("301 words · 1810 characters · 7 paragraphs").as_deref(),
            Some("301単語・1810文字・7段落")
        );
        assert_eq!(rewrite_count_line("Last modified: today"), None);
    }

    #[test]
    fn test_count_line_singular() {
        assert_eq!(
            rewrite_count_line("1 word · 1 paragraph").as_deref(),
            Some("1単語・1段落")
        );
    }

    #[test]
    fn test_trash_count() {
        assert_eq!(
            rewrite_trash_count("12 notes in Trash").as_deref(),
            Some("12 件のノートがゴミ箱内にあります")
        );
        assert_eq!(rewrite_trash_count("12 notes"), None);
    }

    #[test]
    fn test_item_counts() {
        assert_eq!(
            rewrite_item_count("1876 notes").as_deref(),
            Some("1876 件のノート")
        );
        assert_eq!(
            rewrite_item_count("3 archived notes").as_deref(),
            Some("3 件のアーカイブされたノート")
        );
        assert_eq!(rewrite_item_count("notes"), None);
    }

    #[test]
    fn test_trash_prompt() {
        assert_eq!(
            rewrite_trash_prompt("Are you sure you want to move 'daily log' to the trash?")
                .as_deref(),
            Some("「daily log」をゴミ箱に移動してもよろしいですか？")
        );
        assert_eq!(
            rewrite_trash_prompt("Are you sure you want to move daily log to the trash?")
                .as_deref(),
            Some("「daily log」をゴミ箱に移動してもよろしいですか？")
        );
        assert_eq!(rewrite_trash_prompt("Move to Trash"), None);
    }

    #[test]
    fn test_apply_respects_rule_flags() {
        let text = "Fri May 30 2025 14:01:45";
        assert_eq!(apply(RuleSet::DURATIONS, text), text);
        assert_eq!(apply(RuleSet::DATES, text), "2025/05/30 (金) 14:01:45");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let rules = RuleSet::DURATIONS | RuleSet::DATES | RuleSet::COUNTS;
        for input in [
            "Fri May 30 2025 14:01:45",
            "5 minutes",
            "301 words · 7 paragraphs",
            "less than a minute",
        ] {
            let once = apply(rules, input);
            assert_eq!(apply(rules, &once), once, "input: {input}");
        }
    }
}
