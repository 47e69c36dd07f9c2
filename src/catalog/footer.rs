//! Note footer regions: info labels, stat lines, dates and durations.

use crate::engine::{Region, RuleSet, SubstitutionMap};

const FOOTER_INFO: &[(&str, &str)] = &[
    ("Read time:", "読了時間："),
    ("Last modified:", "最終更新："),
    ("Created:", "作成日："),
    ("Note ID:", "ノートID："),
    ("Size:", "サイズ："),
];

pub(super) fn footer_info() -> Region {
    Region::new(
        "footer-info",
        &[".select-text span.font-semibold"],
        SubstitutionMap::from_pairs(FOOTER_INFO),
    )
    .with_whole_element()
}

/// `N words · N characters · N paragraphs` lines, rewritten against the
/// line's composed text so the `・` joiner comes out uniform.
pub(super) fn stats_line() -> Region {
    Region::new(
        "stats-line",
        &[".select-text .mb-1, .select-text > div"],
        SubstitutionMap::empty(),
    )
    .with_whole_element()
    .with_rules(RuleSet::COUNTS)
}

/// Dates, times and quantified durations in the remaining footer lines.
/// These run per text leaf: the values sit next to labels that must stay
/// untouched.
pub(super) fn footer_dates() -> Region {
    Region::new(
        "footer-dates",
        &[".select-text .mb-1, .select-text > div"],
        SubstitutionMap::empty(),
    )
    .with_rules(RuleSet::DURATIONS | RuleSet::DATES)
}

pub(super) fn regions() -> Vec<Region> {
    vec![footer_info(), stats_line(), footer_dates()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::engine::rescan;
    use crate::types::NodeId;

    fn footer(doc: &Document) -> NodeId {
        let footer = doc.append_element(doc.root(), "div");
        doc.set_attr(footer, "class", "select-text");
        footer
    }

    #[test]
    fn test_footer_labels() {
        let doc = Document::new();
        let footer = footer(&doc);
        let label = doc.append_element(footer, "span");
        doc.set_attr(label, "class", "font-semibold");
        doc.append_text(label, "Last modified:");

        rescan(&doc, &footer_info());
        assert_eq!(doc.text_content(label), "最終更新：");
    }

    #[test]
    fn test_stats_line_composed_buffer() {
        let doc = Document::new();
        let footer = footer(&doc);
        let line = doc.append_element(footer, "div");
        doc.set_attr(line, "class", "mb-1");
        doc.append_text(line, "301 words · 1810 characters · 7 paragraphs");

        rescan(&doc, &stats_line());
        assert_eq!(doc.text_content(line), "301単語・1810文字・7段落");

        let version = doc.structure_version();
        rescan(&doc, &stats_line());
        assert_eq!(doc.structure_version(), version);
    }

    #[test]
    fn test_footer_date_and_duration_lines() {
        let doc = Document::new();
        let footer = footer(&doc);
        let modified = doc.append_element(footer, "div");
        doc.append_text(modified, "Fri May 30 2025 14:01:45");
        let read_time = doc.append_element(footer, "div");
        doc.set_attr(read_time, "class", "mb-1");
        doc.append_text(read_time, "less than a minute");

        rescan(&doc, &footer_dates());
        assert_eq!(doc.text_content(modified), "2025/05/30 (金) 14:01:45");
        assert_eq!(doc.text_content(read_time), "1分未満");
    }

    #[test]
    fn test_stats_and_dates_regions_do_not_fight() {
        let doc = Document::new();
        let footer = footer(&doc);
        let line = doc.append_element(footer, "div");
        doc.set_attr(line, "class", "mb-1");
        doc.append_text(line, "301 words · 7 paragraphs");

        // Either application order converges to the same text.
        rescan(&doc, &footer_dates());
        rescan(&doc, &stats_line());
        rescan(&doc, &footer_dates());
        assert_eq!(doc.text_content(line), "301単語・7段落");
    }
}
