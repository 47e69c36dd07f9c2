//! Selector parsing and element matching.
//!
//! Supports the slice of CSS selector syntax the region catalog actually
//! uses: tag / `#id` / `.class` / `[attr]` / `[attr="value"]` compounds,
//! descendant and child (`>`) combinators, and comma-separated
//! alternatives. Identifiers accept backslash escapes so utility classes
//! like `md\:text-lg` round-trip.
//!
//! Parsing is the only fallible operation in the crate; it happens at
//! configuration time, never during a re-scan.

use thiserror::Error;

use super::node::ElementData;

// =============================================================================
// Errors
// =============================================================================

/// Selector syntax error, reported at configuration time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character `{0}` in selector")]
    UnexpectedChar(char),
    #[error("unterminated attribute predicate")]
    UnterminatedAttr,
    #[error("dangling combinator")]
    DanglingCombinator,
}

// =============================================================================
// Structure
// =============================================================================

/// A parsed selector list: one or more comma-separated alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: String,
    pub(crate) alternatives: Vec<ComplexSelector>,
}

/// Compounds joined by combinators, leftmost ancestor first.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ComplexSelector {
    /// `(combinator, compound)` pairs; the first combinator is ignored.
    pub parts: Vec<(Combinator, CompoundSelector)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    Descendant,
    Child,
}

/// One simple-selector compound, e.g. `button.primary[role="checkbox"]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrPredicate>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AttrPredicate {
    pub name: String,
    /// `None` tests presence only.
    pub value: Option<String>,
}

// =============================================================================
// Parsing
// =============================================================================

impl Selector {
    /// Parse a selector list.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for alt in split_top_level_commas(source) {
            let alt = alt.trim();
            if alt.is_empty() {
                return Err(SelectorError::Empty);
            }
            alternatives.push(parse_complex(alt)?);
        }
        if alternatives.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    /// The original selector text, for logging.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Split on commas that sit outside `[...]` predicates.
fn split_top_level_commas(source: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in source.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&source[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&source[start..]);
    parts
}

fn parse_complex(source: &str) -> Result<ComplexSelector, SelectorError> {
    let mut parts = Vec::new();
    let mut buf = String::new();
    let mut pending = Combinator::Descendant;
    let mut depth = 0usize;
    let mut chars = source.chars().peekable();

    let flush = |buf: &mut String,
                 pending: &mut Combinator,
                 parts: &mut Vec<(Combinator, CompoundSelector)>|
     -> Result<(), SelectorError> {
        if !buf.is_empty() {
            parts.push((*pending, parse_compound(buf)?));
            buf.clear();
            *pending = Combinator::Descendant;
        }
        Ok(())
    };

    while let Some(ch) = chars.next() {
        match ch {
            '[' => {
                depth += 1;
                buf.push(ch);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                buf.push(ch);
            }
            '>' if depth == 0 => {
                flush(&mut buf, &mut pending, &mut parts)?;
                if parts.is_empty() {
                    return Err(SelectorError::DanglingCombinator);
                }
                pending = Combinator::Child;
            }
            c if c.is_whitespace() && depth == 0 => {
                flush(&mut buf, &mut pending, &mut parts)?;
            }
            '\\' => {
                buf.push(ch);
                if let Some(next) = chars.next() {
                    buf.push(next);
                }
            }
            _ => buf.push(ch),
        }
    }
    flush(&mut buf, &mut pending, &mut parts)?;

    if parts.is_empty() {
        return Err(SelectorError::Empty);
    }
    if depth != 0 {
        return Err(SelectorError::UnterminatedAttr);
    }
    Ok(ComplexSelector { parts })
}

fn parse_compound(source: &str) -> Result<CompoundSelector, SelectorError> {
    let mut compound = CompoundSelector::default();
    let mut chars = source.chars().peekable();

    // Optional leading tag name.
    if let Some(c) = chars.peek() {
        if is_ident_start(*c) {
            compound.tag = Some(parse_ident(&mut chars));
        }
    }

    while let Some(ch) = chars.next() {
        match ch {
            '#' => compound.id = Some(parse_ident(&mut chars)),
            '.' => compound.classes.push(parse_ident(&mut chars)),
            '[' => compound.attrs.push(parse_attr(&mut chars)?),
            other => return Err(SelectorError::UnexpectedChar(other)),
        }
    }

    if compound == CompoundSelector::default() {
        return Err(SelectorError::Empty);
    }
    Ok(compound)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '\\'
}

fn parse_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        match c {
            '\\' => {
                chars.next();
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            c if c.is_alphanumeric() || c == '-' || c == '_' => {
                out.push(c);
                chars.next();
            }
            _ => break,
        }
    }
    out
}

fn parse_attr(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<AttrPredicate, SelectorError> {
    let mut name = String::new();
    let mut value: Option<String> = None;

    while let Some(c) = chars.next() {
        match c {
            ']' => {
                if name.is_empty() {
                    return Err(SelectorError::Empty);
                }
                return Ok(AttrPredicate { name, value });
            }
            '=' => {
                let mut v = String::new();
                let quoted = matches!(chars.peek(), Some('"') | Some('\''));
                let quote = if quoted { chars.next() } else { None };
                while let Some(&vc) = chars.peek() {
                    match quote {
                        Some(q) if vc == q => {
                            chars.next();
                            break;
                        }
                        None if vc == ']' => break,
                        _ => {
                            v.push(vc);
                            chars.next();
                        }
                    }
                }
                value = Some(v);
            }
            c if !c.is_whitespace() => name.push(c),
            _ => {}
        }
    }
    Err(SelectorError::UnterminatedAttr)
}

// =============================================================================
// Matching
// =============================================================================

impl CompoundSelector {
    /// Does this compound match the given element?
    pub(crate) fn matches(&self, el: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if el.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attrs.get("id").map(String::as_str) != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|pred| {
            match (el.attrs.get(&pred.name), &pred.value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
                (None, _) => false,
            }
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
        let mut el = ElementData::new(tag);
        for (k, v) in attrs {
            el.attrs.insert(k.to_string(), v.to_string());
        }
        el
    }

    #[test]
    fn test_parse_alternatives() {
        let sel = Selector::parse("button, span.title, #account-menu").unwrap();
        assert_eq!(sel.alternatives.len(), 3);
    }

    #[test]
    fn test_parse_compound_parts() {
        let sel = Selector::parse("button.primary[role=\"checkbox\"]").unwrap();
        let compound = &sel.alternatives[0].parts[0].1;
        assert_eq!(compound.tag.as_deref(), Some("button"));
        assert_eq!(compound.classes, vec!["primary".to_string()]);
        assert_eq!(compound.attrs[0].name, "role");
        assert_eq!(compound.attrs[0].value.as_deref(), Some("checkbox"));
    }

    #[test]
    fn test_parse_combinators() {
        let sel = Selector::parse(".select-text > div").unwrap();
        let complex = &sel.alternatives[0];
        assert_eq!(complex.parts.len(), 2);
        assert_eq!(complex.parts[1].0, Combinator::Child);

        let sel = Selector::parse(".section-title-bar .title").unwrap();
        let complex = &sel.alternatives[0];
        assert_eq!(complex.parts.len(), 2);
        assert_eq!(complex.parts[1].0, Combinator::Descendant);
    }

    #[test]
    fn test_parse_escaped_class() {
        let sel = Selector::parse(".md\\:text-lg.font-semibold").unwrap();
        let compound = &sel.alternatives[0].parts[0].1;
        assert_eq!(
            compound.classes,
            vec!["md:text-lg".to_string(), "font-semibold".to_string()]
        );
    }

    #[test]
    fn test_parse_attr_value_with_spaces() {
        let sel = Selector::parse("button[title=\"Create a new smart view\"]").unwrap();
        let compound = &sel.alternatives[0].parts[0].1;
        assert_eq!(
            compound.attrs[0].value.as_deref(),
            Some("Create a new smart view")
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("  ,div"), Err(SelectorError::Empty));
        assert_eq!(
            Selector::parse("[placeholder"),
            Err(SelectorError::UnterminatedAttr)
        );
        assert_eq!(
            Selector::parse("> div"),
            Err(SelectorError::DanglingCombinator)
        );
    }

    #[test]
    fn test_compound_matching() {
        let sel = Selector::parse("input[placeholder]").unwrap();
        let compound = &sel.alternatives[0].parts[0].1;
        assert!(compound.matches(&element("input", &[("placeholder", "Search...")])));
        assert!(!compound.matches(&element("input", &[])));
        assert!(!compound.matches(&element("button", &[("placeholder", "x")])));
    }

    #[test]
    fn test_compound_matching_classes_and_id() {
        let sel = Selector::parse("div.text-sm#footer").unwrap();
        let compound = &sel.alternatives[0].parts[0].1;
        assert!(compound.matches(&element(
            "div",
            &[("class", "text-sm extra"), ("id", "footer")]
        )));
        assert!(!compound.matches(&element("div", &[("class", "text-sm")])));
    }
}
