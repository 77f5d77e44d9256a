use crate::hierarchy::node::UiNode;

/// The understood xpath subset, as attribute assertions evaluated against a
/// node's attribute map: an optional leading class segment, exact-equality
/// predicates (`[@attr="value"]`) and substring predicates
/// (`contains(@attr, "value")`).
///
/// Arbitrary XPath (axes, positional predicates, boolean operators) is not
/// evaluated. Unsupported predicates are simply not extracted, so they never
/// constrain the match; the original recorder behaved the same way and the
/// degrade-to-no-filter semantics are intentional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XPathFilter {
    pub class: Option<String>,
    pub equals: Vec<(String, String)>,
    pub contains: Vec<(String, String)>,
}

impl XPathFilter {
    pub fn matches(&self, node: &UiNode) -> bool {
        if let Some(class) = &self.class {
            if node.attr("class") != Some(class.as_str()) {
                return false;
            }
        }

        for (attr, expected) in &self.equals {
            if node.attr(attr) != Some(expected.as_str()) {
                return false;
            }
        }

        for (attr, needle) in &self.contains {
            match node.attr(attr) {
                Some(value) if value.contains(needle.as_str()) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Extract the supported assertions from an xpath expression.
pub fn parse_xpath_filter(xpath: &str) -> XPathFilter {
    XPathFilter {
        class: parse_class_segment(xpath),
        equals: parse_equality_predicates(xpath),
        contains: parse_contains_predicates(xpath),
    }
}

/// Leading `//ClassName` segment, if any. `//*` means "any class" and
/// extracts no filter.
fn parse_class_segment(xpath: &str) -> Option<String> {
    let rest = xpath.strip_prefix("//")?;
    let end = rest.find('[').unwrap_or(rest.len());
    let class = &rest[..end];

    if class.is_empty() || class == "*" || class.contains('/') {
        return None;
    }
    Some(class.to_string())
}

/// `@attr="value"` / `@attr='value'` occurrences. Predicates wrapped in
/// functions (`contains(@a, ..)`, `normalize-space(@a)=..`) do not match
/// this shape and are left to the other extractors or dropped.
fn parse_equality_predicates(xpath: &str) -> Vec<(String, String)> {
    let mut predicates = Vec::new();
    let mut rest = xpath;

    while let Some(at) = rest.find('@') {
        rest = &rest[at + 1..];

        let Some((attr, after_attr)) = take_attr_name(rest) else {
            continue;
        };
        let Some(after_eq) = after_attr.strip_prefix('=') else {
            continue;
        };
        let Some((value, _)) = take_quoted(after_eq) else {
            continue;
        };

        predicates.push((attr.to_string(), value.to_string()));
    }

    predicates
}

/// `contains(@attr, "value")` occurrences, with optional whitespace around
/// the comma.
fn parse_contains_predicates(xpath: &str) -> Vec<(String, String)> {
    let mut predicates = Vec::new();
    let mut rest = xpath;

    while let Some(start) = rest.find("contains(@") {
        rest = &rest[start + "contains(@".len()..];

        let Some((attr, after_attr)) = take_attr_name(rest) else {
            continue;
        };
        let after_comma = after_attr.trim_start();
        let Some(after_comma) = after_comma.strip_prefix(',') else {
            continue;
        };
        let Some((value, after_value)) = take_quoted(after_comma.trim_start()) else {
            continue;
        };
        if !after_value.starts_with(')') {
            continue;
        }

        predicates.push((attr.to_string(), value.to_string()));
    }

    predicates
}

/// Leading attribute name: alphanumerics, `-` and `_`.
fn take_attr_name(input: &str) -> Option<(&str, &str)> {
    let len = input
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
        .count();
    if len == 0 {
        return None;
    }
    Some(input.split_at(len))
}

/// Leading quoted string, single or double quotes.
fn take_quoted(input: &str) -> Option<(&str, &str)> {
    let quote = input.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &input[1..];
    let close = body.find(quote)?;
    Some((&body[..close], &body[close + 1..]))
}
