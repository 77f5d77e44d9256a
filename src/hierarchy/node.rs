use std::collections::HashMap;

/// One `<node .../>` element of a uiautomator hierarchy dump, reduced to its
/// attribute map. Ephemeral: lives only for the duration of one resolution
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct UiNode {
    pub attributes: HashMap<String, String>,
}

impl UiNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }
}

/// Scan a hierarchy dump for self-closing `<node ... />` elements.
///
/// The uiautomator dump is in practice a flat, attribute-only node list, so
/// this is deliberately not a general XML parser: only the self-closing
/// token pattern is recognized, open `<node ...>` tags and anything nested
/// inside them are skipped. Attribute values are taken verbatim (no entity
/// unescaping), matching how recorded locator values were captured.
pub fn parse_nodes(xml: &str) -> Vec<UiNode> {
    let mut nodes = Vec::new();
    let mut rest = xml;

    while let Some(start) = rest.find("<node") {
        let after_tag = &rest[start + "<node".len()..];

        // The token must be exactly "<node", not a longer tag name.
        let boundary_ok = after_tag
            .chars()
            .next()
            .map(|c| c.is_whitespace() || c == '/' || c == '>')
            .unwrap_or(false);

        let Some(end) = after_tag.find('>') else {
            break;
        };

        let tag_body = &after_tag[..end];
        if boundary_ok && tag_body.trim_end().ends_with('/') {
            let attrs_text = tag_body.trim_end().trim_end_matches('/');
            nodes.push(UiNode {
                attributes: parse_attributes(attrs_text),
            });
        }

        rest = &after_tag[end + 1..];
    }

    nodes
}

/// Generic `key="value"` attribute scan over one tag's text.
fn parse_attributes(text: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    let mut rest = text;

    while let Some(eq) = rest.find("=\"") {
        let key = rest[..eq]
            .rsplit(|c: char| c.is_whitespace())
            .next()
            .unwrap_or("")
            .trim();
        let value_start = &rest[eq + 2..];

        let Some(close) = value_start.find('"') else {
            break;
        };

        if !key.is_empty() {
            attributes.insert(key.to_string(), value_start[..close].to_string());
        }
        rest = &value_start[close + 1..];
    }

    attributes
}
