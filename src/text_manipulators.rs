use scraper::Node;
use ego_tree::NodeRef;

/// Concatenated text of a node and all of its descendants, in document order.
pub fn node_text(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let Some(fragment) = descendant.value().as_text() {
            text.push_str(fragment);
        }
    }
    text
}

/// Splits a cell value like " 2190, 2172 ,2238" into trimmed tokens.
/// Every comma-delimited piece becomes a token; no numeric validation.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}
