use serde_json::Value;

use super::id_string;

/// HeadHunter id of Moscow, used when the area tree has no literal match.
pub const CAPITAL_AREA_ID: &str = "1";

const CAPITAL_NAMES: [&str; 2] = ["москва", "moscow"];

fn same_name(candidate: Option<&str>, wanted: &str) -> bool {
    candidate.is_some_and(|c| normalize_name(c) == wanted)
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Depth-first search of a HeadHunter `/areas` tree. Every node is
/// `{id, name, areas: [...]}`; the root is an array of countries.
/// Falls back to the capital id only after the whole tree was scanned.
pub fn find_in_area_tree(tree: &Value, name: &str) -> Option<String> {
    let wanted = normalize_name(name);

    fn walk(nodes: &Value, wanted: &str) -> Option<String> {
        for node in nodes.as_array()? {
            if same_name(node.get("name").and_then(Value::as_str), wanted)
                && let Some(id) = id_string(node)
            {
                return Some(id);
            }
            if let Some(found) = node.get("areas").and_then(|children| walk(children, wanted)) {
                return Some(found);
            }
        }
        None
    }

    walk(tree, &wanted).or_else(|| {
        CAPITAL_NAMES
            .contains(&wanted.as_str())
            .then(|| CAPITAL_AREA_ID.to_string())
    })
}

/// Linear scan of SuperJob `/towns` objects by `title`.
pub fn find_in_town_list(towns: &[Value], name: &str) -> Option<String> {
    let wanted = normalize_name(name);
    towns
        .iter()
        .find(|town| same_name(town.get("title").and_then(Value::as_str), &wanted))
        .and_then(id_string)
}
