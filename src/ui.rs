use crate::ogp::OpenGraphData;

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// One `key: value` line per property, keys sorted and coloured green.
pub fn render_text(data: &OpenGraphData) -> String {
    data.iter()
        .map(|(key, value)| format!("{GREEN}{key}{RESET}: {value}\n"))
        .collect()
}

/// Pretty JSON object, two-space indent.
pub fn render_json(data: &OpenGraphData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
