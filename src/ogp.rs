use std::collections::BTreeMap;

use reqwest::Client;
use scraper::Html;

use crate::error::FetchError;

const OPEN_GRAPH_PREFIX: &str = "og:";

/// `og:*` property → content. Ordered, so both output modes list keys sorted.
pub type OpenGraphData = BTreeMap<String, String>;

/// Prepends `http://` unless the input already carries an http(s) scheme.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}

/// GETs `url` and parses whatever comes back as HTML. Status codes are not
/// inspected; an error page is parsed like any other.
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, FetchError> {
    let res = client.get(url).send().await.map_err(FetchError::Request)?;
    tracing::debug!(url, status = %res.status(), "fetched page");
    let body = res.text().await.map_err(FetchError::Body)?;
    Ok(Html::parse_document(&body))
}

pub async fn fetch_open_graph(client: &Client, url: &str) -> Result<OpenGraphData, FetchError> {
    let document = fetch_document(client, url).await?;
    Ok(extract_open_graph(&document))
}

/// Collects `<meta property="og:..." content="...">` pairs in document order.
/// A later tag with the same property replaces an earlier one; tags without
/// content are ignored.
pub fn extract_open_graph(document: &Html) -> OpenGraphData {
    let mut data = OpenGraphData::new();

    for node in document.tree.root().descendants() {
        let Some(element) = node.value().as_element() else {
            continue;
        };
        if element.name() != "meta" {
            continue;
        }

        let mut property = None;
        let mut content = None;
        for (key, value) in element.attrs() {
            match key {
                "property" if value.starts_with(OPEN_GRAPH_PREFIX) => property = Some(value),
                "content" => content = Some(value),
                _ => {}
            }
        }

        if let (Some(property), Some(content)) = (property, content) {
            if !content.is_empty() {
                data.insert(property.to_string(), content.to_string());
            }
        }
    }

    tracing::debug!(properties = data.len(), "extracted OpenGraph data");
    data
}

pub fn extract_open_graph_from_str(html: &str) -> OpenGraphData {
    extract_open_graph(&Html::parse_document(html))
}
