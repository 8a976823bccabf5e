use crate::client::HEADER_LINK;
use serde::Serialize;
use url::Url;

/// Paging information parsed from the `Link` header of a Github API response.
///
/// The compare endpoint pages through the commit list once a range exceeds 250 commits.
#[derive(Debug, Default)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = match headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            Some(links) => links,
            None => return pagination,
        };

        for link in links.split(',') {
            let mut segments = link.split(';').map(str::trim);

            // <url>; rel="next"
            let page: usize = match segments
                .next()
                .and_then(|href| href.strip_prefix('<'))
                .and_then(|href| href.strip_suffix('>'))
                .and_then(|href| Url::parse(href).ok())
                .and_then(|url| {
                    url.query_pairs()
                        .find(|(k, _)| k == "page")
                        .and_then(|(_, v)| v.parse().ok())
                }) {
                Some(page) => page,
                None => continue,
            };

            for rel in segments {
                match rel {
                    "rel=\"next\"" => pagination.next_page = Some(page),
                    "rel=\"prev\"" => pagination.prev_page = Some(page),
                    "rel=\"first\"" => pagination.first_page = Some(page),
                    "rel=\"last\"" => pagination.last_page = Some(page),
                    _ => {}
                }
            }
        }

        pagination
    }
}

#[derive(Debug, Default, Serialize)]
pub struct PaginationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
}
