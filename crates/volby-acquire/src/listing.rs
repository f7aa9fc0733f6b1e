use crate::error::ScrapeError;
use crate::extract;
use scraper::Html;

/// One municipality as enumerated on a district listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Municipality {
    pub code: String,
    pub name: String,
    pub detail_url: String,
}

/// A parsed district listing page: all municipalities in listing order.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub municipalities: Vec<Municipality>,
}

/// Parse a district listing page.
///
/// Codes, names, and detail links are extracted as three independent column
/// queries; the source HTML guarantees only by convention that they agree in
/// length and order. A disagreement would silently misalign every row, so it
/// is rejected here instead of zipped away.
pub fn parse_listing(html: &str) -> Result<ListingPage, ScrapeError> {
    let doc = Html::parse_document(html);

    let codes = extract::codes(&doc);
    let names = extract::names(&doc);
    let urls = extract::detail_urls(&doc);

    if codes.len() != names.len() || codes.len() != urls.len() {
        return Err(ScrapeError::MisalignedListing {
            codes: codes.len(),
            names: names.len(),
            links: urls.len(),
        });
    }

    let municipalities = codes
        .into_iter()
        .zip(names)
        .zip(urls)
        .map(|((code, name), detail_url)| Municipality {
            code,
            name,
            detail_url,
        })
        .collect();

    Ok(ListingPage { municipalities })
}
