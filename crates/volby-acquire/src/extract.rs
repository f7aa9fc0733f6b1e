use crate::error::ScrapeError;
use crate::normalize::normalize;
use scraper::{ElementRef, Html, Selector};

/// Base address the per-municipality detail links are resolved against.
/// The listing pages carry them as relative hrefs like
/// `ps311?xjazyk=CZ&xkraj=2&xobec=500054`.
pub const BASE_URL: &str = "https://volby.cz/pls/ps2017nss";

/// Gather a cell's descendant text, trim it, and normalize NBSP padding.
fn cell_text(cell: ElementRef) -> String {
    let raw: String = cell.text().collect();
    normalize(raw.trim())
}

/// Text of every numeric-code cell (`td.cislo`), in document order.
///
/// On a listing page these are the municipality codes.
pub fn codes(doc: &Html) -> Vec<String> {
    let sel = Selector::parse("td.cislo").expect("valid selector");
    doc.select(&sel).map(cell_text).collect()
}

/// Text of every overflow-name cell (`td.overflow_name`), in document order.
///
/// On a listing page these are the municipality names.
pub fn names(doc: &Html) -> Vec<String> {
    let sel = Selector::parse("td.overflow_name").expect("valid selector");
    doc.select(&sel).map(cell_text).collect()
}

/// Absolute detail URL for every numeric-code cell containing a hyperlink.
pub fn detail_urls(doc: &Html) -> Vec<String> {
    let td_sel = Selector::parse("td.cislo").expect("valid selector");
    let a_sel = Selector::parse("a[href]").expect("valid selector");

    doc.select(&td_sel)
        .filter_map(|td| td.select(&a_sel).next())
        .filter_map(|a| a.value().attr("href"))
        .map(|href| format!("{BASE_URL}/{href}"))
        .collect()
}

/// Registered-voter count: the single cell with headers token `sa2`.
pub fn registered(doc: &Html) -> Result<String, ScrapeError> {
    single_cell(doc, "sa2")
}

/// Envelope count: the single cell with headers token `sa3`.
pub fn envelopes(doc: &Html) -> Result<String, ScrapeError> {
    single_cell(doc, "sa3")
}

/// Valid-ballot count: the single cell with headers token `sa6`.
pub fn valid_ballots(doc: &Html) -> Result<String, ScrapeError> {
    single_cell(doc, "sa6")
}

/// Party names from a detail page: the same overflow-name predicate as
/// [`names`], applied to the per-party table rows.
pub fn party_names(doc: &Html) -> Vec<String> {
    names(doc)
}

/// Per-party vote counts: numeric-code cells with headers token `t1sb3` or
/// `t2sb3`. The two tokens mark the two ballot halves; document order
/// concatenates them into one flat sequence aligned with [`party_names`].
pub fn party_votes(doc: &Html) -> Vec<String> {
    let sel = Selector::parse(r#"td.cislo[headers~="t1sb3"], td.cislo[headers~="t2sb3"]"#)
        .expect("valid selector");
    doc.select(&sel).map(cell_text).collect()
}

/// Find the one `td` whose `headers` attribute carries `token`.
///
/// The headers attribute is a whitespace-separated token list, hence `~=`.
/// Zero or multiple matches are structured errors rather than a silent
/// empty-string or last-match-wins default.
fn single_cell(doc: &Html, token: &'static str) -> Result<String, ScrapeError> {
    let selector = format!(r#"td[headers~="{token}"]"#);
    let sel = Selector::parse(&selector).expect("valid selector");

    let mut matches = doc.select(&sel);
    let first = matches.next().ok_or(ScrapeError::MissingCell(token))?;
    let extra = matches.count();
    if extra > 0 {
        return Err(ScrapeError::AmbiguousCell {
            what: token,
            count: extra + 1,
        });
    }
    Ok(cell_text(first))
}
