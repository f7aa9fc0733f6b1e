use crate::detail::{parse_detail, DetailPage};
use crate::error::ScrapeError;
use crate::fetch;
use crate::listing::{parse_listing, Municipality};
use anyhow::{Context, Result};
use volby_model::{MunicipalityRow, ResultsTable, TableSchema};

/// Learn the district's party schema from the first municipality.
///
/// Fetches the listing page, then only the first detail page, and takes its
/// party-name sequence as the column schema for the whole district. The
/// remaining municipalities are checked against it during row assembly.
pub async fn discover_schema(
    client: &reqwest::Client,
    listing_url: &str,
) -> Result<TableSchema> {
    tracing::info!(url = %listing_url, "Fetching district listing for schema discovery");
    let html = fetch::fetch_page(client, listing_url).await?;
    let listing = parse_listing(&html)?;

    let first = listing
        .municipalities
        .first()
        .ok_or(ScrapeError::EmptyListing)?;
    tracing::debug!(
        code = %first.code,
        url = %first.detail_url,
        "Reading party list from first municipality"
    );
    let detail_html = fetch::fetch_page(client, &first.detail_url)
        .await
        .with_context(|| format!("detail page for municipality {}", first.code))?;
    let detail = parse_detail(&detail_html)?;

    Ok(TableSchema::new(detail.party_names))
}

/// Fetch every municipality's detail page and assemble one row each,
/// in listing order.
///
/// Each detail page is verified against the discovered schema before its row
/// is built; any fetch, parse, or schema failure aborts the whole assembly.
pub async fn assemble_rows(
    client: &reqwest::Client,
    listing_url: &str,
    schema: &TableSchema,
) -> Result<Vec<MunicipalityRow>> {
    let html = fetch::fetch_page(client, listing_url).await?;
    let listing = parse_listing(&html)?;

    let mut rows = Vec::with_capacity(listing.municipalities.len());
    for municipality in &listing.municipalities {
        tracing::debug!(
            code = %municipality.code,
            url = %municipality.detail_url,
            "Fetching municipality detail"
        );
        let detail_html = fetch::fetch_page(client, &municipality.detail_url)
            .await
            .with_context(|| format!("detail page for municipality {}", municipality.code))?;
        let detail = parse_detail(&detail_html)?;
        rows.push(build_row(municipality, detail, schema)?);
    }

    Ok(rows)
}

/// Zip one municipality's fixed fields with its vote counts.
///
/// The detail page's party order is trusted only after it is shown to equal
/// the discovered schema; otherwise the votes would land in the wrong
/// columns.
pub fn build_row(
    municipality: &Municipality,
    detail: DetailPage,
    schema: &TableSchema,
) -> Result<MunicipalityRow, ScrapeError> {
    if detail.party_names != schema.parties {
        return Err(ScrapeError::SchemaMismatch {
            code: municipality.code.clone(),
        });
    }

    Ok(MunicipalityRow {
        code: municipality.code.clone(),
        location: municipality.name.clone(),
        registered: detail.registered,
        envelopes: detail.envelopes,
        valid: detail.valid,
        votes: detail.party_votes,
    })
}

/// Run the whole pipeline for one district listing URL.
///
/// Schema discovery re-fetches the first municipality, so a district of N
/// municipalities costs N+1 detail fetches plus two listing fetches, all
/// sequential. The table is fully assembled in memory before the caller
/// writes anything, so no failure can leave a partial export behind.
pub async fn scrape_district(listing_url: &str) -> Result<ResultsTable> {
    let client = fetch::client()?;

    let schema = discover_schema(&client, listing_url).await?;
    tracing::info!(parties = schema.parties.len(), "Discovered party schema");

    let rows = assemble_rows(&client, listing_url, &schema).await?;

    let mut table = ResultsTable::new(schema);
    for row in rows {
        table.push(row)?;
    }
    tracing::info!(
        municipalities = table.rows.len(),
        columns = table.schema.width(),
        "Assembled results table"
    );

    Ok(table)
}
