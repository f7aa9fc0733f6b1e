use crate::error::ScrapeError;
use crate::extract;
use scraper::Html;

/// A parsed per-municipality detail page: the three summary counts plus the
/// party columns. `party_names` and `party_votes` are aligned by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub registered: String,
    pub envelopes: String,
    pub valid: String,
    pub party_names: Vec<String>,
    pub party_votes: Vec<String>,
}

/// Parse a municipality detail page.
///
/// The summary cells must each match exactly once, and the party-name and
/// vote-count columns must agree in length; otherwise the row could not be
/// assembled without shifting columns, and the page is rejected.
pub fn parse_detail(html: &str) -> Result<DetailPage, ScrapeError> {
    let doc = Html::parse_document(html);

    let registered = extract::registered(&doc)?;
    let envelopes = extract::envelopes(&doc)?;
    let valid = extract::valid_ballots(&doc)?;
    let party_names = extract::party_names(&doc);
    let party_votes = extract::party_votes(&doc);

    if party_names.len() != party_votes.len() {
        return Err(ScrapeError::MisalignedVotes {
            names: party_names.len(),
            votes: party_votes.len(),
        });
    }

    Ok(DetailPage {
        registered,
        envelopes,
        valid,
        party_names,
        party_votes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_HTML: &str = r#"
    <html><body>
    <table>
      <tr>
        <td class="cislo" headers="sa2">400</td>
        <td class="cislo" headers="sa3">350</td>
        <td class="cislo" headers="sa5">345</td>
        <td class="cislo" headers="sa6">340</td>
      </tr>
    </table>
    <table>
      <tr>
        <td class="cislo" headers="t1sa1 t1sb1">1</td>
        <td class="overflow_name" headers="t1sa1 t1sb2">Party A</td>
        <td class="cislo" headers="t1sa2 t1sb3">200</td>
      </tr>
    </table>
    <table>
      <tr>
        <td class="cislo" headers="t2sa1 t2sb1">2</td>
        <td class="overflow_name" headers="t2sa1 t2sb2">Party B</td>
        <td class="cislo" headers="t2sa2 t2sb3">140</td>
      </tr>
    </table>
    </body></html>
    "#;

    #[test]
    fn test_parse_detail() {
        let detail = parse_detail(DETAIL_HTML).unwrap();
        assert_eq!(detail.registered, "400");
        assert_eq!(detail.envelopes, "350");
        assert_eq!(detail.valid, "340");
        assert_eq!(detail.party_names, vec!["Party A", "Party B"]);
        assert_eq!(detail.party_votes, vec!["200", "140"]);
        assert_eq!(detail.party_names.len(), detail.party_votes.len());
    }

    #[test]
    fn test_misaligned_votes_rejected() {
        // A party row whose vote cell lacks the sb3 headers token
        let html = r#"
        <table><tr><td headers="sa2">400</td><td headers="sa3">350</td><td headers="sa6">340</td></tr></table>
        <table>
          <tr>
            <td class="overflow_name">Party A</td>
            <td class="cislo" headers="t1sa2 t1sb3">200</td>
          </tr>
          <tr>
            <td class="overflow_name">Party B</td>
            <td class="cislo" headers="t1sa2">140</td>
          </tr>
        </table>
        "#;
        let err = parse_detail(html).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MisalignedVotes { names: 2, votes: 1 }
        ));
    }

    #[test]
    fn test_missing_summary_cell_rejected() {
        let html = r#"
        <table><tr><td headers="sa2">400</td><td headers="sa6">340</td></tr></table>
        "#;
        let err = parse_detail(html).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingCell("sa3")));
    }
}
