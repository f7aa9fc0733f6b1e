use thiserror::Error;

/// Labels of the fixed leading columns of every results table.
///
/// The remaining columns are the party names discovered at runtime from the
/// first municipality's detail page; their count varies per district.
pub const FIXED_COLUMNS: [&str; 5] = ["code", "location", "registered", "envelopes", "valid"];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("row for municipality {code} has {got} fields, table schema has {expected}")]
    RowWidth {
        code: String,
        expected: usize,
        got: usize,
    },
}

/// The column schema of one district's results table.
///
/// Holds the ordered party list discovered from the first municipality.
/// Every municipality in the district is expected to report the same parties
/// in the same order; row assembly verifies this before accepting a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub parties: Vec<String>,
}

impl TableSchema {
    pub fn new(parties: Vec<String>) -> Self {
        Self { parties }
    }

    /// Full header row: the five fixed labels followed by the party names.
    pub fn header(&self) -> Vec<String> {
        FIXED_COLUMNS
            .iter()
            .map(|s| s.to_string())
            .chain(self.parties.iter().cloned())
            .collect()
    }

    /// Number of fields in the header and in every conforming row.
    pub fn width(&self) -> usize {
        FIXED_COLUMNS.len() + self.parties.len()
    }
}

/// One municipality's results: the five fixed fields plus one vote count per
/// party, aligned with the schema's party order. Constructed once during row
/// assembly and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityRow {
    pub code: String,
    pub location: String,
    pub registered: String,
    pub envelopes: String,
    pub valid: String,
    pub votes: Vec<String>,
}

impl MunicipalityRow {
    /// Flatten into the delimited-output field sequence.
    pub fn record(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.width());
        fields.push(self.code.clone());
        fields.push(self.location.clone());
        fields.push(self.registered.clone());
        fields.push(self.envelopes.clone());
        fields.push(self.valid.clone());
        fields.extend(self.votes.iter().cloned());
        fields
    }

    pub fn width(&self) -> usize {
        FIXED_COLUMNS.len() + self.votes.len()
    }
}

/// A fully assembled results table: schema plus one row per municipality,
/// in listing order.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    pub schema: TableSchema,
    pub rows: Vec<MunicipalityRow>,
}

impl ResultsTable {
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Append a row, rejecting any whose width disagrees with the schema.
    pub fn push(&mut self, row: MunicipalityRow) -> Result<(), TableError> {
        let expected = self.schema.width();
        let got = row.width();
        if got != expected {
            return Err(TableError::RowWidth {
                code: row.code,
                expected,
                got,
            });
        }
        self.rows.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> TableSchema {
        TableSchema::new(vec!["Party A".to_string(), "Party B".to_string()])
    }

    fn sample_row() -> MunicipalityRow {
        MunicipalityRow {
            code: "500054".to_string(),
            location: "Alšovice".to_string(),
            registered: "400".to_string(),
            envelopes: "350".to_string(),
            valid: "340".to_string(),
            votes: vec!["200".to_string(), "140".to_string()],
        }
    }

    #[test]
    fn test_header_composition() {
        let schema = sample_schema();
        let header = schema.header();
        assert_eq!(
            header,
            vec!["code", "location", "registered", "envelopes", "valid", "Party A", "Party B"]
        );
        assert_eq!(header.len(), FIXED_COLUMNS.len() + schema.parties.len());
        assert_eq!(header.len(), schema.width());
    }

    #[test]
    fn test_record_matches_header_width() {
        let schema = sample_schema();
        let row = sample_row();
        assert_eq!(row.record().len(), schema.header().len());
        assert_eq!(
            row.record(),
            vec!["500054", "Alšovice", "400", "350", "340", "200", "140"]
        );
    }

    #[test]
    fn test_push_accepts_conforming_row() {
        let mut table = ResultsTable::new(sample_schema());
        table.push(sample_row()).unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_push_rejects_wrong_width() {
        let mut table = ResultsTable::new(sample_schema());
        let mut row = sample_row();
        row.votes.pop();
        let err = table.push(row).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowWidth { expected: 7, got: 6, .. }
        ));
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_empty_party_list_still_has_fixed_columns() {
        let schema = TableSchema::new(Vec::new());
        assert_eq!(schema.header().len(), 5);
        assert_eq!(schema.width(), 5);
    }
}
