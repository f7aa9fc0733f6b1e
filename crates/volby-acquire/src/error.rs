use thiserror::Error;

/// Structured failures of extraction and row assembly.
///
/// Every variant is fatal to the run: a missing or misaligned field would
/// shift every downstream column, and the table has no way to represent a
/// partial row. Callers propagate these up to the binary, which decides
/// termination.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no cell with headers token '{0}' in document")]
    MissingCell(&'static str),

    #[error("expected exactly one cell with headers token '{what}', found {count}")]
    AmbiguousCell { what: &'static str, count: usize },

    #[error("listing columns misaligned: {codes} codes, {names} names, {links} detail links")]
    MisalignedListing {
        codes: usize,
        names: usize,
        links: usize,
    },

    #[error("detail page lists {names} parties but {votes} vote counts")]
    MisalignedVotes { names: usize, votes: usize },

    #[error("listing page contains no municipalities")]
    EmptyListing,

    #[error("party list for municipality {code} does not match the discovered header")]
    SchemaMismatch { code: String },
}
