pub mod detail;
pub mod district;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod listing;
pub mod normalize;

pub use detail::DetailPage;
pub use district::scrape_district;
pub use error::ScrapeError;
pub use listing::{ListingPage, Municipality};
