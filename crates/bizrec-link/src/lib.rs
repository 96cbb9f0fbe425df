//! Record linkage across the canonical listing tables.
//!
//! Linking runs in four stages:
//! 1. Social rows are joined to Web rows on domain, keeping every Social row
//! 2. Stage-1 rows are corroborated against the directory on an alternate
//!    `{company_name, phone, domain}` key, chosen by whether the Social and Web
//!    company names agree
//! 3. The result is projected onto the output fields
//! 4. Rows are stably sorted by the Social domain, name, category and location

mod error;
mod join;
mod linker;
mod resolve;

pub use error::{LinkError, Result};
pub use join::{SecondaryCounts, join_primary, join_secondary};
pub use linker::{LinkReport, LinkedTable, link};
pub use resolve::{project, sort_by_keys, sort_resolved};
