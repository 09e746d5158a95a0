//! Report rendering
//!
//! Statistics rows are rendered as csv, tsv or an aligned table, always
//! echoed to stdout and optionally mirrored into a file.

mod deliver;
mod format;
mod render;

pub use deliver::{deliver, Delivery};
pub use format::ReportFormat;
pub use render::{render_report, COLUMNS};
