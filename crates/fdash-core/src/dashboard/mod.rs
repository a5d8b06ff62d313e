//! Dashboard assembly: combines extracted signals with raw report sections
//! into renderable panel data.

mod assembler;
pub mod export;
pub mod format;
pub mod model;
pub mod tone;

pub use assembler::{AssemblyResult, DashboardAssembler};
pub use export::{render_report_text, report_file_name};
pub use model::*;
