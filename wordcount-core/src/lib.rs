//! Case-insensitive word frequency tables and the reports printed from them.

pub mod error;
pub mod mode;
pub mod reporter;
pub mod table;
pub mod util;

pub use error::{Error, Result};
pub use mode::Mode;
pub use reporter::{format_line, render_alphabetical, render_top, Report, DEFAULT_TOP_LIMIT};
pub use table::{build_frequency_table, FrequencyTable};
