mod bundle;
mod files;
mod naming;
mod table;

pub(crate) use bundle::{format_bundle, heavy_separator};
pub(crate) use files::{update_latest_link, write_whole};
pub(crate) use naming::OutputPaths;
pub(crate) use table::{completion_rate, render_log_table};
