// src/data/mod.rs — Dataset loading, cleaning and derived indexes

pub mod loader;
pub mod record;
pub mod tally;

pub use loader::load_records;
pub use record::{filter_records, RawRow, Record, RecordSet};
pub use tally::{unique_winners, unique_years, TallyEntry, WinTally};
