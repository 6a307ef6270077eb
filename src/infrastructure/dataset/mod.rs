mod csv_reader;

pub use csv_reader::{RawListing, RawRecord, read_listings_file, read_raw_listings};
