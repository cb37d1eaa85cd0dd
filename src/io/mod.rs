pub mod measurements;

pub use measurements::{read_labeled_measurements_csv, read_measurements_csv};
