pub mod progression;

pub use progression::scan_progression;
