//! Course material locations, relative to the materials root

pub const QUICKSTART_DIR: &str = "2hr-quickstart";
pub const QUICKSTART_README: &str = "2hr-quickstart/README.md";

pub const COMPREHENSIVE_DIR: &str = "5day-comprehensive";
pub const COMPREHENSIVE_README: &str = "5day-comprehensive/README.md";

pub const COMPARISON_GUIDE: &str = "course-comparison.md";
