pub mod content;
pub mod metadata;
pub mod site;
pub mod structured_data;
pub mod timestamp;

pub use content::{FaqEntry, HomeContent};
pub use metadata::{build_metadata, HeadKind};
pub use site::{SiteProfile, ILOVEPLANTCARE};
pub use structured_data::build_structured_data;
pub use timestamp::TimestampView;
