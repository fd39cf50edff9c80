pub mod record;

pub use record::ResultRecord;
