pub mod record;

pub use record::extent_from_record;
