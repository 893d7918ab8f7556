pub mod sqlite;

pub use sqlite::KvRepository;
