pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_soon_dir, get_soon_dir, init_local_soon, read_file, state_file};
pub use store::{FileStore, KvStore, MemoryStore};
