/// Cache store adapters for the local inventory snapshot
mod file_cache_store;
mod memory_cache_store;

pub use file_cache_store::FileSystemCacheStore;
pub use memory_cache_store::InMemoryCacheStore;
