//! Storage adapters

mod in_memory_users;

pub use in_memory_users::InMemoryUserRepository;
