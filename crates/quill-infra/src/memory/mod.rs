//! In-memory post store - used when no database is compiled in, and by tests.

mod post;

pub use post::InMemoryPostRepository;
