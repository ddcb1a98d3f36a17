mod memory;
mod postgres;

pub use self::memory::InMemoryProductRepository;
pub use self::postgres::ProductRepository;
