pub mod blog;
pub mod user;

pub use blog::MemoryBlogRepository;
pub use user::MemoryUserRepository;
