pub mod cgd_queries;
pub mod dump;

pub use cgd_queries::CgdQueries;
