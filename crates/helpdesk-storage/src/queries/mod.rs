pub mod schema_ops;
pub mod ticket_crud;
pub mod vector_search;
