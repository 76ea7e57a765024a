pub mod health_queries;
pub mod status_queries;
