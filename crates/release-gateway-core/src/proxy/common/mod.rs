pub mod client_builder;
pub mod trace_id;
