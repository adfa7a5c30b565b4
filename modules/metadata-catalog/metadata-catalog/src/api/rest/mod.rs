pub mod assembler;
pub mod dto;
pub mod envelope;
pub mod handlers;
pub mod routes;
