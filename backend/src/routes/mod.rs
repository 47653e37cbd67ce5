pub mod search;
pub mod similar_schools;
