pub mod did_resolver;
pub mod messaging;
