pub mod cleanup_guard;
pub mod generate_args;
pub mod info;
