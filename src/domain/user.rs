pub mod user_registry;
