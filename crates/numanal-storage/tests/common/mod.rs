pub mod store_behavior;
