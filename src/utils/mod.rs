/// Utility modules for common functionality
pub mod count_by;
pub mod cycle;
pub mod deep_clone;
pub mod flatten;
pub mod stack;
