pub mod ordered_set;
pub mod set_ops;
