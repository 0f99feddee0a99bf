pub mod binding;
pub mod class;
pub mod expr;
pub mod func;
pub mod node;
pub mod stmt;
pub mod symbol;
