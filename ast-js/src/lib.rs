pub mod ast;
pub mod build;
pub mod loc;
pub mod num;
pub mod operator;
pub mod text;

pub use ast::symbol::Ref;
