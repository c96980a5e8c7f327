pub mod dass42;
pub mod srq20;
pub mod srq29;
