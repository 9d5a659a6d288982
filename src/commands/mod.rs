pub mod run;
pub mod tree;
