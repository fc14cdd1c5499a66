// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod symbolic;

pub use symbolic::symbolic_engine::Expr;
pub use symbolic::symbolic_engine_derivatives::{
    Differentiator, PowerRule, differentiate_text, differentiate_text_with,
};
pub use symbolic::symbolic_error::DiffError;
