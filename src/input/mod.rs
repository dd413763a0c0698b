//! Loading shock-tube results
//!
//! - **matrix**: raw column-major arrays and the (nt × nx) reshape
//! - **loader**: file discovery, MAT parsing, [`ShockTubeData`]
//!
//! ```rust,ignore
//! use shocktube_plot::input::{discover_result_files, load_result_file};
//!
//! for path in discover_result_files(".".as_ref(), "mat")? {
//!     let data = load_result_file(&path)?;
//!     println!("{}: {} × {}", data.name, data.nt(), data.nx());
//! }
//! ```

pub mod loader;
pub mod matrix;

pub use loader::{
    discover_result_files,
    load_result_file,
    LoadError,
    ShockTubeData,
    RESULT_EXTENSION,
};
pub use matrix::{flatten, reshape, RawArray};
