//! Small helpers for http(s) links, query strings, dates, random values and
//! string padding.
//!
//! ```
//! use href_kit::{query, Href};
//!
//! let href = Href::new("http://localhost:4200/dashboard?a=b&a=c#top")?;
//! assert_eq!(href.port(), Some("4200"));
//! assert_eq!(query::stringify(&href.query_data()), "a=b&a=c");
//! # Ok::<(), href_kit::Error>(())
//! ```

pub mod date;
pub mod error;
pub mod href;
pub mod math;
pub mod query;
pub mod settings;
pub mod strings;
pub mod utils;

pub use error::{Error, Result};
pub use href::Href;
pub use query::{QueryData, QueryValue};
