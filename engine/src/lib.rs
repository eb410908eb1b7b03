//! Platform-neutral core of Traduce.
//!
//! This crate holds everything about page translation that does not need a
//! browser: language resolution, the bundle tree and its dotted-path
//! lookup, the substitution walk, and the load orchestration. All
//! environmental concerns (DOM, storage, network) enter through the
//! [`Page`], [`PageNode`] and [`BundleSource`] traits, so the whole crate
//! tests headlessly on the host with in-memory fakes.
//!
//! Flow, once per load cycle:
//! ```text
//! resolve(&config, &signals)        -> LangCode
//! load_language(&source, &page, &lang).await
//!     fetch bundle  -> translate_page -> set doc lang -> sync switcher
//!     (or log the failure)
//!     reveal the page, success or not
//! ```
//!
//! The web crate (`traduce-web`) provides the browser-backed trait
//! implementations and the event wiring.

pub mod apply;
pub mod bundle;
pub mod config;
pub mod error;
pub mod loader;
pub mod page;
pub mod resolve;

pub use apply::translate_page;
pub use bundle::{Bundle, Lookup};
pub use config::{Config, LangCode};
pub use error::LoadError;
pub use loader::{load_language, BundleSource};
pub use page::{Page, PageNode};
pub use resolve::{resolve, Signals};
