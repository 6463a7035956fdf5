//! URL utilities for wordcrawl
//!
//! This module provides start-URL validation, host:port and protocol
//! extraction, relative link resolution, and the same-site test used by the
//! internal-links filter.

mod address;
mod validate;

pub use address::{host_port, protocol, resolve_relative, same_site};
pub use validate::{is_valid_http_url, parse_http_url};
