//! DNS-01 challenge client for the PowerDNS Admin API
//!
//! Supported features:
//! - Zone resolution by walking domain-label suffixes, most specific first
//! - Idempotent publish/remove of challenge TXT records via RRset patches
//! - Pluggable HTTP transport
//!
//! # Example
//! ```no_run
//! use pdnsadmin_dns01::client::{Credentials, PdnsAdminClient};
//!
//! let client = PdnsAdminClient::new(Credentials::new(
//!     "secret",
//!     "http://localhost:80/api/v1",
//!     "localhost",
//! ));
//! ```

// Copyright 2025 pdnsadmin-dns01 authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

pub(crate) mod providers;
pub(crate) mod utils;
pub mod client;
pub mod error;
