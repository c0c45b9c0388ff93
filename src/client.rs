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

use async_trait::async_trait;

use crate::error::Error;

pub use crate::providers::pdns_admin::PdnsAdminClient;
pub use crate::utils::request::{DefaultDnsClient, DnsHttpClient, HttpResponse};

/// Connection settings for one PowerDNS Admin endpoint.
///
/// Built explicitly by the caller from wherever its credential store lives;
/// the client never reads configuration from the environment.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// API key sent in the `X-API-Key` header
    pub api_key: String,
    /// Base URL of the API, e.g. `http://localhost:80/api/v1`
    pub api_url: String,
    /// Server ID the zones live under, typically `localhost`
    pub server_id: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            server_id: server_id.into(),
        }
    }
}

/// Capability to answer DNS-01 challenges for a domain.
///
/// The challenge orchestrator drives this trait: `perform` before asking the
/// certificate authority to validate, `cleanup` once validation has settled.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Publishes the validation token at `validation_name`.
    ///
    /// A failure here is fatal for the attempt; the challenge cannot proceed
    /// without the record in place.
    async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), Error>;

    /// Removes the challenge record at `validation_name`, best effort.
    async fn cleanup(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), Error>;
}
