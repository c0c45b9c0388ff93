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

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{Authenticator, Credentials};
use crate::error::Error;
use crate::utils::request::{DefaultDnsClient, DnsHttpClient, HttpResponse};
use crate::utils::serde_utils::option_is_empty;

/// TTL applied to published challenge records.
const CHALLENGE_TTL: u32 = 60;

/// Zone-aware TXT record client for the PowerDNS Admin zones API.
pub struct PdnsAdminClient<T: DnsHttpClient> {
    /// HTTP client for making requests
    http_client: T,
    /// API key sent with every request
    api_key: String,
    /// API endpoint, without trailing slash
    api_url: String,
    /// Server ID the zones live under
    server_id: String,
}

/// One element of the zones-list response; fields beyond the id are ignored.
#[derive(Deserialize)]
struct Zone {
    id: String,
}

/// One PATCH against the RRsets of a zone.
#[derive(Serialize)]
struct RrsetPatch {
    rrsets: Vec<Rrset>,
}

#[derive(Serialize)]
struct Rrset {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    #[serde(skip_serializing_if = "option_is_empty")]
    ttl: Option<u32>,
    changetype: ChangeType,
    #[serde(skip_serializing_if = "option_is_empty")]
    records: Option<Vec<TxtRecordValue>>,
}

#[derive(Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum ChangeType {
    Replace,
    Delete,
}

#[derive(Serialize)]
struct TxtRecordValue {
    content: String,
    disabled: bool,
}

impl RrsetPatch {
    /// REPLACE the TXT RRset at `record_name` with the validation token,
    /// quoted per TXT content-encoding convention.
    fn replace(record_name: &str, validation: &str) -> Self {
        Self {
            rrsets: vec![Rrset {
                name: format!("{}.", record_name),
                record_type: "TXT".to_string(),
                ttl: Some(CHALLENGE_TTL),
                changetype: ChangeType::Replace,
                records: Some(vec![TxtRecordValue {
                    content: format!("\"{}\"", validation),
                    disabled: false,
                }]),
            }],
        }
    }

    /// DELETE the TXT RRset at `record_name`; the server drops every record
    /// under that name and type.
    fn delete(record_name: &str) -> Self {
        Self {
            rrsets: vec![Rrset {
                name: format!("{}.", record_name),
                record_type: "TXT".to_string(),
                ttl: None,
                changetype: ChangeType::Delete,
                records: None,
            }],
        }
    }
}

impl PdnsAdminClient<DefaultDnsClient> {
    /// Constructs a client over the default transport.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http_client(credentials, DefaultDnsClient::new())
    }

    /// Constructs a client with a custom request timeout.
    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> Self {
        Self::with_http_client(credentials, DefaultDnsClient::with_timeout(timeout))
    }
}

impl<T: DnsHttpClient> PdnsAdminClient<T> {
    /// Constructs a client over a caller-supplied HTTP transport.
    pub fn with_http_client(credentials: Credentials, http_client: T) -> Self {
        Self {
            http_client,
            api_key: credentials.api_key,
            api_url: credentials.api_url.trim_end_matches('/').to_string(),
            server_id: credentials.server_id,
        }
    }

    /// Finds the zone managing `domain` by querying its label suffixes in
    /// absolute form, most specific first.
    ///
    /// Returns `Ok(None)` when no suffix matches a zone; the bare top-level
    /// label is never queried. Each call resolves fresh, zone identifiers
    /// are not cached across calls.
    pub async fn resolve_zone(&self, domain: &str) -> Result<Option<String>, Error> {
        let labels: Vec<&str> = domain.split('.').collect();

        for start in 0..labels.len().saturating_sub(1) {
            let candidate = format!("{}.", labels[start..].join("."));
            let url = format!(
                "{}/servers/{}/zones?zone={}",
                self.api_url, self.server_id, candidate
            );

            let response = self
                .http_client
                .request(Method::GET, url, build_headers(&self.api_key)?, None)
                .await?;

            if response.status != StatusCode::OK {
                debug!(
                    "zone lookup for {} returned {}",
                    candidate, response.status
                );
                continue;
            }

            let zones: Vec<Zone> = serde_json::from_str(&response.body)?;
            if let Some(zone) = zones.into_iter().next() {
                return Ok(Some(zone.id));
            }
        }

        Ok(None)
    }

    /// Publishes the validation token as a TXT record for a DNS-01 challenge.
    ///
    /// REPLACE semantics make repeated calls with identical inputs converge
    /// on a single record rather than accumulating duplicates.
    pub async fn add_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        validation: &str,
    ) -> Result<(), Error> {
        let zone_id = self
            .resolve_zone(domain)
            .await?
            .ok_or_else(|| Error::ZoneNotFound(domain.to_string()))?;

        let response = self
            .patch_zone(&zone_id, &RrsetPatch::replace(record_name, validation))
            .await?;

        if response.status != StatusCode::NO_CONTENT {
            return Err(Error::RecordUpdate {
                status: response.status.as_u16(),
                body: response.body,
            });
        }

        info!("successfully added TXT record for {}", record_name);
        Ok(())
    }

    /// Removes the challenge TXT RRset once validation has settled.
    ///
    /// Cleanup is best effort: a zone or record that can no longer be found
    /// is already effectively gone, and no failure on this path may abort the
    /// surrounding certificate issuance. Everything is logged and absorbed.
    /// The DELETE drops all TXT records at `record_name`, not only the one
    /// carrying `_validation`.
    pub async fn del_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        _validation: &str,
    ) -> Result<(), Error> {
        let zone_id = match self.resolve_zone(domain).await {
            Ok(Some(zone_id)) => zone_id,
            Ok(None) => {
                warn!("could not find zone for domain {} during cleanup", domain);
                return Ok(());
            }
            Err(err) => {
                warn!(
                    "zone lookup for {} failed during cleanup: {}",
                    domain, err
                );
                return Ok(());
            }
        };

        match self
            .patch_zone(&zone_id, &RrsetPatch::delete(record_name))
            .await
        {
            Ok(response) if response.status == StatusCode::NO_CONTENT => {
                info!("successfully deleted TXT record for {}", record_name);
            }
            Ok(response) => {
                warn!(
                    "error deleting TXT record: {} - {}",
                    response.status.as_u16(),
                    response.body
                );
            }
            Err(err) => {
                warn!("error deleting TXT record for {}: {}", record_name, err);
            }
        }

        Ok(())
    }

    async fn patch_zone(&self, zone_id: &str, patch: &RrsetPatch) -> Result<HttpResponse, Error> {
        let url = format!(
            "{}/servers/{}/zones/{}",
            self.api_url, self.server_id, zone_id
        );
        let body = serde_json::to_string(patch)?;

        self.http_client
            .request(Method::PATCH, url, build_headers(&self.api_key)?, Some(body))
            .await
    }
}

#[async_trait]
impl<T: DnsHttpClient> Authenticator for PdnsAdminClient<T> {
    async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), Error> {
        self.add_txt_record(domain, validation_name, validation).await
    }

    async fn cleanup(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), Error> {
        self.del_txt_record(domain, validation_name, validation).await
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert("X-API-Key", HeaderValue::from_str(api_key)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}
