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

use thiserror::Error;

/// Errors surfaced while publishing or removing challenge records.
///
/// Only the record-publishing path raises these to the caller; cleanup
/// absorbs every failure after logging it.
#[derive(Error, Debug)]
pub enum Error {
    /// No zone on the server covers the domain.
    #[error("could not find zone for domain {0}")]
    ZoneNotFound(String),

    /// The server rejected an RRset change; carries the response verbatim.
    #[error("error updating TXT record: {status} - {body}")]
    RecordUpdate { status: u16, body: String },

    /// The HTTP transport failed before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API key is not representable as an HTTP header value.
    #[error("invalid API key: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// A zone listing came back as something other than a JSON array of zones.
    #[error("malformed zone listing: {0}")]
    Decode(#[from] serde_json::Error),
}
