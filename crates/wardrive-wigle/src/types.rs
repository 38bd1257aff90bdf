//! WiGLE search API response types.
//!
//! ## Observed shape from `GET /api/v2/network/search`
//!
//! The envelope always carries `success`; when it is `false` a human
//! `message` explains why (bad credentials, query quota). Result rows use
//! `trilat`/`trilong` for the trilaterated position, `signal` for the best
//! observed strength in dBm (absent on some older rows), and `freenet` as a
//! `"Y"`/`"N"`/`"?"` open-network flag. Everything else (`encryption`,
//! `channel`, `lastupdt`, …) varies by row age and is kept as raw metadata
//! rather than modeled field-by-field.

use serde::Deserialize;
use wardrive_core::{GeoPoint, NetworkRecord};

/// Signal strength assumed when the service omits the field.
pub(crate) const DEFAULT_SIGNAL_DBM: i32 = -100;

/// Top-level envelope from the network search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// `false` when the query or credentials were rejected.
    pub success: bool,

    /// Failure explanation, present when `success` is `false`.
    #[serde(default)]
    pub message: Option<String>,

    /// Rows matching the query across all pages.
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,

    #[serde(default)]
    pub results: Vec<WigleNetwork>,
}

/// A single observed network row.
#[derive(Debug, Deserialize)]
pub struct WigleNetwork {
    /// BSSID, unique per network.
    pub netid: String,

    /// Trilaterated latitude.
    pub trilat: f64,

    /// Trilaterated longitude.
    pub trilong: f64,

    /// Strongest observed signal in dBm. Absent on some older rows.
    #[serde(default)]
    pub signal: Option<i32>,

    /// `"Y"` when the network is known open, `"N"` when secured, `"?"`
    /// when WiGLE has not classified it.
    #[serde(default)]
    pub freenet: Option<String>,

    /// Advertised SSID; absent for hidden networks.
    #[serde(default)]
    pub ssid: Option<String>,

    /// Any remaining row fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WigleNetwork {
    /// Effective signal strength used for filtering, with the service's
    /// missing-field default applied.
    pub(crate) fn signal_dbm(&self) -> i32 {
        self.signal.unwrap_or(DEFAULT_SIGNAL_DBM)
    }

    /// Converts a wire row into the pipeline's record type.
    pub(crate) fn into_record(self) -> NetworkRecord {
        let signal_dbm = self.signal_dbm();
        NetworkRecord {
            id: self.netid,
            position: GeoPoint::new(self.trilat, self.trilong),
            signal_dbm,
            is_open: self.freenet.as_deref() == Some("Y"),
            ssid: self.ssid,
            raw_metadata: self.extra,
        }
    }
}
