/// Shared serializable types for recorded request/response traces.
///
/// These mirror the wire format of the platform's records API. They are
/// consumed read-only: the client deserializes them, the renderer reads them,
/// nothing in this crate mutates an entry.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request header carrying the name of the invoked function.
pub const FUNCTION_NAME_HEADER: &str = "X-Fission-Function-Name";

/// One stored trace of a past HTTP request/response pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEntry {
    /// Opaque unique request identifier. Unique within one query result.
    #[serde(rename = "ReqUID")]
    pub req_uid: String,
    /// The recorded request.
    #[serde(rename = "Req")]
    pub req: RecordedRequest,
    /// The recorded response.
    #[serde(rename = "Resp")]
    pub resp: RecordedResponse,
    /// Name of the trigger that produced the request, or empty if none.
    #[serde(rename = "Trigger", default)]
    pub trigger: String,
}

/// The request half of a recorded trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedRequest {
    /// HTTP method (e.g., "GET").
    #[serde(rename = "Method")]
    pub method: String,
    /// Request headers; keys are unique.
    #[serde(rename = "Header", default)]
    pub header: HashMap<String, String>,
}

/// The response half of a recorded trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// HTTP status line as the platform stores it (e.g., "200 OK").
    #[serde(rename = "Status")]
    pub status: String,
}

impl RecordedEntry {
    /// The invoked function's name, read from the request headers.
    ///
    /// Returns the empty string when the header is absent.
    #[must_use]
    pub fn function_name(&self) -> &str {
        self.req
            .header
            .get(FUNCTION_NAME_HEADER)
            .map_or("", String::as_str)
    }
}
