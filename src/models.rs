//! Postman Collection v2.1 descriptors for the folders this tool inserts
//!
//! Only the shapes the patcher emits are modelled here. Field order follows
//! what Postman itself writes, so serialized folders read naturally next to
//! the existing ones.

use crate::constants::BASE_URL_VAR;
use serde::Serialize;
use serde_json::Value;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// HTTP Header
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn json_content_type() -> Self {
        Header::new("Content-Type", "application/json")
    }
}

/// Query parameter. Disabled parameters are listed in Postman but not sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl QueryParam {
    /// Parameter sent with the request
    pub fn enabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        QueryParam {
            key: key.into(),
            value: value.into(),
            description: None,
            disabled: false,
        }
    }

    /// Optional filter, shown unticked in Postman
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        QueryParam {
            disabled: true,
            ..QueryParam::enabled(key, value)
        }
    }

    pub fn described(
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        QueryParam {
            description: Some(description.into()),
            ..QueryParam::enabled(key, value)
        }
    }
}

/// Structured URL: raw string plus its decomposed parts
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
}

impl Url {
    /// Builds a `{{baseUrl}}`-relative URL. Only enabled parameters are
    /// rendered into `raw`.
    pub fn new(path: &[&str], query: Vec<QueryParam>) -> Self {
        let mut raw = format!("{}/{}", BASE_URL_VAR, path.join("/"));

        let sent: Vec<String> = query
            .iter()
            .filter(|q| !q.disabled)
            .map(|q| format!("{}={}", q.key, q.value))
            .collect();
        if !sent.is_empty() {
            raw.push('?');
            raw.push_str(&sent.join("&"));
        }

        Url {
            raw,
            host: vec![BASE_URL_VAR.to_string()],
            path: path.iter().map(|s| s.to_string()).collect(),
            query,
        }
    }

    /// Path template as documented, e.g. `/api/invoices/{{invoiceId}}`
    pub fn path_template(&self) -> String {
        format!("/{}", self.path.join("/"))
    }
}

/// Raw request body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

impl Body {
    /// Raw body holding `payload` pretty-printed with two-space indentation
    pub fn json(payload: &Value) -> Self {
        Body {
            mode: String::from("raw"),
            raw: format!("{:#}", payload),
        }
    }
}

/// A single HTTP request template
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Request {
    pub method: HttpMethod,
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
    pub description: String,
}

impl Request {
    pub fn new(method: HttpMethod, url: Url, description: impl Into<String>) -> Self {
        Request {
            method,
            header: Vec::new(),
            body: None,
            url,
            description: description.into(),
        }
    }

    /// Attaches a JSON body and the matching Content-Type header
    pub fn with_json_body(mut self, payload: Value) -> Self {
        if !self
            .header
            .iter()
            .any(|h| h.key.eq_ignore_ascii_case("content-type"))
        {
            self.header.push(Header::json_content_type());
        }
        self.body = Some(Body::json(&payload));
        self
    }
}

/// Named request inside a folder
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestItem {
    pub name: String,
    pub request: Request,
    /// Saved example responses, always empty for generated items
    pub response: Vec<Value>,
}

impl RequestItem {
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        RequestItem {
            name: name.into(),
            request,
            response: Vec::new(),
        }
    }
}

/// A named group of requests
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Folder {
    pub name: String,
    pub description: String,
    pub item: Vec<RequestItem>,
}

impl Folder {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        item: Vec<RequestItem>,
    ) -> Self {
        Folder {
            name: name.into(),
            description: description.into(),
            item,
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.item.len()
    }
}

/// Collection-scoped variable, identified by `key`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub var_type: String,
}

impl Variable {
    pub fn string(key: impl Into<String>) -> Self {
        Variable {
            key: key.into(),
            value: String::new(),
            var_type: String::from("string"),
        }
    }
}
