use serde::{Deserialize, Serialize};

/// One row of the endpoint dropdown: either a selectable endpoint or a
/// section header.
///
/// Serializes with the camelCase field names the UI renders from
/// (`textBy`, `isHeader`, ...). Optional fields are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointOption {
    /// Logo name for the chain icon; absent for plain headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Localized display label.
    pub text: String,
    /// Secondary label (host, address); empty for headers.
    pub text_by: String,
    /// Endpoint address; empty for headers.
    pub value: String,
    /// Short name used for alternate domain resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnslink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_child: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_development: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_header: Option<bool>,
    /// Soft-disable: kept in the source lists, dropped from the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

impl EndpointOption {
    /// A non-selectable section separator.
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_header: Some(true),
            ..Default::default()
        }
    }

    /// A selectable endpoint row.
    pub fn entry(
        text: impl Into<String>,
        text_by: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            text_by: text_by.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_dnslink(mut self, dnslink: impl Into<String>) -> Self {
        self.dnslink = Some(dnslink.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_disabled = Some(true);
        self
    }

    pub fn development(mut self) -> Self {
        self.is_development = Some(true);
        self
    }

    pub fn is_header(&self) -> bool {
        self.is_header.unwrap_or(false)
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled.unwrap_or(false)
    }

    pub fn is_development(&self) -> bool {
        self.is_development.unwrap_or(false)
    }

    /// Whether the row can be picked in the dropdown.
    pub fn is_selectable(&self) -> bool {
        !self.is_header() && !self.value.is_empty()
    }
}
