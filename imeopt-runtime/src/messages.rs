//! Typed settings requests and their dispatcher.
//!
//! Requests arrive as JSON objects tagged by `type`
//! (`{"type": "GET_SITE_SETTINGS", "domain": "example.jp"}`). Every request
//! yields a [`Response`]; failures never escape as errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use imeopt_core::events;
use imeopt_core::models::{FieldSettings, GlobalSettings, SiteSettings, StorageData};
use imeopt_core::traits::IKeyValueStore;
use imeopt_core::{ImeError, ImeResult};
use imeopt_settings::SettingsManager;

pub const UNKNOWN_MESSAGE_TYPE: &str = "Unknown message type";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    GetGlobalSettings,
    SetGlobalSettings { data: GlobalSettings },
    GetSiteSettings { domain: String },
    SetSiteSettings { domain: String, data: SiteSettings },
    RemoveSiteSettings { domain: String },
    GetAllSiteSettings,
    GetFieldSettings { domain: String, selector: String },
    SetFieldSettings { domain: String, selector: String, data: FieldSettings },
    RemoveFieldSettings { domain: String, selector: String },
    ExportData,
    ImportData { data: StorageData },
}

impl Request {
    /// Wire tags of every request kind.
    pub const KINDS: [&'static str; 11] = [
        "GET_GLOBAL_SETTINGS",
        "SET_GLOBAL_SETTINGS",
        "GET_SITE_SETTINGS",
        "SET_SITE_SETTINGS",
        "REMOVE_SITE_SETTINGS",
        "GET_ALL_SITE_SETTINGS",
        "GET_FIELD_SETTINGS",
        "SET_FIELD_SETTINGS",
        "REMOVE_FIELD_SETTINGS",
        "EXPORT_DATA",
        "IMPORT_DATA",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::GetGlobalSettings => Self::KINDS[0],
            Self::SetGlobalSettings { .. } => Self::KINDS[1],
            Self::GetSiteSettings { .. } => Self::KINDS[2],
            Self::SetSiteSettings { .. } => Self::KINDS[3],
            Self::RemoveSiteSettings { .. } => Self::KINDS[4],
            Self::GetAllSiteSettings => Self::KINDS[5],
            Self::GetFieldSettings { .. } => Self::KINDS[6],
            Self::SetFieldSettings { .. } => Self::KINDS[7],
            Self::RemoveFieldSettings { .. } => Self::KINDS[8],
            Self::ExportData => Self::KINDS[9],
            Self::ImportData { .. } => Self::KINDS[10],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn ok_with(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(reason.into()),
        }
    }
}

/// Serve one typed request.
pub async fn dispatch<S: IKeyValueStore>(
    settings: &SettingsManager<S>,
    request: Request,
) -> Response {
    let kind = request.kind();
    match handle(settings, request).await {
        Ok(response) => response,
        Err(e) => {
            let reason = e.to_string();
            events::request_failed(kind, &reason);
            Response::failure(reason)
        }
    }
}

/// Serve one raw JSON message. Unrecognized `type` tags get
/// [`UNKNOWN_MESSAGE_TYPE`]; a recognized tag with a malformed body is an
/// invalid request.
pub async fn dispatch_value<S: IKeyValueStore>(
    settings: &SettingsManager<S>,
    message: Value,
) -> Response {
    let kind = message.get("type").and_then(Value::as_str);
    let known = kind.filter(|k| Request::KINDS.iter().any(|known| known == k));
    let Some(kind) = known.map(str::to_string) else {
        tracing::debug!(kind = ?kind, "unknown message type");
        return Response::failure(UNKNOWN_MESSAGE_TYPE);
    };

    match serde_json::from_value::<Request>(message) {
        Ok(request) => dispatch(settings, request).await,
        Err(e) => {
            let reason = ImeError::InvalidRequest {
                reason: e.to_string(),
            }
            .to_string();
            events::request_failed(&kind, &reason);
            Response::failure(reason)
        }
    }
}

async fn handle<S: IKeyValueStore>(
    settings: &SettingsManager<S>,
    request: Request,
) -> ImeResult<Response> {
    let response = match request {
        Request::GetGlobalSettings => {
            Response::ok_with(serde_json::to_value(settings.global_settings().await?)?)
        }
        Request::SetGlobalSettings { data } => {
            settings.set_global_settings(&data).await?;
            Response::ok()
        }
        Request::GetSiteSettings { domain } => match settings.site_settings(&domain).await? {
            Some(site) => Response::ok_with(serde_json::to_value(site)?),
            None => Response::ok(),
        },
        Request::SetSiteSettings { domain, data } => {
            settings.set_site_settings(&domain, data).await?;
            Response::ok()
        }
        Request::RemoveSiteSettings { domain } => {
            settings.remove_site_settings(&domain).await?;
            Response::ok()
        }
        Request::GetAllSiteSettings => {
            Response::ok_with(serde_json::to_value(settings.all_site_settings().await?)?)
        }
        Request::GetFieldSettings { domain, selector } => {
            match settings.field_settings(&domain, &selector).await? {
                Some(field) => Response::ok_with(serde_json::to_value(field)?),
                None => Response::ok(),
            }
        }
        Request::SetFieldSettings {
            domain,
            selector,
            data,
        } => {
            settings.set_field_settings(&domain, &selector, data).await?;
            Response::ok()
        }
        Request::RemoveFieldSettings { domain, selector } => {
            settings.remove_field_settings(&domain, &selector).await?;
            Response::ok()
        }
        Request::ExportData => {
            Response::ok_with(serde_json::to_value(settings.export_data().await?)?)
        }
        Request::ImportData { data } => {
            settings.import_data(&data).await?;
            Response::ok()
        }
    };
    Ok(response)
}

/// Why the install hook fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallReason {
    Install,
    Update,
}

/// Write the default global settings on first install. Returns whether
/// anything was written.
pub async fn on_install<S: IKeyValueStore>(
    settings: &SettingsManager<S>,
    reason: InstallReason,
) -> ImeResult<bool> {
    if reason != InstallReason::Install {
        return Ok(false);
    }
    let defaults = settings.defaults().global;
    settings.set_global_settings(&defaults).await?;
    tracing::info!("default settings written on install");
    Ok(true)
}
