use crate::errors::AppError;
use crate::model::{Activation, AlertItem, SpotItem, SummitInfo};
use log::{debug, trace, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_ROOT: &str = "https://api2.sota.org.uk/";

/// Everything the report needs from the SOTA API.
///
/// Implementors provide the fallible `try_*` calls. The plain methods are what
/// the report uses: any failure (transport, non-200, undecodable body) collapses
/// to a neutral value (`""`, `false`, empty list) and is only logged at debug.
pub trait SummitLookup {
    fn try_summit(&self, assoc: &str, summit: &str) -> Result<SummitInfo, AppError>;
    fn try_spots(&self, hours: u32) -> Result<Vec<Activation>, AppError>;
    fn try_alerts(&self) -> Result<Vec<Activation>, AppError>;

    /// Display name of a summit, or `""`.
    fn name(&self, assoc: &str, summit: &str) -> String {
        match self.try_summit(assoc, summit) {
            Ok(info) => info.name.unwrap_or_default(),
            Err(e) => {
                debug!("name lookup {}/{} failed: {}", assoc, summit, e);
                String::new()
            }
        }
    }

    /// True if the summit reports at least one restriction.
    fn has_restrictions(&self, assoc: &str, summit: &str) -> bool {
        match self.try_summit(assoc, summit) {
            Ok(info) => info.is_restricted(),
            Err(e) => {
                debug!("restriction lookup {}/{} failed: {}", assoc, summit, e);
                false
            }
        }
    }

    fn spots(&self, hours: u32) -> Vec<Activation> {
        self.try_spots(hours).unwrap_or_else(|e| {
            debug!("spot feed failed: {}", e);
            Vec::new()
        })
    }

    fn alerts(&self) -> Vec<Activation> {
        self.try_alerts().unwrap_or_else(|e| {
            debug!("alert feed failed: {}", e);
            Vec::new()
        })
    }
}

/// Blocking HTTP client for the SOTA API.
pub struct SotaClient {
    http: Client,
    api_root: String,
}

impl SotaClient {
    pub fn new(api_root: &str) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(SotaClient {
            http,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url_for(path);
        trace!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(AppError::Status { url, status: status.as_u16() });
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Feeds are decoded item by item so one odd entry doesn't hide the rest.
    fn get_feed<T>(&self, path: &str) -> Result<Vec<Activation>, AppError>
    where
        T: DeserializeOwned + Into<Activation>,
    {
        let items: Vec<serde_json::Value> = self.get_json(path)?;
        let total = items.len();
        let out: Vec<Activation> = items
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| match serde_json::from_value::<T>(v) {
                Ok(item) => Some(item.into()),
                Err(e) => {
                    warn!("{}: skipping item {}: {}", path, i, e);
                    None
                }
            })
            .collect();
        debug!("{}: decoded {} of {} items", path, out.len(), total);
        Ok(out)
    }
}

impl SummitLookup for SotaClient {
    fn try_summit(&self, assoc: &str, summit: &str) -> Result<SummitInfo, AppError> {
        self.get_json(&format!("api/summits/{}/{}", assoc, summit))
    }

    fn try_spots(&self, hours: u32) -> Result<Vec<Activation>, AppError> {
        self.get_feed::<SpotItem>(&format!("api/spots/-{}/all", hours))
    }

    fn try_alerts(&self) -> Result<Vec<Activation>, AppError> {
        self.get_feed::<AlertItem>("api/alerts")
    }
}
