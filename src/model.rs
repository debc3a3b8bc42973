use serde::Deserialize;

/// A spot or alert, as far as this tool cares about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub association: String,
    pub summit: String,
    pub timestamp: String,
    pub frequency: String,
    pub callsign: String,
}

/// One element of `/api/spots/-{hours}/all`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotItem {
    pub association_code: String,
    pub summit_code: String,
    pub time_stamp: String,
    pub frequency: Option<String>,
    pub activator_callsign: Option<String>,
}

/// One element of `/api/alerts`. Same shape as a spot except for the callsign key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertItem {
    pub association_code: String,
    pub summit_code: String,
    pub time_stamp: String,
    pub frequency: Option<String>,
    pub activating_callsign: Option<String>,
}

/// `/api/summits/{assoc}/{summit}`; only the fields we read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummitInfo {
    pub name: Option<String>,
    pub restriction_list: Option<Vec<serde_json::Value>>,
}

impl SummitInfo {
    pub fn is_restricted(&self) -> bool {
        self.restriction_list.as_ref().is_some_and(|l| !l.is_empty())
    }
}

impl From<SpotItem> for Activation {
    fn from(s: SpotItem) -> Self {
        Activation {
            association: s.association_code,
            summit: s.summit_code,
            timestamp: s.time_stamp,
            frequency: s.frequency.unwrap_or_default(),
            callsign: s.activator_callsign.unwrap_or_default(),
        }
    }
}

impl From<AlertItem> for Activation {
    fn from(a: AlertItem) -> Self {
        Activation {
            association: a.association_code,
            summit: a.summit_code,
            timestamp: a.time_stamp,
            frequency: a.frequency.unwrap_or_default(),
            callsign: a.activating_callsign.unwrap_or_default(),
        }
    }
}
