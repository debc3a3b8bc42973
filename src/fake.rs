// In-memory SummitLookup for tests.
use crate::errors::AppError;
use crate::model::{Activation, SummitInfo};
use crate::sota::SummitLookup;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub fn activation(assoc: &str, summit: &str, timestamp: &str) -> Activation {
    Activation {
        association: assoc.into(),
        summit: summit.into(),
        timestamp: timestamp.into(),
        frequency: "14.062 CW".into(),
        callsign: "N0CALL".into(),
    }
}

/// Unknown summits answer like a 404; feeds left unset answer like a 500.
#[derive(Default)]
pub struct FakeLookup {
    summits: HashMap<(String, String), (String, bool)>,
    spots: Option<Vec<Activation>>,
    alerts: Option<Vec<Activation>>,
    summit_calls: Cell<usize>,
    queried: RefCell<Vec<String>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summit(mut self, assoc: &str, summit: &str, name: &str, restricted: bool) -> Self {
        self.summits
            .insert((assoc.into(), summit.into()), (name.into(), restricted));
        self
    }

    pub fn with_spots(mut self, spots: Vec<Activation>) -> Self {
        self.spots = Some(spots);
        self
    }

    pub fn with_alerts(mut self, alerts: Vec<Activation>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    pub fn summit_calls(&self) -> usize {
        self.summit_calls.get()
    }

    /// `assoc/summit` of every summit request, in order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl SummitLookup for FakeLookup {
    fn try_summit(&self, assoc: &str, summit: &str) -> Result<SummitInfo, AppError> {
        self.summit_calls.set(self.summit_calls.get() + 1);
        self.queried.borrow_mut().push(format!("{}/{}", assoc, summit));
        match self.summits.get(&(assoc.to_string(), summit.to_string())) {
            Some((name, restricted)) => Ok(SummitInfo {
                name: Some(name.clone()),
                restriction_list: Some(if *restricted {
                    vec![serde_json::json!({"restrictionType": "test"})]
                } else {
                    vec![]
                }),
            }),
            None => Err(AppError::Status {
                url: format!("fake://api/summits/{}/{}", assoc, summit),
                status: 404,
            }),
        }
    }

    fn try_spots(&self, hours: u32) -> Result<Vec<Activation>, AppError> {
        self.spots.clone().ok_or_else(|| AppError::Status {
            url: format!("fake://api/spots/-{}/all", hours),
            status: 500,
        })
    }

    fn try_alerts(&self) -> Result<Vec<Activation>, AppError> {
        self.alerts.clone().ok_or_else(|| AppError::Status {
            url: "fake://api/alerts".into(),
            status: 500,
        })
    }
}
