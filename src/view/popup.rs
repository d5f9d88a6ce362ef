use crate::calendar::EventRecord;

/// Detail popup. Starts hidden; only `close` hides it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Popup {
    #[default]
    Hidden,
    Visible(Vec<usize>),
}

impl Popup {
    /// Show `records`, replacing whatever was shown before.
    pub fn open(&mut self, records: Vec<usize>) {
        *self = Self::Visible(records);
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    pub fn details(&self, records: &[EventRecord]) -> Option<Vec<EventDetail>> {
        match self {
            Self::Hidden => None,
            Self::Visible(indices) => Some(
                indices
                    .iter()
                    .filter_map(|&i| records.get(i))
                    .map(EventDetail::from_record)
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub name: String,
    pub time: String,
    pub notes: String,
    pub cost: String,
}

impl EventDetail {
    fn from_record(ev: &EventRecord) -> Self {
        Self {
            name: ev.name().to_string(),
            time: ev.time().to_string(),
            notes: ev.notes().to_string(),
            cost: ev.cost().to_string(),
        }
    }
}
