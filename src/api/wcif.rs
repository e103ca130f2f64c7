use serde::Deserialize;

/// Subset of the public WCIF payload this tool reads. Everything is
/// defaulted so a sparse response degrades to empty instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct Wcif {
    #[serde(default)]
    pub events: Vec<WcifEvent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WcifEvent {
    #[serde(default)]
    pub id: String,
}

impl Wcif {
    pub fn event_ids(self) -> Vec<String> {
        self.events.into_iter().map(|e| e.id).collect()
    }
}
