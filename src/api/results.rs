use serde::Deserialize;

/// Ranks paid out per event.
pub const PODIUM_SIZE: usize = 3;

/// Subset of the results payload this tool reads, defaulted field by field
/// so partial data (an event not yet held, say) parses cleanly.
#[derive(Debug, Default, Deserialize)]
pub struct EventResults {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub results: Vec<RoundResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoundResult {
    #[serde(default)]
    pub wca_id: Option<String>,
}

/// The top three of an event's first round. Missing or null WCA IDs are
/// kept in place so rank positions stay aligned with the original ranking.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Podium {
    pub event_name: String,
    pub wca_ids: Vec<Option<String>>,
}

impl EventResults {
    /// Reduce the response to its podium. With no rounds present both the
    /// identifier list and the display name come back empty.
    pub fn podium(self) -> Podium {
        let Some(top_round) = self.rounds.into_iter().next() else {
            return Podium::default();
        };

        Podium {
            event_name: self.name,
            wca_ids: top_round
                .results
                .into_iter()
                .take(PODIUM_SIZE)
                .map(|r| r.wca_id)
                .collect(),
        }
    }
}
