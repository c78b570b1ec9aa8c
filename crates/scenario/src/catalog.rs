/// Phone number of the voice agent. Dialing it is the host UI's business;
/// this crate only carries the catalog data.
pub const AGENT_NUMBER: &str = "+34911676409";

/// The logistics scenarios the assistant can be started in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    specta::Type,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UseCase {
    Delays,
    WhereIsBox,
    OperationalLogistics,
}

#[derive(Debug, Clone, Copy, serde::Serialize, specta::Type)]
pub struct UseCaseConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub agent_number: &'static str,
}

const DELAYS: UseCaseConfig = UseCaseConfig {
    title: "Delays",
    description: "Track delays for warehouses and routes. Get real-time updates on shipments and deliveries.",
    agent_number: AGENT_NUMBER,
};

const WHERE_IS_BOX: UseCaseConfig = UseCaseConfig {
    title: "Where is a Box?",
    description: "Locate any box across tracks, routes, or warehouses. Instant location tracking and status updates.",
    agent_number: AGENT_NUMBER,
};

const OPERATIONAL_LOGISTICS: UseCaseConfig = UseCaseConfig {
    title: "Operational Logistics",
    description: "View incoming and outgoing routes, track boxes in transit, and manage logistics operations.",
    agent_number: AGENT_NUMBER,
};

impl UseCase {
    pub const ALL: [Self; 3] = [Self::Delays, Self::WhereIsBox, Self::OperationalLogistics];

    pub fn config(self) -> &'static UseCaseConfig {
        match self {
            Self::Delays => &DELAYS,
            Self::WhereIsBox => &WHERE_IS_BOX,
            Self::OperationalLogistics => &OPERATIONAL_LOGISTICS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn kebab_case_names_round_trip() {
        for use_case in UseCase::ALL {
            let name = use_case.to_string();
            assert_eq!(UseCase::from_str(&name).unwrap(), use_case);
        }
        assert_eq!(UseCase::from_str("where-is-box").unwrap(), UseCase::WhereIsBox);
    }

    #[test]
    fn every_use_case_has_catalog_data() {
        for use_case in UseCase::ALL {
            let config = use_case.config();
            assert!(!config.title.is_empty());
            assert!(!config.description.is_empty());
            assert_eq!(config.agent_number, AGENT_NUMBER);
        }
    }
}
