use dispatch_scenario::UseCase;

#[derive(Clone, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Scenario {
    Delays,
    WhereIsBox,
    OperationalLogistics,
}

impl Scenario {
    pub fn use_case(&self) -> UseCase {
        match self {
            Self::Delays => UseCase::Delays,
            Self::WhereIsBox => UseCase::WhereIsBox,
            Self::OperationalLogistics => UseCase::OperationalLogistics,
        }
    }
}
