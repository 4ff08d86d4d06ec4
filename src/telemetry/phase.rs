use serde::{Serialize, Serializer};
use strum_macros::{Display, IntoStaticStr};

/// Flight phase reported in the vehicle status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum MissionPhase {
    #[strum(serialize = "Pre-Launch")]
    PreLaunch,
    #[strum(serialize = "Countdown")]
    Countdown,
    #[strum(serialize = "1st Stage")]
    FirstStage,
    #[strum(serialize = "2nd Stage")]
    SecondStage,
    #[strum(serialize = "OMS 1")]
    Oms1,
    #[strum(serialize = "OMS 2")]
    Oms2,
    #[strum(serialize = "Coast phase")]
    Coast,
    #[strum(serialize = "Orbit Coast")]
    OrbitCoast,
    #[strum(serialize = "Maneuver")]
    Maneuver,
    #[strum(serialize = "FCS c/o")]
    FcsCheckout,
    #[strum(serialize = "DeOrbit")]
    DeOrbit,
    #[strum(serialize = "DeOrbit Exec")]
    DeOrbitExec,
    #[strum(serialize = "PreEntry")]
    PreEntry,
    #[strum(serialize = "Entry")]
    Entry,
    #[strum(serialize = "TAEM/Landing")]
    TaemLanding,
    #[strum(serialize = "RTLS 2nd")]
    Rtls2nd,
    #[strum(serialize = "Glide RTLS 1")]
    GlideRtls1,
    #[strum(serialize = "Glide RTLS 2")]
    GlideRtls2,
    #[strum(serialize = "On Orbit")]
    OnOrbit,
}

const PHASE_CODES: &[(i64, MissionPhase)] = &[
    (0, MissionPhase::PreLaunch),
    (901, MissionPhase::PreLaunch),
    (101, MissionPhase::Countdown),
    (102, MissionPhase::FirstStage),
    (103, MissionPhase::SecondStage),
    (104, MissionPhase::Oms1),
    (105, MissionPhase::Oms2),
    (106, MissionPhase::Coast),
    (201, MissionPhase::OrbitCoast),
    (202, MissionPhase::Maneuver),
    (801, MissionPhase::FcsCheckout),
    (301, MissionPhase::DeOrbit),
    (302, MissionPhase::DeOrbitExec),
    (303, MissionPhase::PreEntry),
    (304, MissionPhase::Entry),
    (305, MissionPhase::TaemLanding),
    (601, MissionPhase::Rtls2nd),
    (602, MissionPhase::GlideRtls1),
    (603, MissionPhase::GlideRtls2),
];

impl MissionPhase {
    /// Phase for a telemetry code. Unknown or unreadable codes are `OnOrbit`.
    pub fn from_code(code: Option<i64>) -> Self {
        code.and_then(|code| {
            PHASE_CODES
                .iter()
                .find(|(known, _)| *known == code)
                .map(|(_, phase)| *phase)
        })
        .unwrap_or(MissionPhase::OnOrbit)
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl Serialize for MissionPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
