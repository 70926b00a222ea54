/// Evaluation status Burrow assigns to consumer groups and partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BurrowStatus {
    NotFound = 1,
    Ok = 2,
    Warn = 3,
    Err = 4,
    Stop = 5,
    Stall = 6,
    Rewind = 7,
}

impl BurrowStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "NOTFOUND" => Some(Self::NotFound),
            "OK" => Some(Self::Ok),
            "WARN" => Some(Self::Warn),
            "ERR" => Some(Self::Err),
            "STOP" => Some(Self::Stop),
            "STALL" => Some(Self::Stall),
            "REWIND" => Some(Self::Rewind),
            _ => None,
        }
    }

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Gauge value for a status string. Anything Burrow may add later maps to 0.
pub fn status_ordinal(status: &str) -> u8 {
    BurrowStatus::parse(status).map_or(0, BurrowStatus::ordinal)
}
