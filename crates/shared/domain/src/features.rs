use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

/// Default flag key for unaccompanied-baggage fields.
pub const UNACCOMPANIED_BAGGAGE: &str = "unaccompanied_baggage";
/// Default flag key for Alaska orders types.
pub const ALASKA: &str = "enable_alaska";

bitflags! {
    /// Feature flags resolved once when an intake form mounts.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureFlagSet: u32 {
        const UNACCOMPANIED_BAGGAGE = 1 << 0;
        const ALASKA = 1 << 1;

        const ALL = Self::UNACCOMPANIED_BAGGAGE.bits() | Self::ALASKA.bits();
    }
}

impl FeatureFlagSet {
    pub const fn ub_enabled(self) -> bool {
        self.contains(Self::UNACCOMPANIED_BAGGAGE)
    }

    pub const fn alaska_enabled(self) -> bool {
        self.contains(Self::ALASKA)
    }
}

impl From<&str> for FeatureFlagSet {
    fn from(s: &str) -> Self {
        match s {
            UNACCOMPANIED_BAGGAGE | "ub" => Self::UNACCOMPANIED_BAGGAGE,
            ALASKA | "alaska" => Self::ALASKA,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureFlagSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FeatureFlagSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FeatureFlagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
