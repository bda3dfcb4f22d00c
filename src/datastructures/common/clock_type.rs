use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bitmask describing the kind of clock, from the CLOCK_DESCRIPTION
    /// TLV. Several bits may be set at once; unknown bits are preserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClockType: u16 {
        const ORDINARY = 0x8000;
        const BOUNDARY = 0x4000;
        const P2P_TRANSPARENT = 0x2000;
        const E2E_TRANSPARENT = 0x1000;
        /// Management node, deprecated by the 2019 edition.
        const MANAGEMENT = 0x0800;
    }
}

impl fmt::Display for ClockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::ORDINARY, "ordinaryClock"),
            (Self::BOUNDARY, "boundaryClock"),
            (Self::P2P_TRANSPARENT, "p2pTransparentClock"),
            (Self::E2E_TRANSPARENT, "e2eTransparentClock"),
            (Self::MANAGEMENT, "managementNode"),
        ];
        let mut first = true;
        for (bit, name) in names {
            if self.contains(bit) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_values() {
        assert_eq!(ClockType::ORDINARY.bits(), 0x8000);
        assert_eq!(ClockType::MANAGEMENT.bits(), 0x0800);
        // Unknown bits survive a round trip.
        let raw = ClockType::from_bits_retain(0x8001);
        assert_eq!(raw.bits(), 0x8001);
    }

    #[test]
    fn display() {
        let t = ClockType::ORDINARY | ClockType::BOUNDARY;
        assert_eq!(t.to_string(), "ordinaryClock|boundaryClock");
        assert_eq!(ClockType::empty().to_string(), "none");
    }
}
