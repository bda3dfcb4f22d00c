use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::MngError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum NetworkProtocol {
    UdpIPv4 = 0x0001,
    UdpIPv6 = 0x0002,
    IEEE802_3 = 0x0003,
    DeviceNet = 0x0004,
    ControlNet = 0x0005,
    Profinet = 0x0006,
}

impl NetworkProtocol {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UdpIPv4 => "UDP_IPv4",
            Self::UdpIPv6 => "UDP_IPv6",
            Self::IEEE802_3 => "IEEE_802_3",
            Self::DeviceNet => "DeviceNet",
            Self::ControlNet => "ControlNet",
            Self::Profinet => "PROFINET",
        }
    }
}

impl core::fmt::Display for NetworkProtocol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkProtocol {
    type Err = MngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::UdpIPv4,
            Self::UdpIPv6,
            Self::IEEE802_3,
            Self::DeviceNet,
            Self::ControlNet,
            Self::Profinet,
        ]
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_protocol_values() {
        for i in 0..=u16::MAX {
            match NetworkProtocol::try_from(i) {
                Ok(protocol) => assert_eq!(u16::from(protocol), i),
                Err(_) => assert!(!(1..=6).contains(&i)),
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(NetworkProtocol::UdpIPv4.to_string(), "UDP_IPv4");
        assert_eq!(
            "udp_ipv6".parse::<NetworkProtocol>().unwrap(),
            NetworkProtocol::UdpIPv6
        );
        assert!("token-ring".parse::<NetworkProtocol>().is_err());
    }
}
