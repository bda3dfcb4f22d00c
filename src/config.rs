//! Applying named options from an opaque configuration source.
//!
//! Loading configuration files is not this crate's job; anything that can
//! answer "what is the value of `key` in `section`" can drive
//! [`Message::use_config`]. Adapters are provided for a parsed TOML table
//! and for a plain string map.

use std::collections::HashMap;

use serde::Deserialize;

use crate::datastructures::MngError;
use crate::message::Message;

/// An opaque configuration collaborator.
pub trait ConfigSource {
    /// Looks up the raw text value of `key`, preferring `section` over the
    /// global scope.
    fn lookup(&self, section: Option<&str>, key: &str) -> Option<String>;
}

/// A scalar option value as configuration files write them. Tables and
/// arrays are not option values and fail to deserialize into this.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OptionValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl OptionValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(number) => number.to_string(),
            Self::Float(number) => number.to_string(),
            Self::Boolean(flag) => flag.to_string(),
        }
    }
}

impl ConfigSource for toml::Table {
    fn lookup(&self, section: Option<&str>, key: &str) -> Option<String> {
        let scoped = section
            .and_then(|name| self.get(name))
            .and_then(|value| value.as_table())
            .and_then(|table| table.get(key));
        let value = scoped.or_else(|| self.get(key))?;
        OptionValue::deserialize(value.clone())
            .ok()
            .map(OptionValue::into_text)
    }
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, section: Option<&str>, key: &str) -> Option<String> {
        section
            .and_then(|name| self.get(&format!("{name}.{key}")))
            .or_else(|| self.get(key))
            .cloned()
    }
}

/// A named option carried a value the codec cannot use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for option {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Accepts decimal or 0x-prefixed hex, the way PTP daemon configuration
/// files write small integers.
fn parse_option(key: &'static str, value: &str) -> Result<u8, ConfigError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError {
        key,
        value: value.to_owned(),
    })
}

fn lookup_option<C: ConfigSource>(
    cfg: &C,
    section: Option<&str>,
    key: &'static str,
) -> Result<Option<u8>, ConfigError> {
    cfg.lookup(section, key)
        .map(|value| parse_option(key, &value))
        .transpose()
}

impl Message {
    /// Applies the message-related options of `cfg` to this message's
    /// parameters: `transportSpecific`, `domainNumber` and
    /// `boundary_hops`. The transport options `udp_ttl`,
    /// `socket_priority` and `uds_address` are validated but belong to
    /// the socket layer, not to this codec. Unknown keys are never
    /// consulted; a malformed value fails without touching any state.
    pub fn use_config<C: ConfigSource>(
        &mut self,
        cfg: &C,
        section: Option<&str>,
    ) -> Result<(), ConfigError> {
        let transport_specific = lookup_option(cfg, section, "transportSpecific")?;
        if let Some(value) = transport_specific {
            if value > 0x0f {
                return Err(ConfigError {
                    key: "transportSpecific",
                    value: value.to_string(),
                });
            }
        }
        let domain_number = lookup_option(cfg, section, "domainNumber")?;
        let boundary_hops = lookup_option(cfg, section, "boundary_hops")?;

        lookup_option(cfg, section, "udp_ttl")?;
        if let Some(priority) = lookup_option(cfg, section, "socket_priority")? {
            if priority > 15 {
                return Err(ConfigError {
                    key: "socket_priority",
                    value: priority.to_string(),
                });
            }
        }
        let _uds_address = cfg.lookup(section, "uds_address");

        let mut params = self.params().clone();
        if let Some(value) = transport_specific {
            params.transport_specific = value;
        }
        if let Some(value) = domain_number {
            params.domain_number = value;
        }
        if let Some(value) = boundary_hops {
            params.boundary_hops = value;
        }
        log::debug!(
            "configured message parameters: transportSpecific={:#x} domainNumber={} boundary_hops={}",
            params.transport_specific,
            params.domain_number,
            params.boundary_hops
        );
        self.update_params(params).map_err(|_: MngError| ConfigError {
            key: "transportSpecific",
            value: String::new(),
        })
    }
}
