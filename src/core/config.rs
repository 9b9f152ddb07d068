use crate::core::error::CraftError;
use crate::network::packet::ethernet::BROADCAST_MAC;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub network: NetworkConfig,
    pub frame: FrameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub interface: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    pub payload_type: Option<u16>,
    pub payload_kind: String,
    pub payload: Vec<u8>,
}

impl Configuration {
    pub fn from_env() -> Result<Self, CraftError> {
        dotenv::dotenv().ok();

        Ok(Configuration {
            network: NetworkConfig {
                interface: std::env::var("NETWORK_INTERFACE")
                    .unwrap_or_else(|_| "eth0".to_string()),
            },
            frame: FrameConfig {
                destination: match std::env::var("DST_MAC") {
                    Ok(value) => parse_mac(&value)?,
                    Err(_) => BROADCAST_MAC,
                },
                source: parse_mac(&std::env::var("SRC_MAC").map_err(|_| {
                    CraftError::Config("SRC_MACが設定されていません".to_string())
                })?)?,
                payload_type: match std::env::var("PAYLOAD_TYPE") {
                    Ok(value) => Some(parse_type_code(&value)?),
                    Err(_) => None,
                },
                payload_kind: std::env::var("PAYLOAD_KIND").unwrap_or_else(|_| "raw".to_string()),
                payload: parse_hex(&std::env::var("PAYLOAD_HEX").unwrap_or_default())?,
            },
        })
    }

    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            network: NetworkConfig {
                interface: "lo".to_string(),
            },
            frame: FrameConfig {
                destination: BROADCAST_MAC,
                source: [0x02, 0x00, 0x00, 0x00, 0x00, 0x01],
                payload_type: None,
                payload_kind: "raw".to_string(),
                payload: Vec::new(),
            },
        }
    }
}

// "aa:bb:cc:dd:ee:ff"形式のMACアドレスをパースする
fn parse_mac(value: &str) -> Result<[u8; 6], CraftError> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 6 {
        return Err(CraftError::Config(format!(
            "無効なMACアドレスです: {}",
            value
        )));
    }

    let mut octets = [0u8; 6];
    for (i, part) in parts.iter().enumerate() {
        octets[i] = u8::from_str_radix(part, 16).map_err(|_| {
            CraftError::Config(format!("無効なMACアドレスです: {}", value))
        })?;
    }
    Ok(octets)
}

// "0x0800"または"0800"形式のタイプコードをパースする
fn parse_type_code(value: &str) -> Result<u16, CraftError> {
    u16::from_str_radix(value.trim_start_matches("0x"), 16)
        .map_err(|_| CraftError::Config(format!("無効なタイプコードです: {}", value)))
}

// 空白区切りを許容する16進文字列をパースする
fn parse_hex(value: &str) -> Result<Vec<u8>, CraftError> {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if !cleaned.is_ascii() || cleaned.len() % 2 != 0 {
        return Err(CraftError::Config(format!(
            "無効な16進文字列です: {}",
            value
        )));
    }

    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&cleaned[i..i + 2], 16)
                .map_err(|_| CraftError::Config(format!("無効な16進文字列です: {}", value)))
        })
        .collect()
}
