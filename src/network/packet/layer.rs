use bytes::Bytes;

use crate::network::packet::ethertype::{ETHERTYPE_ARP, ETHERTYPE_IPV4};

// チェーンに連なる各レイヤーの種別タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    EthernetII,
    Ipv4,
    Arp,
    Raw,
}

impl LayerKind {
    // 種別に対応するイーサタイプコード。対応表にない種別はNone
    pub fn ethertype(&self) -> Option<u16> {
        match self {
            LayerKind::Ipv4 => Some(ETHERTYPE_IPV4),
            LayerKind::Arp => Some(ETHERTYPE_ARP),
            _ => None,
        }
    }
}

// フレームに内包されるレイヤー。ペイロードは構築済みのバイト列として保持する
#[derive(Debug, Clone)]
pub enum InnerLayer {
    Ipv4(Bytes),
    Arp(Bytes),
    Raw(Bytes),
}

impl InnerLayer {
    pub fn kind(&self) -> LayerKind {
        match self {
            InnerLayer::Ipv4(_) => LayerKind::Ipv4,
            InnerLayer::Arp(_) => LayerKind::Arp,
            InnerLayer::Raw(_) => LayerKind::Raw,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            InnerLayer::Ipv4(payload) | InnerLayer::Arp(payload) | InnerLayer::Raw(payload) => {
                payload
            }
        }
    }

    pub fn size(&self) -> usize {
        self.payload().len()
    }

    // ペイロードをバッファの先頭へコピーする
    pub fn serialize(&self, buffer: &mut [u8]) {
        let payload = self.payload();
        assert!(
            buffer.len() >= payload.len(),
            "バッファがペイロードサイズより小さいです"
        );
        buffer[..payload.len()].copy_from_slice(payload);
    }
}
