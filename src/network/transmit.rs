use crate::core::error::{CraftError, CraftResult};
use crate::network::packet::ethernet::EthernetFrame;
use pnet::datalink::{self, Channel};

// rawリンクレイヤーソケットのアドレスファミリー (linux/socket.h)
pub const AF_PACKET: u16 = 17;
// 全プロトコルを対象とするフィルタタグ (linux/if_ether.h)
pub const ETH_P_ALL: u16 = 0x0003;

// sockaddr_ll相当の宛先記述子
#[derive(Debug, Clone, Copy)]
pub struct LinkDestination {
    // ホストバイトオーダー
    pub family: u16,
    // ネットワークバイトオーダー
    pub protocol: u16,
    pub address_length: u8,
    pub interface_index: u32,
    pub address: [u8; 6],
}

impl LinkDestination {
    pub fn new(interface_index: u32, address: [u8; 6]) -> Self {
        Self {
            family: AF_PACKET,
            protocol: ETH_P_ALL.to_be(),
            address_length: 6,
            interface_index,
            address,
        }
    }
}

// 送信ファシリティ。フレームのシリアライズは内部で行われる
pub trait LinkSender {
    fn send_link_layer(
        &mut self,
        frame: &mut EthernetFrame,
        destination: &LinkDestination,
    ) -> CraftResult<()>;
}

pub struct ChannelSender;

impl ChannelSender {
    pub fn new() -> Self {
        Self
    }
}

impl LinkSender for ChannelSender {
    fn send_link_layer(
        &mut self,
        frame: &mut EthernetFrame,
        destination: &LinkDestination,
    ) -> CraftResult<()> {
        // 宛先記述子のインターフェース番号から送信インターフェースを特定
        let interface = datalink::interfaces()
            .into_iter()
            .find(|interface| interface.index == destination.interface_index)
            .ok_or_else(|| {
                CraftError::Transmit(format!(
                    "インターフェース番号{}が見つかりません",
                    destination.interface_index
                ))
            })?;

        let (mut tx, _) = match datalink::channel(&interface, Default::default()) {
            Ok(Channel::Ethernet(tx, rx)) => (tx, rx),
            Ok(_) => {
                return Err(CraftError::Transmit(
                    "未サポートのチャネルタイプです".to_string(),
                ))
            }
            Err(e) => return Err(CraftError::Channel(e)),
        };

        // フレームの再構築と送信
        let buffer = frame.to_bytes();
        match tx.send_to(&buffer, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(CraftError::Channel(e)),
            None => Err(CraftError::Transmit(
                "パケットの送信に失敗しました".to_string(),
            )),
        }
    }
}
