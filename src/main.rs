use bytes::Bytes;
use ether_craft::core::config::Configuration;
use ether_craft::core::error::CraftError;
use ether_craft::network::packet::layer::InnerLayer;
use ether_craft::network::{ChannelSender, SystemInterfaces};
use ether_craft::setup_logger::setup_logger;
use ether_craft::EthernetFrame;
use log::{error, info};

fn main() -> Result<(), CraftError> {
    setup_logger();

    // 設定の読み込み
    let config = Configuration::from_env()?;
    info!("設定を読み込みました: インターフェース={}", config.network.interface);

    // フレームの構築
    let resolver = SystemInterfaces;
    let mut frame = EthernetFrame::with_interface_name(
        config.frame.destination,
        config.frame.source,
        &config.network.interface,
        &resolver,
    )?;

    if let Some(code) = config.frame.payload_type {
        frame.set_payload_type(code);
    }

    // ペイロードの添付
    if !config.frame.payload.is_empty() {
        let payload = Bytes::from(config.frame.payload.clone());
        let inner = match config.frame.payload_kind.as_str() {
            "ipv4" => InnerLayer::Ipv4(payload),
            "arp" => InnerLayer::Arp(payload),
            _ => InnerLayer::Raw(payload),
        };
        frame.attach(inner);
    }

    // フレームの送信
    let mut sender = ChannelSender::new();
    match frame.send(&mut sender) {
        Ok(()) => {
            info!(
                "フレームを送信しました: インターフェース番号={}, {}バイト",
                frame.interface_index(),
                frame.total_size()
            );
            Ok(())
        }
        Err(e) => {
            error!("フレームの送信に失敗しました: {}", e);
            Err(e)
        }
    }
}
