use crate::core::error::{CraftError, CraftResult};
use crate::network::interface::InterfaceResolver;
use crate::network::packet::layer::{InnerLayer, LayerKind};
use crate::network::transmit::{LinkDestination, LinkSender};

// Ethernet-IIヘッダーのワイヤサイズ (宛先6 + 送信元6 + タイプ2)
pub const ETHERNET_HEADER_SIZE: usize = 14;

// ブロードキャストアドレス
pub const BROADCAST_MAC: [u8; 6] = [0xff; 6];

#[derive(Debug, Clone)]
pub struct EthernetHeader {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    // Noneは未解決を表す。シリアライズ時にインナーレイヤーの種別から解決される
    pub payload_type: Option<u16>,
}

impl EthernetHeader {
    pub fn new(destination: [u8; 6], source: [u8; 6]) -> Self {
        Self {
            destination,
            source,
            payload_type: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EthernetFrame {
    header: EthernetHeader,
    interface_index: u32,
    // インナーレイヤーは排他所有。フレームの破棄と同時に破棄される
    inner: Option<Box<InnerLayer>>,
}

impl EthernetFrame {
    pub fn new(destination: [u8; 6], source: [u8; 6], interface_index: u32) -> Self {
        Self {
            header: EthernetHeader::new(destination, source),
            interface_index,
            inner: None,
        }
    }

    // 名前解決は構築時に一度だけ行われ、再試行されない
    pub fn with_interface_name(
        destination: [u8; 6],
        source: [u8; 6],
        name: &str,
        resolver: &dyn InterfaceResolver,
    ) -> CraftResult<Self> {
        let index = resolver
            .resolve(name)
            .ok_or_else(|| CraftError::InvalidInterface(name.to_string()))?;
        Ok(Self::new(destination, source, index))
    }

    pub fn destination(&self) -> [u8; 6] {
        self.header.destination
    }

    pub fn set_destination(&mut self, address: [u8; 6]) {
        self.header.destination = address;
    }

    pub fn source(&self) -> [u8; 6] {
        self.header.source
    }

    pub fn set_source(&mut self, address: [u8; 6]) {
        self.header.source = address;
    }

    pub fn payload_type(&self) -> Option<u16> {
        self.header.payload_type
    }

    // 明示的に設定されたタイプはシリアライズ時の推論で上書きされない
    pub fn set_payload_type(&mut self, code: u16) {
        self.header.payload_type = Some(code);
    }

    pub fn interface_index(&self) -> u32 {
        self.interface_index
    }

    pub fn set_interface_index(&mut self, index: u32) {
        self.interface_index = index;
    }

    // 解決に失敗した場合、保持しているインターフェース番号は変更されない
    pub fn set_interface_name(
        &mut self,
        name: &str,
        resolver: &dyn InterfaceResolver,
    ) -> CraftResult<()> {
        match resolver.resolve(name) {
            Some(index) => {
                self.interface_index = index;
                Ok(())
            }
            None => Err(CraftError::InvalidInterface(name.to_string())),
        }
    }

    // 既存のインナーレイヤーは置き換えられる
    pub fn attach(&mut self, inner: InnerLayer) {
        self.inner = Some(Box::new(inner));
    }

    pub fn detach(&mut self) -> Option<InnerLayer> {
        self.inner.take().map(|inner| *inner)
    }

    pub fn inner(&self) -> Option<&InnerLayer> {
        self.inner.as_deref()
    }

    pub fn kind(&self) -> LayerKind {
        LayerKind::EthernetII
    }

    // ヘッダーサイズはペイロードの有無に依存しない
    pub fn header_size(&self) -> usize {
        ETHERNET_HEADER_SIZE
    }

    pub fn total_size(&self) -> usize {
        ETHERNET_HEADER_SIZE + self.inner.as_ref().map_or(0, |inner| inner.size())
    }

    // ヘッダーをバッファの先頭14バイトへ書き込む。インナーレイヤーは書き込まない
    pub fn serialize(&mut self, buffer: &mut [u8]) {
        assert!(
            buffer.len() >= ETHERNET_HEADER_SIZE,
            "バッファがヘッダーサイズ({}バイト)より小さいです",
            ETHERNET_HEADER_SIZE
        );

        // タイプが未解決であればインナーレイヤーの種別から決める。
        // 対応表にない種別は未解決のまま残し、ワイヤ上は0になる
        if self.header.payload_type.is_none() {
            if let Some(inner) = &self.inner {
                self.header.payload_type = inner.kind().ethertype();
            }
        }

        buffer[0..6].copy_from_slice(&self.header.destination);
        buffer[6..12].copy_from_slice(&self.header.source);
        let code = self.header.payload_type.unwrap_or(0);
        buffer[12..14].copy_from_slice(&code.to_be_bytes());
    }

    // ヘッダーとインナーレイヤーを連結したバイト列を構築する
    pub fn to_bytes(&mut self) -> Vec<u8> {
        let mut buffer = vec![0u8; self.total_size()];
        self.serialize(&mut buffer);
        if let Some(inner) = &self.inner {
            inner.serialize(&mut buffer[ETHERNET_HEADER_SIZE..]);
        }
        buffer
    }

    // 送信ファシリティへ宛先記述子と自身を渡す。結果は解釈せずそのまま返す
    pub fn send(&mut self, sender: &mut dyn LinkSender) -> CraftResult<()> {
        let destination = LinkDestination::new(self.interface_index, self.header.destination);
        sender.send_link_layer(self, &destination)
    }
}
