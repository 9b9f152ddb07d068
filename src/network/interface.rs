use pnet::datalink;

// 名前からインターフェース番号を解決する機能。テストでは偽装実装に差し替えられる
pub trait InterfaceResolver {
    fn resolve(&self, name: &str) -> Option<u32>;
}

// OSが認識しているインターフェース一覧から解決するリゾルバ
pub struct SystemInterfaces;

impl InterfaceResolver for SystemInterfaces {
    fn resolve(&self, name: &str) -> Option<u32> {
        datalink::interfaces()
            .into_iter()
            .find(|interface| interface.name == name)
            .map(|interface| interface.index)
    }
}
