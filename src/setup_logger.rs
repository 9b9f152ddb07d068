use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

pub fn setup_logger() {
    // ビルダーでロガーをカスタマイズ
    Builder::new()
        // ログレベルの設定
        .filter_level(LevelFilter::Info)
        // タイムスタンプ付きのフォーマット
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        // 標準出力に出力
        .target(Target::Stdout)
        .init();
}
