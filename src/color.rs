/// プロジェクトが見つからない場合、または色がパースできない場合に利用する色。
pub const FALLBACK_COLOR: &str = "#2CD4BD";

/// `#RRGGBB`形式の文字列をRGB値に変換する。
///
/// 形式が一致しない場合は`None`を返す。
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// 指定色のスウォッチ(●)を24bitカラーのANSIエスケープ付きで返す。
///
/// パースできない色はエラーにせず`FALLBACK_COLOR`で描画する。
pub fn swatch(color: &str) -> String {
    let (r, g, b) = parse_hex_color(color)
        .or_else(|| parse_hex_color(FALLBACK_COLOR))
        .unwrap_or((0, 0, 0));
    format!("\u{1b}[38;2;{};{};{}m\u{25cf}\u{1b}[0m", r, g, b)
}
