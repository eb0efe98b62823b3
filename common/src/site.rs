//! Brand and contact details rendered across the site.
//!
//! Only public, client-safe values live here. Bot credentials are read by the
//! backend from its environment and never reach the browser bundle.

pub const BRAND: &str = "Машпромстрой";
pub const SLOGAN: &str = "Чистые газы. Чистая эффективность.";
pub const PRICE_FROM: &str = "от 1 500 ₽";
pub const DEFAULT_REGION: &str = "Москва и область";

pub const PHONE_DISPLAY: &str = "+7 926 975 8404";
pub const PHONE_TEL: &str = "tel:+79269758404";
pub const OFFICE_ADDR: &str = "МО, Балашиха, ул. Разинское ш. 5, офис 321";
pub const PROD_ADDR: &str = "МО, г. Подольск, ул. Рощинская 53А";

/// Yandex Maps search link for a street address.
pub fn yandex_map_url(address: &str) -> String {
    format!(
        "https://yandex.ru/maps/?text={}",
        urlencoding::encode(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_links_encode_the_address() {
        let url = yandex_map_url("ул. Рощинская 53А");
        assert!(url.starts_with("https://yandex.ru/maps/?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("%20"));
    }
}
