use crate::model::catalog::CatalogKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the view currently shown by the storefront.
///
/// The serialized form (and the token used in the URL fragment) is the
/// kebab-case name, e.g. `gas-details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Catalog,
    Gases,
    Solutions,
    Equipment,
    Services,
    Contacts,
    Order,
    GasDetails,
    SolutionDetails,
    EquipmentDetails,
    ServiceDetails,
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::Home,
        Route::Catalog,
        Route::Gases,
        Route::Solutions,
        Route::Equipment,
        Route::Services,
        Route::Contacts,
        Route::Order,
        Route::GasDetails,
        Route::SolutionDetails,
        Route::EquipmentDetails,
        Route::ServiceDetails,
    ];

    /// Fragment token for this route.
    pub fn token(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Catalog => "catalog",
            Route::Gases => "gases",
            Route::Solutions => "solutions",
            Route::Equipment => "equipment",
            Route::Services => "services",
            Route::Contacts => "contacts",
            Route::Order => "order",
            Route::GasDetails => "gas-details",
            Route::SolutionDetails => "solution-details",
            Route::EquipmentDetails => "equipment-details",
            Route::ServiceDetails => "service-details",
        }
    }

    /// Strict parse of a fragment token. Returns `None` for anything that is
    /// not exactly one of the route tokens.
    pub fn parse(token: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.token() == token)
    }

    /// Lenient parse used for loosely-typed navigation targets: unknown
    /// tokens resolve to `Home`.
    pub fn from_token(token: &str) -> Route {
        Route::parse(token).unwrap_or(Route::Home)
    }

    /// The catalog kind shown by a `*-details` route.
    pub fn detail_kind(self) -> Option<CatalogKind> {
        match self {
            Route::GasDetails => Some(CatalogKind::Gas),
            Route::SolutionDetails => Some(CatalogKind::Solution),
            Route::EquipmentDetails => Some(CatalogKind::Equipment),
            Route::ServiceDetails => Some(CatalogKind::Service),
            _ => None,
        }
    }

    pub fn is_detail(self) -> bool {
        self.detail_kind().is_some()
    }

    /// Navigation label shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Главная",
            Route::Catalog => "Каталог",
            Route::Gases => "Газы",
            Route::Solutions => "Готовые решения",
            Route::Equipment => "Оборудование",
            Route::Services => "Услуги",
            Route::Contacts => "Контакты",
            Route::Order => "Заявка",
            Route::GasDetails => "Газ",
            Route::SolutionDetails => "Решение",
            Route::EquipmentDetails => "Оборудование",
            Route::ServiceDetails => "Услуга",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
