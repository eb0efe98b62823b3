//! Static product catalog.
//!
//! Four tables (gases, ready-made solutions, services, equipment) are authored
//! once as constant slices. Every entry carries its `CatalogKind`, so code that
//! receives an entry never has to guess which table it came from.
//!
//! Identifiers are unique within a table but not across tables: the gas and
//! the solution tables both contain `food`. Lookups that only have an id
//! (`Catalog::classify`) scan the tables in gas, solution, service, equipment
//! order.

use crate::model::route::Route;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Gas,
    Solution,
    Service,
    Equipment,
}

impl CatalogKind {
    /// Table priority used by id-only classification.
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Gas,
        CatalogKind::Solution,
        CatalogKind::Service,
        CatalogKind::Equipment,
    ];

    pub fn detail_route(self) -> Route {
        match self {
            CatalogKind::Gas => Route::GasDetails,
            CatalogKind::Solution => Route::SolutionDetails,
            CatalogKind::Service => Route::ServiceDetails,
            CatalogKind::Equipment => Route::EquipmentDetails,
        }
    }

    /// List page that shows the whole table.
    pub fn list_route(self) -> Route {
        match self {
            CatalogKind::Gas => Route::Gases,
            CatalogKind::Solution => Route::Solutions,
            CatalogKind::Service => Route::Services,
            CatalogKind::Equipment => Route::Equipment,
        }
    }

    /// Services, equipment and solutions are ordered with a phone number
    /// only; the cylinder/ownership/delivery steps apply to gases.
    pub fn skips_order_steps(self) -> bool {
        !matches!(self, CatalogKind::Gas)
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Gas => "Газы",
            CatalogKind::Solution => "Готовые решения",
            CatalogKind::Service => "Услуги",
            CatalogKind::Equipment => "Оборудование",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogKind::Gas => "gas",
            CatalogKind::Solution => "solution",
            CatalogKind::Service => "service",
            CatalogKind::Equipment => "equipment",
        };
        f.write_str(name)
    }
}

/// A single catalog record.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Stable identifier used in the URL fragment.
    pub id: &'static str,
    pub kind: CatalogKind,
    pub name: &'static str,
    /// Gas description, or the composition of a solution/service/equipment
    /// line with items separated by ` • `.
    pub description: &'static str,
    /// Chemical formula, gases only.
    pub formula: Option<&'static str>,
    /// Purity grades, package sizes or sub-types that qualify an order.
    pub variants: &'static [&'static str],
}

/// Read-only view over the four catalog tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    gases: &'static [CatalogEntry],
    solutions: &'static [CatalogEntry],
    services: &'static [CatalogEntry],
    equipment: &'static [CatalogEntry],
}

impl Catalog {
    pub const fn new(
        gases: &'static [CatalogEntry],
        solutions: &'static [CatalogEntry],
        services: &'static [CatalogEntry],
        equipment: &'static [CatalogEntry],
    ) -> Self {
        Self {
            gases,
            solutions,
            services,
            equipment,
        }
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn table(&self, kind: CatalogKind) -> &'static [CatalogEntry] {
        match kind {
            CatalogKind::Gas => self.gases,
            CatalogKind::Solution => self.solutions,
            CatalogKind::Service => self.services,
            CatalogKind::Equipment => self.equipment,
        }
    }

    pub fn find(&self, kind: CatalogKind, id: &str) -> Option<&'static CatalogEntry> {
        self.table(kind).iter().find(|entry| entry.id == id)
    }

    /// Resolves a bare identifier by table membership, in `CatalogKind::ALL`
    /// order. Returns `None` when no table contains the id.
    pub fn classify(&self, id: &str) -> Option<&'static CatalogEntry> {
        CatalogKind::ALL
            .into_iter()
            .find_map(|kind| self.find(kind, id))
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static CatalogEntry> {
        CatalogKind::ALL
            .into_iter()
            .flat_map(|kind| self.table(kind).iter())
    }
}

static BUILTIN: Catalog = Catalog::new(GASES, SOLUTIONS, SERVICES, EQUIPMENT);

const GASES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "o2",
        kind: CatalogKind::Gas,
        name: "Кислород",
        description: "Технический кислород в баллонах 40 л для резки, сварки и технологических процессов.",
        formula: Some("O₂"),
        variants: &["99.7%", "99.95%"],
    },
    CatalogEntry {
        id: "n2",
        kind: CatalogKind::Gas,
        name: "Азот",
        description: "Газообразный азот для продувки, инертизации и упаковки продуктов.",
        formula: Some("N₂"),
        variants: &["99.6%", "99.99%"],
    },
    CatalogEntry {
        id: "ar",
        kind: CatalogKind::Gas,
        name: "Аргон",
        description: "Аргон высшего сорта для сварки нержавеющей стали и алюминия.",
        formula: Some("Ar"),
        variants: &["99.993%", "99.998%"],
    },
    CatalogEntry {
        id: "co2",
        kind: CatalogKind::Gas,
        name: "Углекислота",
        description: "Диоксид углерода для полуавтоматической сварки и технических нужд.",
        formula: Some("CO₂"),
        variants: &["Сварочная", "Техническая"],
    },
    CatalogEntry {
        id: "food",
        kind: CatalogKind::Gas,
        name: "Пищевые газы",
        description: "Пищевая углекислота и азот для напитков и упаковки в защитной атмосфере.",
        formula: Some("E290 / E941"),
        variants: &["CO₂ пищевой", "N₂ пищевой"],
    },
    CatalogEntry {
        id: "mix-arco2",
        kind: CatalogKind::Gas,
        name: "Смесь Ar + CO₂",
        description: "Сварочная смесь аргона и углекислоты для MIG/MAG сварки сталей.",
        formula: Some("Ar/CO₂"),
        variants: &["82/18", "92/8"],
    },
    CatalogEntry {
        id: "weld-mix",
        kind: CatalogKind::Gas,
        name: "Трёхкомпонентные смеси",
        description: "Смеси на основе аргона с добавками CO₂ и O₂ для высокопроизводительной сварки.",
        formula: Some("Ar/CO₂/O₂"),
        variants: &[],
    },
    CatalogEntry {
        id: "pgs",
        kind: CatalogKind::Gas,
        name: "Поверочные газовые смеси",
        description: "ПГС для калибровки газоанализаторов и датчиков.",
        formula: None,
        variants: &[],
    },
];

const SOLUTIONS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "bar",
        kind: CatalogKind::Solution,
        name: "Газ для баров и ресторанов",
        description: "Пищевая углекислота • Азот и смеси для пива • Подключение и сервис",
        formula: None,
        variants: &["Бар", "Ресторан", "Пивоварня"],
    },
    CatalogEntry {
        id: "food",
        kind: CatalogKind::Solution,
        name: "Пищевое производство",
        description: "Упаковка в защитной атмосфере • Азот для инертизации • Регулярные поставки",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "workshop",
        kind: CatalogKind::Solution,
        name: "Сварочный цех",
        description: "Аргон и сварочные смеси • Рампы и редукторы • График поставок",
        formula: None,
        variants: &[],
    },
];

const SERVICES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "svc-maint",
        kind: CatalogKind::Service,
        name: "Обслуживание оборудования",
        description: "ТО, регламентные работы, настройка",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "svc-audit",
        kind: CatalogKind::Service,
        name: "Аудит",
        description: "Проверка узлов, утечек, паспортов, регистров",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "svc-design",
        kind: CatalogKind::Service,
        name: "Проектирование",
        description: "Проект газоснабжения, подбор схем",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "svc-install",
        kind: CatalogKind::Service,
        name: "Монтаж",
        description: "Монтаж, обвязка, пусконаладка",
        formula: None,
        variants: &[],
    },
];

const EQUIPMENT: &[CatalogEntry] = &[
    CatalogEntry {
        id: "eq-gauges",
        kind: CatalogKind::Equipment,
        name: "Манометры",
        description: "Корпуса, классы точности, резьбы",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "eq-ramps",
        kind: CatalogKind::Equipment,
        name: "Газоразрядные рампы",
        description: "Односторонние/двусторонние, с автоматикой",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "eq-cylinders",
        kind: CatalogKind::Equipment,
        name: "Баллоны",
        description: "5/10/25/40/50 л, резьбы, аттестация",
        formula: None,
        variants: &[],
    },
    CatalogEntry {
        id: "eq-storage",
        kind: CatalogKind::Equipment,
        name: "Системы хранения",
        description: "Комплексы хранения и подачи",
        formula: None,
        variants: &["Моноблоки", "Криоцилиндры", "Стационарные ёмкости"],
    },
];
