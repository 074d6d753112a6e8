use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, EnumIter, EnumString, Display as StrumDisplay};

/// Value Object - sale price in the registry's fixed display locale
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize, Display)]
#[display(fmt = "{:.2}", _0)]
pub struct SalePrice(f64);

impl SalePrice {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for SalePrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - the four filterable record fields
///
/// The serialized names double as the DOM selector ids the page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum FilterField {
    #[strum(serialize = "departamento")]
    Departamento,

    #[strum(serialize = "provincia")]
    Provincia,

    #[strum(serialize = "distrito")]
    Distrito,

    #[strum(serialize = "tipoEstablecimiento")]
    TipoEstablecimiento,
}

impl FilterField {
    pub fn selector_id(&self) -> &str {
        self.as_ref()
    }

    /// Region fields are narrowed server-side; establishment type is not.
    pub fn is_region(&self) -> bool {
        !matches!(self, Self::TipoEstablecimiento)
    }

    /// Query-string key for region fields
    pub fn query_key(&self) -> Option<&'static str> {
        match self {
            Self::Departamento => Some("departamento"),
            Self::Provincia => Some("provincia"),
            Self::Distrito => Some("distrito"),
            Self::TipoEstablecimiento => None,
        }
    }
}

/// Value Object - the department/province/district triple sent to the server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    pub departamento: Option<String>,
    pub provincia: Option<String>,
    pub distrito: Option<String>,
}

impl RegionFilter {
    pub fn new(
        departamento: Option<String>,
        provincia: Option<String>,
        distrito: Option<String>,
    ) -> Self {
        Self { departamento, provincia, distrito }
    }

    /// Build from raw selector values; an empty string means "all".
    pub fn from_selections(departamento: &str, provincia: &str, distrito: &str) -> Self {
        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_string());
        Self {
            departamento: non_empty(departamento),
            provincia: non_empty(provincia),
            distrito: non_empty(distrito),
        }
    }

    /// Non-empty `(key, value)` pairs in fixed order, ready for a query string
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("departamento", self.departamento.as_deref()),
            ("provincia", self.provincia.as_deref()),
            ("distrito", self.distrito.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
