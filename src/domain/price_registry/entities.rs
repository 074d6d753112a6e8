pub use super::value_objects::{FilterField, SalePrice};
use serde::{Deserialize, Serialize};

/// Domain entity - one price registration as published by the registry
///
/// The upstream endpoint serves upper-case snake-case keys straight from the
/// source dataset; every field may be absent and renders as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "FCHA_REGISTRO", default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<String>,

    #[serde(rename = "DEPARTAMENTO", default, skip_serializing_if = "Option::is_none")]
    pub departamento: Option<String>,

    #[serde(rename = "PROVINCIA", default, skip_serializing_if = "Option::is_none")]
    pub provincia: Option<String>,

    #[serde(rename = "DISTRITO", default, skip_serializing_if = "Option::is_none")]
    pub distrito: Option<String>,

    #[serde(rename = "DIRECCION", default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,

    #[serde(rename = "RAZON_SOCIAL", default, skip_serializing_if = "Option::is_none")]
    pub razon_social: Option<String>,

    #[serde(rename = "TIPO_ESTABLECIMIENTO", default, skip_serializing_if = "Option::is_none")]
    pub tipo_establecimiento: Option<String>,

    #[serde(rename = "PRODUCTO", default, skip_serializing_if = "Option::is_none")]
    pub producto: Option<String>,

    #[serde(rename = "PRECIO_VENTA", default, skip_serializing_if = "Option::is_none")]
    pub precio_venta: Option<SalePrice>,

    #[serde(rename = "UNIDAD_MEDIDA", default, skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
}

impl PriceRecord {
    /// Value of one of the four filterable fields
    pub fn filter_value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Departamento => self.departamento.as_deref(),
            FilterField::Provincia => self.provincia.as_deref(),
            FilterField::Distrito => self.distrito.as_deref(),
            FilterField::TipoEstablecimiento => self.tipo_establecimiento.as_deref(),
        }
    }

    pub fn matches_establishment(&self, tipo: &str) -> bool {
        self.tipo_establecimiento.as_deref() == Some(tipo)
    }

    /// The ten display strings for one table row, in column order
    pub fn display_cells(&self) -> [String; 10] {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        [
            text(&self.fecha_registro),
            text(&self.departamento),
            text(&self.provincia),
            text(&self.distrito),
            text(&self.direccion),
            text(&self.razon_social),
            text(&self.tipo_establecimiento),
            text(&self.producto),
            self.precio_venta.map(|p| p.to_string()).unwrap_or_default(),
            text(&self.unidad_medida),
        ]
    }
}
