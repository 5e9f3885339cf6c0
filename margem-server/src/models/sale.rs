//! Sale submissions and stored sale records
//!
//! A [`SaleSubmission`] is whatever the client sent; a [`NewSale`] is a
//! submission that passed validation. Stores only accept `NewSale`, so a
//! partially filled record can never be persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for franchise names
const MAX_FRANQUIA_LEN: usize = 255;

/// Raw `POST /vendas` body.
///
/// Every field is optional here so that absence surfaces as a
/// [`ValidationError::Missing`] instead of a deserialization failure.
/// Client-supplied `id` or `data` keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleSubmission {
    pub franquia: Option<String>,
    pub valor_projeto: Option<f64>,
    pub margem_valor: Option<f64>,
    pub margem_percentual: Option<f64>,
}

/// Validated sale, ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    franquia: String,
    valor_projeto: f64,
    margem_valor: f64,
    margem_percentual: f64,
}

impl NewSale {
    /// Create a new sale, validating every business field.
    ///
    /// # Rules
    /// - franquia must be non-blank, at most 255 characters (surrounding
    ///   whitespace is trimmed)
    /// - numeric fields must be finite; zero and negative values are valid
    ///
    /// # Example
    /// ```
    /// use margem_server::models::NewSale;
    ///
    /// assert!(NewSale::new("Unit A", 1000.0, 300.0, 30.0).is_ok());
    /// assert!(NewSale::new("Unit A", 0.0, 0.0, 0.0).is_ok());
    /// assert!(NewSale::new("   ", 1000.0, 300.0, 30.0).is_err());
    /// ```
    pub fn new(
        franquia: &str,
        valor_projeto: f64,
        margem_valor: f64,
        margem_percentual: f64,
    ) -> Result<Self, ValidationError> {
        let franquia = franquia.trim();
        if franquia.is_empty() {
            return Err(ValidationError::Missing { field: "franquia" });
        }

        if franquia.chars().count() > MAX_FRANQUIA_LEN {
            return Err(ValidationError::TooLong {
                field: "franquia",
                max: MAX_FRANQUIA_LEN,
            });
        }

        Ok(Self {
            franquia: franquia.to_owned(),
            valor_projeto: finite("valor_projeto", valor_projeto)?,
            margem_valor: finite("margem_valor", margem_valor)?,
            margem_percentual: finite("margem_percentual", margem_percentual)?,
        })
    }

    pub fn franquia(&self) -> &str {
        &self.franquia
    }

    pub fn valor_projeto(&self) -> f64 {
        self.valor_projeto
    }

    pub fn margem_valor(&self) -> f64 {
        self.margem_valor
    }

    pub fn margem_percentual(&self) -> f64 {
        self.margem_percentual
    }
}

impl TryFrom<SaleSubmission> for NewSale {
    type Error = ValidationError;

    /// Presence is checked field by field, in body order.
    fn try_from(s: SaleSubmission) -> Result<Self, Self::Error> {
        let franquia = s
            .franquia
            .ok_or(ValidationError::Missing { field: "franquia" })?;
        let valor_projeto = s
            .valor_projeto
            .ok_or(ValidationError::Missing { field: "valor_projeto" })?;
        let margem_valor = s
            .margem_valor
            .ok_or(ValidationError::Missing { field: "margem_valor" })?;
        let margem_percentual = s.margem_percentual.ok_or(ValidationError::Missing {
            field: "margem_percentual",
        })?;

        Self::new(&franquia, valor_projeto, margem_valor, margem_percentual)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

/// Persisted sale. `id` and `data` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    pub id: i64,
    pub franquia: String,
    pub valor_projeto: f64,
    pub margem_valor: f64,
    pub margem_percentual: f64,
    pub data: DateTime<Utc>,
}

impl SaleRecord {
    pub fn new(id: i64, sale: &NewSale, data: DateTime<Utc>) -> Self {
        Self {
            id,
            franquia: sale.franquia.clone(),
            valor_projeto: sale.valor_projeto,
            margem_valor: sale.margem_valor,
            margem_percentual: sale.margem_percentual,
            data,
        }
    }
}
