//! Catalog updates in the shape accepted by the Relewise tracking API.

use std::collections::BTreeMap;

use serde::Serialize;

/// Data key holding the Umbraco content key on every synced product.
pub const UMBRACO_ID_KEY: &str = "UmbracoId";

/// Type discriminators for polymorphic filters and conditions.
pub const PRODUCT_DATA_FILTER_TYPE: &str =
    "Relewise.Client.Requests.Filters.ProductDataFilter, Relewise.Client";
pub const EQUALS_CONDITION_TYPE: &str =
    "Relewise.Client.Requests.Conditions.EqualsCondition, Relewise.Client";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Language {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Currency {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedText {
    pub language: Language,
    pub text: String,
}

/// Text with one entry per language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Multilingual {
    pub values: Vec<LocalizedText>,
}

impl Multilingual {
    pub fn single(language: &str, text: impl Into<String>) -> Self {
        Self {
            values: vec![LocalizedText {
                language: Language {
                    value: language.to_string(),
                },
                text: text.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedCollection {
    pub language: Language,
    pub values: Vec<String>,
}

/// A list of strings per language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultilingualCollection {
    pub values: Vec<LocalizedCollection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Money {
    pub currency: Currency,
    pub amount: f64,
}

/// Amounts keyed by currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiCurrency {
    pub values: Vec<Money>,
}

impl MultiCurrency {
    pub fn single(currency: &str, amount: f64) -> Self {
        Self {
            values: vec![Money {
                currency: Currency {
                    value: currency.to_string(),
                },
                amount,
            }],
        }
    }
}

/// A typed value stored under a data key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum DataValue {
    String(String),
    Multilingual(Multilingual),
    StringList(Vec<String>),
    Double(f64),
    MultilingualCollection(MultilingualCollection),
}

impl DataValue {
    pub fn string(value: impl Into<String>) -> Self {
        DataValue::String(value.into())
    }

    pub fn multilingual(language: &str, text: impl Into<String>) -> Self {
        DataValue::Multilingual(Multilingual::single(language, text))
    }

    pub fn multilingual_collection(language: &str, values: Vec<String>) -> Self {
        DataValue::MultilingualCollection(MultilingualCollection {
            values: vec![LocalizedCollection {
                language: Language {
                    value: language.to_string(),
                },
                values,
            }],
        })
    }
}

/// How the indexing service applies an update to existing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateKind {
    ClearAndReplace,
    Disable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub display_name: Multilingual,
    pub data: BTreeMap<String, DataValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<MultiCurrency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_price: Option<MultiCurrency>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub data: BTreeMap<String, DataValue>,
    pub list_price: MultiCurrency,
    pub sales_price: MultiCurrency,
}

/// Full-replace upsert of a product and its variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
    pub product_update_kind: UpdateKind,
    pub variant_update_kind: UpdateKind,
    pub replace_existing_variants: bool,
}

impl ProductUpdate {
    /// Replace the product and all of its variants.
    pub fn clear_and_replace(product: Product) -> Self {
        Self {
            product,
            variants: None,
            product_update_kind: UpdateKind::ClearAndReplace,
            variant_update_kind: UpdateKind::ClearAndReplace,
            replace_existing_variants: true,
        }
    }
}

/// Equality test against a data value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EqualsCondition {
    #[serde(rename = "$type")]
    pub type_name: &'static str,
    pub value: DataValue,
    pub negated: bool,
}

impl EqualsCondition {
    pub fn new(value: DataValue) -> Self {
        Self {
            type_name: EQUALS_CONDITION_TYPE,
            value,
            negated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueConditionCollection {
    pub items: Vec<EqualsCondition>,
}

/// Matches products whose data `key` satisfies all conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDataFilter {
    #[serde(rename = "$type")]
    pub type_name: &'static str,
    pub key: String,
    pub conditions: ValueConditionCollection,
    pub must_match_all_conditions: bool,
    pub filter_out_if_key_is_not_found: bool,
    pub negated: bool,
}

impl ProductDataFilter {
    pub fn new(key: impl Into<String>, conditions: Vec<EqualsCondition>) -> Self {
        Self {
            type_name: PRODUCT_DATA_FILTER_TYPE,
            key: key.into(),
            conditions: ValueConditionCollection { items: conditions },
            must_match_all_conditions: true,
            filter_out_if_key_is_not_found: true,
            negated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCollection {
    pub items: Vec<ProductDataFilter>,
}

/// Update applied to every product matching the filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAdministrativeAction {
    pub language: Option<Language>,
    pub currency: Option<Currency>,
    pub filters: FilterCollection,
    pub product_update_kind: UpdateKind,
}
