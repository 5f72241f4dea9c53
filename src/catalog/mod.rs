//! Mapping from Umbraco product content to catalog updates.
//!
//! Pure functions only; fetching and submitting live in the `cms` and `indexing` modules.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CatalogLocale;
use crate::errors::AppError;
use crate::models::{
    ContentItem, DataValue, EqualsCondition, FilterCollection, Multilingual, MultiCurrency,
    Product, ProductAdministrativeAction, ProductDataFilter, ProductProperties, ProductUpdate,
    ProductVariant, UpdateKind, VariantsBlock, UMBRACO_ID_KEY,
};

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>?").expect("valid regex"));

/// Strip all markup tags from a rich text value and turn newlines into spaces.
///
/// Entities are left untouched.
pub fn sanitize_rich_text(markup: &str) -> String {
    MARKUP_TAG.replace_all(markup, "").replace('\n', " ")
}

/// Parse a Delivery API timestamp into Unix epoch milliseconds.
///
/// Timestamps without an offset are read as UTC.
pub fn to_unix_millis(date: &str) -> Result<f64, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Ok(parsed.timestamp_millis() as f64);
    }

    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().timestamp_millis() as f64)
        .map_err(|e| AppError::MalformedContent(format!("Invalid date '{}': {}", date, e)))
}

/// Build the full-replace product update for a published product.
pub fn build_product_update(
    umbraco_id: &str,
    item: &ContentItem,
    properties: &ProductProperties,
    umbraco_host: &str,
    locale: &CatalogLocale,
) -> Result<ProductUpdate, AppError> {
    let language = locale.language.as_str();
    let mut data = BTreeMap::new();

    // Search and recommendation data
    data.insert("Path".to_string(), DataValue::string(&item.route.path));
    if let Some(short_description) = &properties.short_description {
        data.insert(
            "ShortDescription".to_string(),
            DataValue::multilingual(language, short_description.as_str()),
        );
    }
    if let Some(long_description) = &properties.long_description {
        data.insert(
            "LongDescription".to_string(),
            DataValue::multilingual(language, sanitize_rich_text(&long_description.markup)),
        );
    }
    data.insert(
        "Tags".to_string(),
        DataValue::StringList(properties.tags.clone().unwrap_or_default()),
    );

    // Sorting
    data.insert(
        "CreateDate".to_string(),
        DataValue::Double(to_unix_millis(&item.create_date)?),
    );
    data.insert(
        "UpdateDate".to_string(),
        DataValue::Double(to_unix_millis(&item.update_date)?),
    );

    // Stored for later use
    match properties.images.as_deref().and_then(|images| images.first()) {
        Some(image) => {
            data.insert(
                "MainImage".to_string(),
                DataValue::string(format!("{}{}", umbraco_host, image.url)),
            );
        }
        None => tracing::warn!("Product {} has no images, omitting MainImage", properties.sku),
    }
    data.insert(UMBRACO_ID_KEY.to_string(), DataValue::string(umbraco_id));

    let mut product = Product {
        id: properties.sku.clone(),
        display_name: Multilingual::single(language, item.name.as_str()),
        data,
        list_price: None,
        sales_price: None,
    };

    let variants = properties
        .variants
        .as_ref()
        .map(|block| extract_variants(block, locale))
        .unwrap_or_default();

    if variants.is_empty() {
        let price = properties.price.as_ref().ok_or_else(|| {
            AppError::MalformedContent(format!(
                "Product {} has neither variants nor a price",
                properties.sku
            ))
        })?;
        let amount = MultiCurrency::single(&locale.currency, price.with_tax);
        product.list_price = Some(amount.clone());
        product.sales_price = Some(amount);

        Ok(ProductUpdate::clear_and_replace(product))
    } else {
        let mut update = ProductUpdate::clear_and_replace(product);
        update.variants = Some(variants);
        Ok(update)
    }
}

/// Map variant items to catalog variants, resolving attribute aliases to display names.
///
/// Alias pairs that do not resolve are skipped without error.
pub fn extract_variants(block: &VariantsBlock, locale: &CatalogLocale) -> Vec<ProductVariant> {
    let (Some(items), Some(attributes)) = (&block.items, &block.attributes) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let mut data = BTreeMap::new();
            for (attribute_alias, value_alias) in &item.attributes {
                let Some(attribute) = attributes.iter().find(|a| &a.alias == attribute_alias)
                else {
                    continue;
                };
                let Some(value) = attribute.values.iter().find(|v| &v.alias == value_alias) else {
                    continue;
                };

                data.insert(
                    attribute.name.clone(),
                    DataValue::multilingual_collection(&locale.language, vec![value.name.clone()]),
                );
            }

            let properties = &item.content.properties;
            let price = MultiCurrency::single(&locale.currency, properties.price.with_tax);
            ProductVariant {
                id: properties.sku.clone(),
                data,
                list_price: price.clone(),
                sales_price: price,
            }
        })
        .collect()
}

/// Disable every product whose `UmbracoId` data equals the given content key.
pub fn build_disable_action(umbraco_id: &str) -> ProductAdministrativeAction {
    ProductAdministrativeAction {
        language: None,
        currency: None,
        filters: FilterCollection {
            items: vec![ProductDataFilter::new(
                UMBRACO_ID_KEY,
                vec![EqualsCondition::new(DataValue::string(umbraco_id))],
            )],
        },
        product_update_kind: UpdateKind::Disable,
    }
}
