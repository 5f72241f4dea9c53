//! Content records returned by the Umbraco Delivery API.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Content type alias of items that are synced to the catalog.
pub const PRODUCT_CONTENT_TYPE: &str = "product";

/// A single content item. Properties stay untyped until the content type is known.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(default)]
    pub content_type: Option<String>,
    pub name: String,
    pub route: ContentRoute,
    pub create_date: String,
    pub update_date: String,
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl ContentItem {
    /// Decode the properties as a product.
    pub fn product_properties(&self) -> Result<ProductProperties, serde_json::Error> {
        ProductProperties::deserialize(&self.properties)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRoute {
    pub path: String,
}

/// Properties of the `product` document type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProperties {
    pub sku: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<RichText>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<MediaItem>>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub variants: Option<VariantsBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub markup: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub with_tax: f64,
}

/// Expanded variants editor value: the variant items plus the attribute definitions they use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantsBlock {
    #[serde(default)]
    pub items: Option<Vec<VariantItem>>,
    #[serde(default)]
    pub attributes: Option<Vec<VariantAttribute>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantItem {
    pub content: VariantContent,
    /// Attribute alias to attribute value alias.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantContent {
    pub properties: VariantProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantProperties {
    pub sku: String,
    pub price: Price,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantAttribute {
    pub alias: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<VariantAttributeValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantAttributeValue {
    pub alias: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_product_parses_without_product_properties() {
        let item: ContentItem = serde_json::from_value(json!({
            "contentType": "blogPost",
            "name": "Hello",
            "route": { "path": "/blog/hello/" },
            "createDate": "2024-01-01T00:00:00Z",
            "updateDate": "2024-01-02T00:00:00Z",
            "properties": { "body": "text" }
        }))
        .unwrap();

        assert_eq!(item.content_type.as_deref(), Some("blogPost"));
        assert!(item.product_properties().is_err());
    }

    #[test]
    fn test_product_properties_with_variants() {
        let item: ContentItem = serde_json::from_value(json!({
            "contentType": "product",
            "name": "Shirt",
            "route": { "path": "/products/shirt/" },
            "createDate": "2024-01-01T00:00:00Z",
            "updateDate": "2024-01-02T00:00:00Z",
            "properties": {
                "sku": "SHIRT",
                "shortDescription": null,
                "tags": ["cotton"],
                "images": [],
                "price": { "withTax": 20.0, "withoutTax": 16.0 },
                "variants": {
                    "items": [{
                        "content": { "properties": { "sku": "SHIRT-RED", "price": { "withTax": 21.5 } } },
                        "attributes": { "color": "red" }
                    }],
                    "attributes": [{
                        "alias": "color",
                        "name": "Color",
                        "values": [{ "alias": "red", "name": "Red" }]
                    }]
                }
            }
        }))
        .unwrap();

        let props = item.product_properties().unwrap();
        assert_eq!(props.sku, "SHIRT");
        assert!(props.short_description.is_none());
        let variants = props.variants.unwrap();
        let items = variants.items.unwrap();
        assert_eq!(items[0].content.properties.sku, "SHIRT-RED");
        assert_eq!(items[0].attributes["color"], "red");
        assert_eq!(variants.attributes.unwrap()[0].values[0].name, "Red");
    }
}
