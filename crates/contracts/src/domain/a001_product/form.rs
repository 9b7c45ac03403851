//! Product form draft and its validation schema
//!
//! The draft is a client-only projection of a [`Product`]: plain strings as typed
//! by the user. [`validate`] checks the whole draft at once and produces a
//! [`ValidatedProduct`] with every empty optional normalized to `None`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::aggregate::Product;
use crate::domain::common::EntityRef;

// ============================================================================
// Draft
// ============================================================================

/// Product form draft, one string per input
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub code: String,
    pub category: String,
    pub subcategory: String,
    pub supplier: String,
    pub unit: String,
    pub purchase_price: String,
    pub sale_price: String,
    pub warranty: String,
    pub status: String,
    pub image: String,
}

impl ProductDraft {
    /// Draft for create mode
    pub fn for_create() -> Self {
        Self {
            status: "active".to_string(),
            ..Self::default()
        }
    }

    /// Draft for edit mode, seeded from a fetched product
    pub fn from_product(product: &Product) -> Self {
        let id_of = |r: &Option<EntityRef>| {
            r.as_ref().map(|r| r.id().to_string()).unwrap_or_default()
        };
        Self {
            name: product.name.clone(),
            code: product.code.clone().unwrap_or_default(),
            category: id_of(&product.category),
            subcategory: String::new(),
            supplier: id_of(&product.supplier),
            unit: id_of(&product.unit),
            purchase_price: product.purchase_price.to_string(),
            sale_price: product
                .sale_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            warranty: product.warranty.clone().unwrap_or_default(),
            status: product.status.as_str().to_string(),
            image: product.image.clone().unwrap_or_default(),
        }
    }

    pub fn value(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Code => &self.code,
            ProductField::Category => &self.category,
            ProductField::Subcategory => &self.subcategory,
            ProductField::Supplier => &self.supplier,
            ProductField::Unit => &self.unit,
            ProductField::PurchasePrice => &self.purchase_price,
            ProductField::SalePrice => &self.sale_price,
            ProductField::Warranty => &self.warranty,
            ProductField::Status => &self.status,
            ProductField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Code => self.code = value,
            ProductField::Category => self.category = value,
            ProductField::Subcategory => self.subcategory = value,
            ProductField::Supplier => self.supplier = value,
            ProductField::Unit => self.unit = value,
            ProductField::PurchasePrice => self.purchase_price = value,
            ProductField::SalePrice => self.sale_price = value,
            ProductField::Warranty => self.warranty = value,
            ProductField::Status => self.status = value,
            ProductField::Image => self.image = value,
        }
    }
}

/// Form fields, in schema order. The order is also the multipart field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Code,
    Supplier,
    Category,
    Subcategory,
    PurchasePrice,
    SalePrice,
    Warranty,
    Status,
    Image,
    Unit,
}

impl ProductField {
    pub const ALL: [ProductField; 11] = [
        ProductField::Name,
        ProductField::Code,
        ProductField::Supplier,
        ProductField::Category,
        ProductField::Subcategory,
        ProductField::PurchasePrice,
        ProductField::SalePrice,
        ProductField::Warranty,
        ProductField::Status,
        ProductField::Image,
        ProductField::Unit,
    ];

    /// Multipart part name
    pub fn wire_name(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Code => "code",
            ProductField::Supplier => "supplier",
            ProductField::Category => "category",
            ProductField::Subcategory => "subcategory",
            ProductField::PurchasePrice => "purchasePrice",
            ProductField::SalePrice => "salePrice",
            ProductField::Warranty => "warranty",
            ProductField::Status => "status",
            ProductField::Image => "image",
            ProductField::Unit => "unit",
        }
    }

    /// Validation rules applied to the field, first violated rule wins
    fn rules(&self) -> &'static [Rule] {
        match self {
            ProductField::Name => &[Rule::Required, Rule::MaxLen(50)],
            ProductField::Code => &[Rule::MaxLen(30)],
            ProductField::Supplier => &[Rule::Required],
            ProductField::Category => &[],
            ProductField::Subcategory => &[Rule::Number],
            ProductField::PurchasePrice => &[Rule::Required, Rule::Number],
            ProductField::SalePrice => &[Rule::Number],
            ProductField::Warranty => &[Rule::MaxLen(50)],
            ProductField::Status => &[Rule::Required, Rule::MaxLen(10)],
            ProductField::Image => &[Rule::MaxLen(500)],
            ProductField::Unit => &[],
        }
    }
}

// ============================================================================
// Schema
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    MaxLen(usize),
    /// Must parse as a number when present
    Number,
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        match *self {
            Rule::Required if trimmed.is_empty() => Err("is required".to_string()),
            Rule::MaxLen(max) if value.chars().count() > max => {
                Err(format!("must be at most {} characters", max))
            }
            Rule::Number if !trimmed.is_empty() && parse_number(trimmed).is_none() => {
                Err("must be a number".to_string())
            }
            _ => Ok(()),
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn present(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Validation errors: exactly one message per failing field, ordered by schema order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<ProductField, String>,
}

impl FieldErrors {
    pub fn get(&self, field: ProductField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<ProductField> {
        self.errors.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{} {}", field.wire_name(), msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// Validated form
// ============================================================================

/// Draft that passed validation; absent optionals are `None`, never empty strings
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub name: String,
    pub code: Option<String>,
    pub supplier: String,
    pub category: Option<String>,
    /// Numeric reference, kept as the trimmed text the user entered
    pub subcategory: Option<String>,
    pub purchase_price: f64,
    pub sale_price: Option<f64>,
    pub warranty: Option<String>,
    pub status: String,
    pub image: Option<String>,
    pub unit: Option<String>,
}

impl ValidatedProduct {
    /// Present fields as (part name, text) pairs in schema order
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let values = [
            (ProductField::Name, Some(self.name.clone())),
            (ProductField::Code, self.code.clone()),
            (ProductField::Supplier, Some(self.supplier.clone())),
            (ProductField::Category, self.category.clone()),
            (ProductField::Subcategory, self.subcategory.clone()),
            (ProductField::PurchasePrice, Some(self.purchase_price.to_string())),
            (ProductField::SalePrice, self.sale_price.map(|n| n.to_string())),
            (ProductField::Warranty, self.warranty.clone()),
            (ProductField::Status, Some(self.status.clone())),
            (ProductField::Image, self.image.clone()),
            (ProductField::Unit, self.unit.clone()),
        ];
        values
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field.wire_name(), v)))
            .collect()
    }
}

/// Validate the whole draft against the product schema
pub fn validate(draft: &ProductDraft) -> Result<ValidatedProduct, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in ProductField::ALL {
        let value = draft.value(field);
        if let Some(msg) = field.rules().iter().find_map(|r| r.check(value).err()) {
            errors.errors.insert(field, msg);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    // Rules above guarantee the required numbers parse
    let purchase_price = parse_number(&draft.purchase_price).ok_or_else(|| FieldErrors {
        errors: BTreeMap::from([(ProductField::PurchasePrice, "must be a number".to_string())]),
    })?;

    Ok(ValidatedProduct {
        name: draft.name.clone(),
        code: present(&draft.code),
        supplier: draft.supplier.trim().to_string(),
        category: present(draft.category.trim()),
        subcategory: present(draft.subcategory.trim()),
        purchase_price,
        sale_price: parse_number(&draft.sale_price),
        warranty: present(&draft.warranty),
        status: draft.status.trim().to_string(),
        image: present(&draft.image),
        unit: present(&draft.unit),
    })
}
