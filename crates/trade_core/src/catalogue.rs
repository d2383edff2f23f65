//! Reference catalogue of trading countries and product categories.
//!
//! The synthetic generator draws from these fixed lists. Loaded datasets are
//! not restricted to them: any non-empty label is a valid category.

/// The fifteen countries used by record synthesis, in draw order.
pub const COUNTRIES: [&str; 15] = [
    "USA",
    "China",
    "Germany",
    "Japan",
    "India",
    "UK",
    "France",
    "Brazil",
    "Canada",
    "South Korea",
    "Australia",
    "Mexico",
    "Russia",
    "Italy",
    "Spain",
];

/// A product category with its fixed volume bias in USD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductProfile {
    /// Category label
    pub name: &'static str,
    /// Additive volume offset applied to every transaction of this category
    pub volume_bias: f64,
}

/// The nine product categories used by record synthesis, in draw order.
pub const PRODUCTS: [ProductProfile; 9] = [
    ProductProfile { name: "Electronics", volume_bias: 5000.0 },
    ProductProfile { name: "Machinery", volume_bias: 4000.0 },
    ProductProfile { name: "Automotive", volume_bias: 6000.0 },
    ProductProfile { name: "Pharmaceuticals", volume_bias: 3000.0 },
    ProductProfile { name: "Mineral Fuels", volume_bias: 7000.0 },
    ProductProfile { name: "Plastics", volume_bias: 2000.0 },
    ProductProfile { name: "Iron & Steel", volume_bias: 2500.0 },
    ProductProfile { name: "Apparel", volume_bias: 1500.0 },
    ProductProfile { name: "Agriculture", volume_bias: 2000.0 },
];

/// Looks up the volume bias of a catalogue product.
///
/// # Examples
///
/// ```
/// use trade_core::catalogue::product_bias;
///
/// assert_eq!(product_bias("Mineral Fuels"), Some(7000.0));
/// assert_eq!(product_bias("Timber"), None);
/// ```
pub fn product_bias(name: &str) -> Option<f64> {
    PRODUCTS
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.volume_bias)
}
